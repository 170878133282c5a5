use super::*;

/// Tests that get_all returns every live row and skips soft-deleted ones.
///
/// Expected: Ok(vec) with exactly the live companies
#[tokio::test]
async fn returns_only_live_entities() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_company(db).await?;
    let second = factory::create_company(db).await?;
    let removed = factory::create_company(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    assert!(uow.companies().soft_delete(removed.id).await?);
    uow.save_changes().await?;

    let mut ids: Vec<Uuid> = uow
        .companies()
        .get_all()
        .await?
        .into_iter()
        .map(|company| company.id)
        .collect();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();

    assert_eq!(ids, expected);
    assert_eq!(uow.companies().get_all_including_deleted().await?.len(), 3);

    Ok(())
}

/// Tests get_all on an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::new(db.clone());

    assert!(uow.companies().get_all().await?.is_empty());

    Ok(())
}
