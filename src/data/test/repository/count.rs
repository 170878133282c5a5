use super::*;

/// Tests counting live rows with and without a predicate.
///
/// Expected: soft-deleted rows are excluded from both counts
#[tokio::test]
async fn counts_only_live_rows() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::company::CompanyFactory::new().verified(true).insert(db).await?;
    factory::company::CompanyFactory::new().verified(true).insert(db).await?;
    let unverified = factory::create_company(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    let verified = entity::company::Column::IsVerified.eq(true);

    assert_eq!(uow.companies().count().await?, 3);
    assert_eq!(uow.companies().count_where(verified.clone()).await?, 2);

    uow.companies().soft_delete(unverified.id).await?;
    uow.save_changes().await?;

    assert_eq!(uow.companies().count().await?, 2);
    assert_eq!(uow.companies().count_where(verified).await?, 2);

    Ok(())
}

/// Tests that staged inserts are not counted before save.
///
/// Expected: count is 0 until save_changes, then 1
#[tokio::test]
async fn staged_insert_not_counted_until_saved() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.companies().add(factory::company::CompanyFactory::new().build())?;

    assert_eq!(uow.companies().count().await?, 0);

    uow.save_changes().await?;

    assert_eq!(uow.companies().count().await?, 1);

    Ok(())
}
