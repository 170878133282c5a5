use super::*;

/// Tests that every operation fails once the unit of work is disposed.
///
/// Expected: Err(DataError::Disposed) from reads, staging, saves and transaction control
#[tokio::test]
async fn operations_fail_after_dispose() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.dispose().await?;

    assert!(matches!(
        uow.companies().get_all().await,
        Err(DataError::Disposed)
    ));
    assert!(matches!(
        uow.companies().get_by_id(Uuid::new_v4()).await,
        Err(DataError::Disposed)
    ));
    assert!(matches!(
        uow.companies()
            .add(factory::company::CompanyFactory::new().build()),
        Err(DataError::Disposed)
    ));
    assert!(matches!(uow.save_changes().await, Err(DataError::Disposed)));
    assert!(matches!(
        uow.begin_transaction().await,
        Err(DataError::Disposed)
    ));
    assert!(matches!(
        uow.commit_transaction().await,
        Err(DataError::Disposed)
    ));

    Ok(())
}

/// Tests that dispose can be called repeatedly.
///
/// Expected: Ok(()) every time
#[tokio::test]
async fn dispose_is_idempotent() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.dispose().await?;
    uow.dispose().await?;

    Ok(())
}

/// Tests that disposing with an open transaction rolls it back.
///
/// Expected: changes saved inside the transaction are not visible to a new unit of work
#[tokio::test]
async fn dispose_rolls_back_open_transaction() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    uow.companies()
        .add(factory::company::CompanyFactory::new().build())?;
    uow.save_changes().await?;
    uow.users().add(factory::user::UserFactory::new().build())?;

    uow.dispose().await?;

    assert!(!uow.in_transaction());
    assert_eq!(uow.pending_changes(), 0);

    let fresh = UnitOfWork::new(db.clone());
    assert_eq!(fresh.companies().count().await?, 0);

    Ok(())
}
