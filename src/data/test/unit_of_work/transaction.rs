use super::*;

/// Tests that a second begin while a transaction is open is rejected.
///
/// Expected: Err(DataError::TransactionState), the original transaction stays open
#[tokio::test]
async fn begin_twice_fails() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;

    assert!(matches!(
        uow.begin_transaction().await,
        Err(DataError::TransactionState(_))
    ));
    assert!(uow.in_transaction());

    uow.rollback_transaction().await?;
    assert!(!uow.in_transaction());

    Ok(())
}

/// Tests that commit and rollback without an open transaction do nothing.
///
/// Expected: Ok(()) for both, staged changes untouched
#[tokio::test]
async fn commit_and_rollback_without_transaction_are_noops() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.companies()
        .add(factory::company::CompanyFactory::new().build())?;

    uow.commit_transaction().await?;
    uow.rollback_transaction().await?;

    assert!(!uow.in_transaction());
    assert_eq!(uow.pending_changes(), 1);

    Ok(())
}

/// Tests that flushed changes inside a rolled back transaction disappear.
///
/// Verifies the unit of work reads its own flushed changes while the transaction is open.
///
/// Expected: row visible inside the transaction, gone after rollback
#[tokio::test]
async fn rollback_discards_flushed_changes() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    let company = uow
        .companies()
        .add(factory::company::CompanyFactory::new().build())?;
    assert_eq!(uow.save_changes().await?, 1);

    assert!(uow.companies().get_by_id(company.id).await?.is_some());

    uow.rollback_transaction().await?;

    assert!(uow.companies().get_by_id(company.id).await?.is_none());

    Ok(())
}

/// Tests that rollback also drops changes staged after the last save.
///
/// Expected: nothing pending after rollback
#[tokio::test]
async fn rollback_discards_staged_changes() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    uow.airports()
        .add(factory::airport::AirportFactory::new().build())?;

    uow.rollback_transaction().await?;

    assert_eq!(uow.pending_changes(), 0);
    assert_eq!(uow.save_changes().await?, 0);

    Ok(())
}

/// Tests that several saves inside a transaction become durable together on commit.
///
/// Expected: a fresh unit of work sees every row after commit
#[tokio::test]
async fn commit_makes_all_saves_durable() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    let company = uow
        .companies()
        .add(factory::company::CompanyFactory::new().build())?;
    uow.save_changes().await?;
    let aircraft = uow
        .aircraft()
        .add(factory::aircraft::AircraftFactory::new(company.id).build())?;
    uow.save_changes().await?;
    uow.commit_transaction().await?;

    assert!(!uow.in_transaction());

    let fresh = UnitOfWork::new(db.clone());
    assert!(fresh.companies().get_by_id(company.id).await?.is_some());
    assert!(fresh.aircraft().get_by_id(aircraft.id).await?.is_some());

    Ok(())
}

/// Tests that a failed save inside a transaction only undoes that save.
///
/// Expected: earlier save kept, failed save rolled back to its savepoint, commit succeeds
#[tokio::test]
async fn failed_save_rolls_back_to_savepoint() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    uow.airports()
        .add(factory::airport::AirportFactory::new().iata_code("GVA").build())?;
    uow.save_changes().await?;

    uow.airports()
        .add(factory::airport::AirportFactory::new().iata_code("GVA").build())?;
    assert!(matches!(
        uow.save_changes().await,
        Err(DataError::Storage(_))
    ));
    assert!(uow.in_transaction());

    uow.discard_changes();
    uow.commit_transaction().await?;

    assert_eq!(uow.airports().count().await?, 1);

    Ok(())
}

/// Tests that an update staged inside a transaction is persisted by commit alone.
///
/// Expected: a fresh unit of work reads the updated value
#[tokio::test]
async fn commit_saves_staged_update() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut company = factory::create_company(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    company.name = "Renamed Jets".to_string();
    uow.companies().update(company.clone())?;
    uow.commit_transaction().await?;

    assert_eq!(uow.pending_changes(), 0);

    let fresh = UnitOfWork::new(db.clone());
    let stored = fresh.companies().get_by_id(company.id).await?;
    assert_eq!(stored.map(|company| company.name), Some("Renamed Jets".to_string()));

    Ok(())
}

/// Tests that an update staged inside a rolled back transaction never reaches storage.
///
/// Expected: a fresh read returns the original value
#[tokio::test]
async fn rollback_hides_staged_update() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let company = factory::create_company(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.begin_transaction().await?;
    let mut renamed = company.clone();
    renamed.name = "Renamed Jets".to_string();
    uow.companies().update(renamed)?;
    uow.rollback_transaction().await?;

    let stored = uow.companies().get_by_id(company.id).await?;
    assert_eq!(stored.map(|company| company.name), Some(company.name));

    Ok(())
}
