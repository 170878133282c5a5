use super::*;
use chrono::{SubsecRound, Utc};

/// Tests that add assigns an id and audit timestamps before anything is saved.
///
/// Expected: non-nil id, created_at == updated_at within the call window, not deleted
#[tokio::test]
async fn stamps_id_and_timestamps() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut company = factory::company::CompanyFactory::new().build();
    company.id = Uuid::nil();
    company.is_deleted = true;

    let uow = UnitOfWork::new(db.clone());
    let before = Utc::now().trunc_subsecs(6);
    let added = uow.companies().add(company)?;
    let after = Utc::now();

    assert!(!added.id.is_nil());
    assert_eq!(added.created_at, added.updated_at);
    assert!(added.created_at >= before && added.created_at <= after);
    assert!(!added.is_deleted);
    assert!(added.deleted_at.is_none());
    assert_eq!(uow.pending_changes(), 1);

    Ok(())
}

/// Tests that a caller-chosen id is kept.
///
/// Expected: returned id equals the supplied one
#[tokio::test]
async fn keeps_supplied_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let company = factory::company::CompanyFactory::new().build();

    let uow = UnitOfWork::new(db.clone());
    let added = uow.companies().add(company.clone())?;

    assert_eq!(added.id, company.id);

    Ok(())
}

/// Tests that an added entity is invisible to reads until saved, including reads from a
/// second unit of work, and readable by id afterwards.
///
/// Expected: Ok(None) before save_changes, Ok(Some) after
#[tokio::test]
async fn visible_only_after_save() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    let other = UnitOfWork::new(db.clone());
    let added = uow
        .airports()
        .add(factory::airport::AirportFactory::new().build())?;

    assert!(uow.airports().get_by_id(added.id).await?.is_none());
    assert!(other.airports().get_by_id(added.id).await?.is_none());

    assert_eq!(uow.save_changes().await?, 1);

    assert_eq!(uow.airports().get_by_id(added.id).await?, Some(added.clone()));
    assert_eq!(other.airports().get_by_id(added.id).await?, Some(added));

    Ok(())
}

/// Tests staging several entities at once.
///
/// Expected: every model gets its own id and all are inserted by one save
#[tokio::test]
async fn add_range_stages_every_model() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    let added = uow.airports().add_range(
        (0..3).map(|_| factory::airport::AirportFactory::new().build()),
    )?;

    assert_eq!(added.len(), 3);
    assert_eq!(uow.airports().pending_changes(), 3);
    assert_eq!(uow.save_changes().await?, 3);
    assert_eq!(uow.airports().count().await?, 3);

    Ok(())
}
