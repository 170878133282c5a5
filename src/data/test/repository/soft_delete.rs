use super::*;
use chrono::{SubsecRound, Utc};
use sea_orm::EntityTrait;

/// Tests the stored effect of a soft delete.
///
/// Verifies that the row survives in storage with the flag set and a deletion time inside
/// the window of the call, while every filtered read hides it.
///
/// Expected: Ok(true), raw row is_deleted with deleted_at in [before, after]
#[tokio::test]
async fn flags_row_and_hides_it_from_reads() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    let before = Utc::now().trunc_subsecs(6);
    assert!(uow.users().soft_delete(user.id).await?);
    uow.save_changes().await?;
    let after = Utc::now();

    let raw = entity::user::Entity::find_by_id(user.id).one(db).await?;
    let raw = raw.expect("soft-deleted row must still exist");
    assert!(raw.is_deleted);
    let deleted_at = raw.deleted_at.expect("deleted_at must be set");
    assert!(deleted_at >= before && deleted_at <= after);

    assert!(uow.users().get_by_id(user.id).await?.is_none());
    assert!(uow.users().get_all().await?.is_empty());
    assert_eq!(uow.users().count().await?, 0);

    Ok(())
}

/// Tests soft delete of an id that does not exist.
///
/// Expected: Ok(false) and nothing staged
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::new(db.clone());

    assert!(!uow.users().soft_delete(Uuid::new_v4()).await?);
    assert_eq!(uow.pending_changes(), 0);

    Ok(())
}

/// Tests that soft delete is idempotent, both before and after saving.
///
/// Expected: first call Ok(true), every later call Ok(false), deleted_at unchanged
#[tokio::test]
async fn repeated_soft_delete_returns_false() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let airport = factory::create_airport(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    assert!(uow.airports().soft_delete(airport.id).await?);
    assert!(!uow.airports().soft_delete(airport.id).await?);
    assert_eq!(uow.pending_changes(), 1);

    uow.save_changes().await?;
    let first = uow
        .airports()
        .get_by_id_including_deleted(airport.id)
        .await?
        .and_then(|airport| airport.deleted_at);

    assert!(!uow.airports().soft_delete(airport.id).await?);
    assert_eq!(uow.pending_changes(), 0);

    let second = uow
        .airports()
        .get_by_id_including_deleted(airport.id)
        .await?
        .and_then(|airport| airport.deleted_at);
    assert!(first.is_some());
    assert_eq!(first, second);

    Ok(())
}

/// Tests that soft deleting a parent leaves its children visible.
///
/// Expected: passengers of a soft-deleted booking are still returned
#[tokio::test]
async fn does_not_cascade_to_children() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    factory::create_passenger(db, booking.id).await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.bookings().soft_delete(booking.id).await?;
    uow.save_changes().await?;

    assert!(uow.bookings().get_by_id(booking.id).await?.is_none());
    assert_eq!(
        uow.passengers()
            .count_where(entity::passenger::Column::BookingId.eq(booking.id))
            .await?,
        1
    );

    Ok(())
}

/// Tests restoring a soft-deleted row.
///
/// Expected: Ok(true) and the row is live again with deleted_at cleared; restoring a live
/// row returns Ok(false)
#[tokio::test]
async fn restore_reverses_soft_delete() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let company = factory::create_company(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.companies().soft_delete(company.id).await?;
    uow.save_changes().await?;

    assert!(uow.companies().restore(company.id).await?);
    uow.save_changes().await?;

    let restored = uow.companies().get_by_id(company.id).await?;
    assert!(restored.is_some_and(|company| !company.is_deleted && company.deleted_at.is_none()));
    assert!(!uow.companies().restore(company.id).await?);

    Ok(())
}
