use super::*;

/// Tests the explicit soft-delete cascade from a booking to the rows it owns.
///
/// Expected: booking, passengers and booking services hidden; payments untouched
#[tokio::test]
async fn soft_deletes_booking_and_children() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_booking_with_dependencies(db).await?;
    factory::create_passenger(db, booking.id).await?;
    factory::create_passenger(db, booking.id).await?;
    factory::create_passenger(db, other.id).await?;
    factory::create_booking_service(db, booking.id).await?;
    factory::create_payment(db, booking.id).await?;

    let mut uow = UnitOfWork::new(db.clone());
    assert!(uow.soft_delete_booking_cascade(booking.id).await?);
    assert_eq!(uow.pending_changes(), 4);
    assert_eq!(uow.save_changes().await?, 4);

    assert!(uow.bookings().get_by_id(booking.id).await?.is_none());
    assert_eq!(uow.passengers().count().await?, 1);
    assert_eq!(uow.booking_services().count().await?, 0);
    assert_eq!(uow.payments().count().await?, 1);
    assert!(uow
        .passengers()
        .get_all_including_deleted()
        .await?
        .iter()
        .filter(|passenger| passenger.booking_id == booking.id)
        .all(|passenger| passenger.is_deleted && passenger.deleted_at.is_some()));

    Ok(())
}

/// Tests the cascade for a booking that does not exist.
///
/// Expected: Ok(false) and nothing staged
#[tokio::test]
async fn returns_false_for_unknown_booking() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::new(db.clone());

    assert!(!uow.soft_delete_booking_cascade(Uuid::new_v4()).await?);
    assert_eq!(uow.pending_changes(), 0);

    Ok(())
}
