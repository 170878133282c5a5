use super::*;

/// Tests that each accessor hands out the same repository instance every time.
///
/// Expected: repeated calls return pointer-equal references
#[tokio::test]
async fn repositories_have_stable_identity() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::new(db.clone());

    assert!(std::ptr::eq(uow.users(), uow.users()));
    assert!(std::ptr::eq(uow.companies(), uow.companies()));
    assert!(std::ptr::eq(uow.airports(), uow.airports()));
    assert!(std::ptr::eq(uow.aircraft(), uow.aircraft()));
    assert!(std::ptr::eq(uow.flights(), uow.flights()));
    assert!(std::ptr::eq(uow.bookings(), uow.bookings()));
    assert!(std::ptr::eq(uow.passengers(), uow.passengers()));
    assert!(std::ptr::eq(uow.payments(), uow.payments()));
    assert!(std::ptr::eq(uow.booking_services(), uow.booking_services()));
    assert!(std::ptr::eq(uow.documents(), uow.documents()));
    assert!(std::ptr::eq(uow.reviews(), uow.reviews()));
    assert!(std::ptr::eq(uow.user_alerts(), uow.user_alerts()));
    assert!(std::ptr::eq(uow.refresh_tokens(), uow.refresh_tokens()));

    Ok(())
}

/// Tests that a change staged through one accessor call is seen through the next.
///
/// Expected: pending count tracked on the shared repository
#[tokio::test]
async fn staged_changes_survive_accessor_calls() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::new(db.clone());
    uow.users().add(factory::user::UserFactory::new().build())?;

    assert_eq!(uow.users().pending_changes(), 1);

    Ok(())
}
