use super::*;
use sea_orm::EntityTrait;

/// Tests the affected row count across inserts, updates and deletes.
///
/// Expected: Ok(n) where n counts every written row, then Ok(0) with nothing staged
#[tokio::test]
async fn returns_number_of_affected_rows() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut existing = factory::create_company(db).await?;
    let doomed = factory::create_airport(db).await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.companies()
        .add(factory::company::CompanyFactory::new().build())?;
    uow.airports()
        .add(factory::airport::AirportFactory::new().build())?;
    existing.is_verified = true;
    uow.companies().update(existing)?;
    uow.airports().remove(&doomed)?;

    assert_eq!(uow.pending_changes(), 4);
    assert_eq!(uow.save_changes().await?, 4);
    assert_eq!(uow.pending_changes(), 0);
    assert_eq!(uow.save_changes().await?, 0);

    Ok(())
}

/// Tests that a whole entity graph staged children-first is inserted in one save.
///
/// Expected: Ok(count) and every row visible; foreign keys are satisfied because parents
/// are inserted before children regardless of staging order
#[tokio::test]
async fn inserts_parents_before_children() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::CompanyFactory::new().build();
    let aircraft = factory::aircraft::AircraftFactory::new(company.id).build();
    let departure = factory::airport::AirportFactory::new().build();
    let arrival = factory::airport::AirportFactory::new().build();
    let flight =
        factory::flight::FlightFactory::new(company.id, aircraft.id, departure.id, arrival.id)
            .build();
    let user = factory::user::UserFactory::new().company(company.id).build();
    let booking = factory::booking::BookingFactory::new(flight.id, user.id).build();
    let passenger = factory::passenger::PassengerFactory::new(booking.id).build();
    let payment = factory::payment::PaymentFactory::new(booking.id).build();
    let service = factory::booking_service::BookingServiceFactory::new(booking.id).build();
    let document = factory::document::DocumentFactory::new(user.id)
        .booking(booking.id)
        .build();
    let review = factory::review::ReviewFactory::new(user.id, flight.id).build();
    let alert = factory::user_alert::UserAlertFactory::new(user.id)
        .route(departure.id, arrival.id)
        .build();
    let token = factory::refresh_token::RefreshTokenFactory::new(user.id).build();

    let mut uow = UnitOfWork::new(db.clone());
    uow.refresh_tokens().add(token)?;
    uow.user_alerts().add(alert)?;
    uow.reviews().add(review)?;
    uow.documents().add(document)?;
    uow.booking_services().add(service)?;
    uow.payments().add(payment)?;
    uow.passengers().add(passenger)?;
    uow.bookings().add(booking.clone())?;
    uow.flights().add(flight)?;
    uow.aircraft().add(aircraft)?;
    uow.airports().add_range([departure, arrival])?;
    uow.users().add(user)?;
    uow.companies().add(company)?;

    assert_eq!(uow.save_changes().await?, 14);

    let stored = uow.bookings().get_by_id(booking.id).await?;
    assert_eq!(stored.map(|booking| booking.reference), Some(booking.reference));
    assert_eq!(uow.refresh_tokens().count().await?, 1);

    Ok(())
}

/// Tests atomicity when one staged change violates a constraint.
///
/// Verifies that none of the batch is written and that the staged changes are kept so the
/// caller can fix or discard them.
///
/// Expected: Err(DataError::Storage), no rows written, pending changes retained
#[tokio::test]
async fn failed_save_writes_nothing_and_keeps_changes() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::airport::AirportFactory::new()
        .iata_code("LHR")
        .insert(db)
        .await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.companies()
        .add(factory::company::CompanyFactory::new().build())?;
    uow.airports()
        .add(factory::airport::AirportFactory::new().iata_code("NCE").build())?;
    uow.airports()
        .add(factory::airport::AirportFactory::new().iata_code("LHR").build())?;

    let result = uow.save_changes().await;

    assert!(matches!(result, Err(DataError::Storage(_))));
    assert_eq!(uow.pending_changes(), 3);
    assert_eq!(uow.companies().count().await?, 0);
    assert_eq!(uow.airports().count().await?, 1);

    uow.discard_changes();
    assert_eq!(uow.save_changes().await?, 0);

    Ok(())
}

/// Tests that a storage-level restriction surfaces as a storage error.
///
/// Expected: hard-deleting a booking with a recorded payment fails and leaves it in place
#[tokio::test]
async fn propagates_foreign_key_violation() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    factory::create_payment(db, booking.id).await?;

    let mut uow = UnitOfWork::new(db.clone());
    uow.bookings().remove(&booking)?;

    assert!(matches!(
        uow.save_changes().await,
        Err(DataError::Storage(_))
    ));
    assert!(entity::booking::Entity::find_by_id(booking.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that changes staged in one unit of work stay private to it until saved.
///
/// Expected: a second unit of work sees nothing before save and the row after
#[tokio::test]
async fn staged_changes_are_private_until_saved() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let airport = factory::create_airport(db).await?;

    let mut writer = UnitOfWork::new(db.clone());
    let reader = UnitOfWork::new(db.clone());
    let mut renamed = airport.clone();
    renamed.name = "Renamed".to_string();
    writer.airports().update(renamed)?;
    writer
        .companies()
        .add(factory::company::CompanyFactory::new().build())?;

    let seen = reader.airports().get_by_id(airport.id).await?;
    assert_eq!(seen.map(|airport| airport.name), Some(airport.name));
    assert_eq!(reader.companies().count().await?, 0);
    assert_eq!(reader.pending_changes(), 0);

    writer.save_changes().await?;

    let seen = reader.airports().get_by_id(airport.id).await?;
    assert_eq!(seen.map(|airport| airport.name), Some("Renamed".to_string()));
    assert_eq!(reader.companies().count().await?, 1);

    Ok(())
}

/// Tests that discard_changes drops every staged change without touching storage.
#[tokio::test]
async fn discard_changes_clears_every_repository() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut uow = UnitOfWork::new(db.clone());
    uow.companies()
        .add(factory::company::CompanyFactory::new().build())?;
    uow.users().add(factory::user::UserFactory::new().build())?;
    uow.users().soft_delete(Uuid::new_v4()).await?;

    uow.discard_changes();

    assert_eq!(uow.pending_changes(), 0);
    assert_eq!(uow.save_changes().await?, 0);

    Ok(())
}
