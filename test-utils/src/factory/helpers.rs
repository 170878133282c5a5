//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation, a direct insert used by every factory, and convenience
//! methods for creating entities together with the parents their foreign keys require.

use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for unique columns such as emails, IATA codes and booking references.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Current time at the microsecond precision stored by the data layer.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Inserts a complete model as-is, bypassing any unit of work.
///
/// # Returns
/// - `Ok(Model)` - The inserted model, unchanged
/// - `Err(DbErr)` - Database error during insert (constraint violation, missing table, ...)
pub async fn insert_model<E>(db: &DatabaseConnection, model: E::Model) -> Result<E::Model, DbErr>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Clone,
{
    let mut active = model.clone().into_active_model();
    for column in E::Column::iter() {
        active.reset(column);
    }

    E::insert(active).exec_without_returning(db).await?;

    Ok(model)
}

/// Creates a flight together with its operator, aircraft and both airports.
///
/// # Returns
/// - `Ok((company, aircraft, departure, arrival, flight))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::company::Model,
        entity::aircraft::Model,
        entity::airport::Model,
        entity::airport::Model,
        entity::flight::Model,
    ),
    DbErr,
> {
    let company = crate::factory::company::create_company(db).await?;
    let aircraft = crate::factory::aircraft::create_aircraft(db, company.id).await?;
    let departure = crate::factory::airport::create_airport(db).await?;
    let arrival = crate::factory::airport::create_airport(db).await?;
    let flight = crate::factory::flight::FlightFactory::new(
        company.id,
        aircraft.id,
        departure.id,
        arrival.id,
    )
    .insert(db)
    .await?;

    Ok((company, aircraft, departure, arrival, flight))
}

/// Creates a booking for a new user on a new flight.
///
/// # Returns
/// - `Ok((user, flight, booking))` - The customer, the booked flight and the booking
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::flight::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (_, _, _, _, flight) = create_flight_with_dependencies(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let booking = crate::factory::booking::create_booking(db, flight.id, user.id).await?;

    Ok((user, flight, booking))
}
