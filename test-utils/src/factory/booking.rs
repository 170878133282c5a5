//! Booking factory for creating test bookings.

use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test bookings on a flight.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(flight.id, user.id)
///     .reference("EL-0042")
///     .seat_count(3)
///     .insert(&db)
///     .await?;
/// ```
pub struct BookingFactory {
    flight_id: Uuid,
    user_id: Uuid,
    reference: String,
    seat_count: i32,
    total_price: i64,
    status: String,
}

impl BookingFactory {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - reference: `"EL-{id}"` where id is auto-incremented
    /// - seat_count: `1`, total_price: `250_000` EUR minor units
    /// - status: `"pending"`
    pub fn new(flight_id: Uuid, user_id: Uuid) -> Self {
        Self {
            flight_id,
            user_id,
            reference: format!("EL-{:06}", next_id()),
            seat_count: 1,
            total_price: 250_000,
            status: "pending".to_string(),
        }
    }

    /// Sets the booking reference, which must be unique.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn seat_count(mut self, seat_count: i32) -> Self {
        self.seat_count = seat_count;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds the booking model without saving it.
    pub fn build(self) -> entity::booking::Model {
        let now = now();
        entity::booking::Model {
            id: Uuid::new_v4(),
            flight_id: self.flight_id,
            user_id: self.user_id,
            reference: self.reference,
            seat_count: self.seat_count,
            total_price: self.total_price,
            currency: "EUR".to_string(),
            status: self.status,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// Builds and inserts the booking into the database.
    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::booking::Model, DbErr> {
        insert_model::<entity::booking::Entity>(db, self.build()).await
    }
}

/// Creates a booking with default values for `user_id` on `flight_id`.
pub async fn create_booking(
    db: &DatabaseConnection,
    flight_id: Uuid,
    user_id: Uuid,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(flight_id, user_id).insert(db).await
}
