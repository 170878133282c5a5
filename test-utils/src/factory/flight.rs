//! Flight factory for creating test empty-leg flights.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, now};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let flight = FlightFactory::new(company.id, aircraft.id, lhr.id, nce.id)
///     .price(450_000)
///     .departure_time(Utc::now() + Duration::days(2))
///     .build();
/// ```
pub struct FlightFactory {
    company_id: Uuid,
    aircraft_id: Uuid,
    departure_airport_id: Uuid,
    arrival_airport_id: Uuid,
    departure_time: DateTime<Utc>,
    duration: Duration,
    price: i64,
    currency: String,
    available_seats: i32,
    status: String,
}

impl FlightFactory {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - departure_time: 1 day from now, arriving 2 hours later
    /// - price: `250_000` minor units in `"EUR"`
    /// - available_seats: `6`
    /// - status: `"scheduled"`
    pub fn new(
        company_id: Uuid,
        aircraft_id: Uuid,
        departure_airport_id: Uuid,
        arrival_airport_id: Uuid,
    ) -> Self {
        Self {
            company_id,
            aircraft_id,
            departure_airport_id,
            arrival_airport_id,
            departure_time: now() + Duration::days(1),
            duration: Duration::hours(2),
            price: 250_000,
            currency: "EUR".to_string(),
            available_seats: 6,
            status: "scheduled".to_string(),
        }
    }

    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self
    }

    /// Sets the price in minor currency units.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn available_seats(mut self, available_seats: i32) -> Self {
        self.available_seats = available_seats;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds the flight model without saving it.
    pub fn build(self) -> entity::flight::Model {
        let now = now();
        entity::flight::Model {
            id: Uuid::new_v4(),
            company_id: self.company_id,
            aircraft_id: self.aircraft_id,
            departure_airport_id: self.departure_airport_id,
            arrival_airport_id: self.arrival_airport_id,
            departure_time: self.departure_time,
            arrival_time: self.departure_time + self.duration,
            price: self.price,
            currency: self.currency,
            available_seats: self.available_seats,
            status: self.status,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// Builds and inserts the flight into the database.
    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
        insert_model::<entity::flight::Entity>(db, self.build()).await
    }
}

/// Creates a flight with default values between the given airports.
pub async fn create_flight(
    db: &DatabaseConnection,
    company_id: Uuid,
    aircraft_id: Uuid,
    departure_airport_id: Uuid,
    arrival_airport_id: Uuid,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(company_id, aircraft_id, departure_airport_id, arrival_airport_id)
        .insert(db)
        .await
}
