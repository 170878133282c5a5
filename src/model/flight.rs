use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FlightDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub aircraft_id: Uuid,
    pub departure_airport_id: Uuid,
    pub arrival_airport_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    /// Price in minor currency units.
    pub price: i64,
    pub currency: String,
    pub available_seats: i32,
    pub status: String,
}

impl FlightDto {
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            aircraft_id: entity.aircraft_id,
            departure_airport_id: entity.departure_airport_id,
            arrival_airport_id: entity.arrival_airport_id,
            departure_time: entity.departure_time,
            arrival_time: entity.arrival_time,
            price: entity.price,
            currency: entity.currency,
            available_seats: entity.available_seats,
            status: entity.status,
        }
    }
}
