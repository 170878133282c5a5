use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserAlertDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub departure_airport_id: Option<Uuid>,
    pub arrival_airport_id: Option<Uuid>,
    pub earliest_departure: Option<DateTime<Utc>>,
    pub latest_departure: Option<DateTime<Utc>>,
    pub max_price: Option<i64>,
    pub is_active: bool,
}

impl UserAlertDto {
    pub fn from_entity(entity: entity::user_alert::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            departure_airport_id: entity.departure_airport_id,
            arrival_airport_id: entity.arrival_airport_id,
            earliest_departure: entity.earliest_departure,
            latest_departure: entity.latest_departure,
            max_price: entity.max_price,
            is_active: entity.is_active,
        }
    }
}
