use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AircraftDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub registration: String,
    pub model_name: String,
    pub manufacturer: String,
    pub seat_capacity: i32,
    pub range_km: Option<i32>,
}

impl AircraftDto {
    pub fn from_entity(entity: entity::aircraft::Model) -> Self {
        Self {
            id: entity.id,
            company_id: entity.company_id,
            registration: entity.registration,
            model_name: entity.model_name,
            manufacturer: entity.manufacturer,
            seat_capacity: entity.seat_capacity,
            range_km: entity.range_km,
        }
    }
}
