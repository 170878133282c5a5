use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AirportDto {
    pub id: Uuid,
    pub iata_code: String,
    pub icao_code: Option<String>,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl AirportDto {
    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            iata_code: entity.iata_code,
            icao_code: entity.icao_code,
            name: entity.name,
            city: entity.city,
            country: entity.country,
        }
    }
}
