use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test airports.
///
/// The default IATA code is derived from the shared counter so that airports created in the
/// same test never collide on the unique `iata_code` column.
pub struct AirportFactory {
    iata_code: String,
    name: String,
    city: String,
    country: String,
}

impl Default for AirportFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AirportFactory {
    pub fn new() -> Self {
        let id = next_id();
        Self {
            iata_code: format!("T{:05}", id),
            name: format!("Airport {}", id),
            city: format!("City {}", id),
            country: "Testland".to_string(),
        }
    }

    pub fn iata_code(mut self, iata_code: impl Into<String>) -> Self {
        self.iata_code = iata_code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn build(self) -> entity::airport::Model {
        let now = now();
        entity::airport::Model {
            id: Uuid::new_v4(),
            iata_code: self.iata_code,
            icao_code: None,
            name: self.name,
            city: self.city,
            country: self.country,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
        insert_model::<entity::airport::Entity>(db, self.build()).await
    }
}

pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new().insert(db).await
}
