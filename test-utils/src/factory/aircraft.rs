use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test aircraft owned by a company.
pub struct AircraftFactory {
    company_id: Uuid,
    registration: String,
    seat_capacity: i32,
}

impl AircraftFactory {
    /// Defaults to an 8 seat light jet with registration `"N{id}TS"`.
    pub fn new(company_id: Uuid) -> Self {
        Self {
            company_id,
            registration: format!("N{}TS", next_id()),
            seat_capacity: 8,
        }
    }

    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = registration.into();
        self
    }

    pub fn seat_capacity(mut self, seat_capacity: i32) -> Self {
        self.seat_capacity = seat_capacity;
        self
    }

    pub fn build(self) -> entity::aircraft::Model {
        let now = now();
        entity::aircraft::Model {
            id: Uuid::new_v4(),
            company_id: self.company_id,
            registration: self.registration,
            model_name: "Citation CJ3".to_string(),
            manufacturer: "Cessna".to_string(),
            seat_capacity: self.seat_capacity,
            range_km: Some(3_800),
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
        insert_model::<entity::aircraft::Entity>(db, self.build()).await
    }
}

pub async fn create_aircraft(
    db: &DatabaseConnection,
    company_id: Uuid,
) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(company_id).insert(db).await
}
