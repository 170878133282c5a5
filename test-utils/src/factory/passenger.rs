use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test passengers travelling on a booking.
pub struct PassengerFactory {
    booking_id: Uuid,
    first_name: String,
    last_name: String,
}

impl PassengerFactory {
    pub fn new(booking_id: Uuid) -> Self {
        Self {
            booking_id,
            first_name: "Passenger".to_string(),
            last_name: format!("No. {}", next_id()),
        }
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn build(self) -> entity::passenger::Model {
        let now = now();
        entity::passenger::Model {
            id: Uuid::new_v4(),
            booking_id: self.booking_id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: None,
            passport_number: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::passenger::Model, DbErr> {
        insert_model::<entity::passenger::Entity>(db, self.build()).await
    }
}

pub async fn create_passenger(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<entity::passenger::Model, DbErr> {
    PassengerFactory::new(booking_id).insert(db).await
}
