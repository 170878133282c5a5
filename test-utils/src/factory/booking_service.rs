use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, now};

/// Factory for creating test extras (catering, ground transport, ...) on a booking.
pub struct BookingServiceFactory {
    booking_id: Uuid,
    name: String,
    price: i64,
    quantity: i32,
}

impl BookingServiceFactory {
    pub fn new(booking_id: Uuid) -> Self {
        Self {
            booking_id,
            name: "Catering".to_string(),
            price: 12_000,
            quantity: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn build(self) -> entity::booking_service::Model {
        let now = now();
        entity::booking_service::Model {
            id: Uuid::new_v4(),
            booking_id: self.booking_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(
        self,
        db: &DatabaseConnection,
    ) -> Result<entity::booking_service::Model, DbErr> {
        insert_model::<entity::booking_service::Entity>(db, self.build()).await
    }
}

pub async fn create_booking_service(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<entity::booking_service::Model, DbErr> {
    BookingServiceFactory::new(booking_id).insert(db).await
}
