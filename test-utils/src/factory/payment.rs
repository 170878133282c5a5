use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, now};

/// Factory for creating test payments recorded against a booking.
pub struct PaymentFactory {
    booking_id: Uuid,
    amount: i64,
    status: String,
}

impl PaymentFactory {
    pub fn new(booking_id: Uuid) -> Self {
        Self {
            booking_id,
            amount: 250_000,
            status: "pending".to_string(),
        }
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn build(self) -> entity::payment::Model {
        let now = now();
        entity::payment::Model {
            id: Uuid::new_v4(),
            booking_id: self.booking_id,
            amount: self.amount,
            currency: "EUR".to_string(),
            provider: "test".to_string(),
            provider_reference: None,
            status: self.status,
            paid_at: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::payment::Model, DbErr> {
        insert_model::<entity::payment::Entity>(db, self.build()).await
    }
}

pub async fn create_payment(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(booking_id).insert(db).await
}
