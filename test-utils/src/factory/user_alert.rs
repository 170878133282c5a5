use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, now};

/// Factory for creating test empty-leg alerts. Defaults to an active alert with no filters.
pub struct UserAlertFactory {
    user_id: Uuid,
    departure_airport_id: Option<Uuid>,
    arrival_airport_id: Option<Uuid>,
    max_price: Option<i64>,
    is_active: bool,
}

impl UserAlertFactory {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            departure_airport_id: None,
            arrival_airport_id: None,
            max_price: None,
            is_active: true,
        }
    }

    pub fn route(mut self, departure_airport_id: Uuid, arrival_airport_id: Uuid) -> Self {
        self.departure_airport_id = Some(departure_airport_id);
        self.arrival_airport_id = Some(arrival_airport_id);
        self
    }

    pub fn max_price(mut self, max_price: i64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn build(self) -> entity::user_alert::Model {
        let now = now();
        entity::user_alert::Model {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            departure_airport_id: self.departure_airport_id,
            arrival_airport_id: self.arrival_airport_id,
            earliest_departure: None,
            latest_departure: None,
            max_price: self.max_price,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::user_alert::Model, DbErr> {
        insert_model::<entity::user_alert::Entity>(db, self.build()).await
    }
}
