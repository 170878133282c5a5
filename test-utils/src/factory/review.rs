use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, now};

/// Factory for creating test reviews of a flight.
pub struct ReviewFactory {
    user_id: Uuid,
    flight_id: Uuid,
    rating: i32,
    comment: Option<String>,
}

impl ReviewFactory {
    /// Defaults to a 5 star review without a comment.
    pub fn new(user_id: Uuid, flight_id: Uuid) -> Self {
        Self {
            user_id,
            flight_id,
            rating: 5,
            comment: None,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> entity::review::Model {
        let now = now();
        entity::review::Model {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            flight_id: self.flight_id,
            rating: self.rating,
            comment: self.comment,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::review::Model, DbErr> {
        insert_model::<entity::review::Entity>(db, self.build()).await
    }
}
