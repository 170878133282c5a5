use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReviewDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub flight_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            flight_id: entity.flight_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}
