use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub kind: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentDto {
    /// Storage paths are internal and are not mapped.
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            booking_id: entity.booking_id,
            kind: entity.kind,
            file_name: entity.file_name,
            created_at: entity.created_at,
        }
    }
}
