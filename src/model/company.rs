use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyDto {
    pub fn from_entity(entity: entity::company::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            registration_number: entity.registration_number,
            email: entity.email,
            phone: entity.phone,
            is_verified: entity.is_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
