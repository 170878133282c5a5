use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub company_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone: entity.phone,
            role: entity.role,
            company_id: entity.company_id,
            created_at: entity.created_at,
        }
    }
}

/// Refresh token metadata. The token value itself is never mapped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RefreshTokenDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenDto {
    pub fn from_entity(entity: entity::refresh_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            expires_at: entity.expires_at,
            revoked_at: entity.revoked_at,
            created_at: entity.created_at,
        }
    }
}
