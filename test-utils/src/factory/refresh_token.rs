use chrono::Duration;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, now};

/// Factory for creating test refresh tokens. The token value is an opaque random string.
pub struct RefreshTokenFactory {
    user_id: Uuid,
    token: String,
    lifetime: Duration,
}

impl RefreshTokenFactory {
    /// Defaults to a token valid for 7 days.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            token: Uuid::new_v4().simple().to_string(),
            lifetime: Duration::days(7),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn build(self) -> entity::refresh_token::Model {
        let now = now();
        entity::refresh_token::Model {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            token: self.token,
            expires_at: now + self.lifetime,
            revoked_at: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(
        self,
        db: &DatabaseConnection,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        insert_model::<entity::refresh_token::Entity>(db, self.build()).await
    }
}
