use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test documents uploaded by a user.
pub struct DocumentFactory {
    user_id: Uuid,
    booking_id: Option<Uuid>,
    kind: String,
    file_name: String,
}

impl DocumentFactory {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            booking_id: None,
            kind: "passport".to_string(),
            file_name: format!("document-{}.pdf", next_id()),
        }
    }

    pub fn booking(mut self, booking_id: Uuid) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn build(self) -> entity::document::Model {
        let now = now();
        entity::document::Model {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            booking_id: self.booking_id,
            kind: self.kind,
            storage_path: format!("documents/{}/{}", self.user_id, self.file_name),
            file_name: self.file_name,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
        insert_model::<entity::document::Entity>(db, self.build()).await
    }
}
