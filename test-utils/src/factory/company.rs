//! Company factory for creating test operator entities.

use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test companies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let company = CompanyFactory::new().name("Skyline Jets").verified(true).insert(&db).await?;
/// ```
pub struct CompanyFactory {
    name: String,
    email: Option<String>,
    is_verified: bool,
}

impl Default for CompanyFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyFactory {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Company {id}"` where id is auto-incremented
    /// - email: `Some("ops{id}@company.test")`
    /// - is_verified: `false`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            name: format!("Company {}", id),
            email: Some(format!("ops{}@company.test", id)),
            is_verified: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    /// Builds the company model without saving it.
    pub fn build(self) -> entity::company::Model {
        let now = now();
        entity::company::Model {
            id: Uuid::new_v4(),
            name: self.name,
            registration_number: None,
            email: self.email,
            phone: None,
            is_verified: self.is_verified,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// Builds and inserts the company into the database.
    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
        insert_model::<entity::company::Entity>(db, self.build()).await
    }
}

/// Creates a company with default values.
///
/// Shorthand for `CompanyFactory::new().insert(db).await`.
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new().insert(db).await
}
