//! User factory for creating test user entities.

use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::{insert_model, next_id, now};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new()
///     .email("pilot@example.test")
///     .role("operator")
///     .company(company.id)
///     .insert(&db)
///     .await?;
/// ```
pub struct UserFactory {
    email: String,
    first_name: String,
    last_name: String,
    role: String,
    company_id: Option<Uuid>,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFactory {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.test"` where id is auto-incremented
    /// - first_name / last_name: `"Test"` / `"User {id}"`
    /// - role: `"customer"`
    /// - company_id: `None`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            email: format!("user{}@example.test", id),
            first_name: "Test".to_string(),
            last_name: format!("User {}", id),
            role: "customer".to_string(),
            company_id: None,
        }
    }

    /// Sets the email, which must be unique across users.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Links the user to an operator company.
    pub fn company(mut self, company_id: Uuid) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Builds the user model without saving it.
    pub fn build(self) -> entity::user::Model {
        let now = now();
        entity::user::Model {
            id: Uuid::new_v4(),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: None,
            role: self.role,
            company_id: self.company_id,
            created_at: now,
            updated_at: now,
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// Builds and inserts the user into the database.
    pub async fn insert(self, db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
        insert_model::<entity::user::Entity>(db, self.build()).await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new().insert(db).await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new().insert(db).await
}
