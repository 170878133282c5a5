use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Airport, Company};
///
/// let test = TestBuilder::new()
///     .with_table(Company)
///     .with_table(Airport)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement, including foreign keys and unique constraints, from
    /// the provided SeaORM entity. Tables with foreign keys must be added after the tables
    /// they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to hold a flight: company, aircraft, airport and flight.
    pub fn with_flight_tables(self) -> Self {
        self.with_table(Company)
            .with_table(Aircraft)
            .with_table(Airport)
            .with_table(Flight)
    }

    /// Adds the tables needed to hold a booking and everything it owns.
    ///
    /// Equivalent to `with_flight_tables()` followed by user, booking, passenger, payment and
    /// booking service.
    pub fn with_booking_tables(self) -> Self {
        self.with_flight_tables()
            .with_table(User)
            .with_table(Booking)
            .with_table(Passenger)
            .with_table(Payment)
            .with_table(BookingService)
    }

    /// Adds every entity table in foreign-key dependency order.
    ///
    /// Needed whenever a unit of work flushes, since the flush may touch any repository.
    pub fn with_all_tables(self) -> Self {
        self.with_booking_tables()
            .with_table(Document)
            .with_table(Review)
            .with_table(UserAlert)
            .with_table(RefreshToken)
    }

    /// Builds the test context, creating an in-memory SQLite database with the configured
    /// tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
