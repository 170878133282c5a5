//! Empty-leg Test Utils
//!
//! Shared testing utilities for the data-access core. This crate offers a builder for test
//! contexts backed by in-memory SQLite databases, plus factories producing entity models with
//! unique defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder choosing which entity tables to create
//! - **TestContext**: Test environment owning the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Unsaved models for staging through a repository, or rows inserted directly
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_flight_operations() -> Result<(), DataError> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (company, aircraft, departure, arrival, flight) =
//!         factory::helpers::create_flight_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
