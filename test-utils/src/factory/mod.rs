//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `Factory` struct for customization and, for
//! entities without required parents or with simple ones, a `create_*` convenience function
//! that inserts a default row.
//!
//! Factories produce complete models with a fresh id and audit timestamps. Use `build()` to
//! get an unsaved model for staging through a repository's `add`, or `insert(db)` to write the
//! row directly as a fixture.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Insert fixture rows directly
//! let company = factory::create_company(&db).await?;
//! let (user, flight, booking) = factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//! // Build an unsaved model to stage through a unit of work
//! let airport = factory::airport::AirportFactory::new().iata_code("LHR").build();
//! uow.airports().add(airport)?;
//! ```
//!
//! # Available Factories
//!
//! - `company`, `user`, `airport`, `aircraft`, `flight`
//! - `booking`, `passenger`, `payment`, `booking_service`
//! - `document`, `review`, `user_alert`, `refresh_token`
//! - `helpers` - Unique values, direct inserts and entity chains with dependencies

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod booking_service;
pub mod company;
pub mod document;
pub mod flight;
pub mod helpers;
pub mod passenger;
pub mod payment;
pub mod refresh_token;
pub mod review;
pub mod user;
pub mod user_alert;

pub use aircraft::create_aircraft;
pub use airport::create_airport;
pub use booking::create_booking;
pub use booking_service::create_booking_service;
pub use company::create_company;
pub use flight::create_flight;
pub use passenger::create_passenger;
pub use payment::create_payment;
pub use user::create_user;
