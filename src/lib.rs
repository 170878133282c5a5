//! Data-access core for an empty-leg private jet marketplace.
//!
//! Exposes a generic soft-delete aware [`data::Repository`] per entity, coordinated by a
//! [`data::UnitOfWork`] that batches staged changes into one transaction. Entity definitions
//! live in the `entity` crate and the schema in the `migration` crate.

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod startup;
