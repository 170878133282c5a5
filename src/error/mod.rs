//! Error types for the data-access core.
//!
//! `DataError` is what repository and unit-of-work operations return. `AppError` is the
//! top-level error used by startup code and the binary; it wraps the configuration and data
//! errors so `?` works across layers.

pub mod config;
pub mod data;

use thiserror::Error;

use crate::error::{config::ConfigError, data::DataError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Error raised by a repository or unit of work.
    #[error(transparent)]
    DataErr(#[from] DataError),

    /// Database error raised outside the data layer, e.g. while connecting or migrating.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
