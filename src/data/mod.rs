//! Data-access layer: generic repositories coordinated by a unit of work.
//!
//! Callers create a [`UnitOfWork`] per logical operation, read and stage changes through its
//! per-entity [`Repository`] accessors, then call `save_changes` to write everything in one
//! transaction. Entities are SeaORM models from the `entity` crate; soft-deleted rows are hidden
//! from every read unless a method explicitly says it includes them.

pub mod repository;
pub mod unit_of_work;

mod session;
mod staged;

#[cfg(test)]
mod test;

use std::future::Future;

use chrono::{DateTime, SubsecRound, Utc};

pub use repository::Repository;
pub use unit_of_work::UnitOfWork;

use crate::error::data::DataError;

/// Current time truncated to microseconds, the finest precision every supported backend keeps.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Runs a data operation until it completes or `signal` resolves, whichever happens first.
///
/// Dropping the operation future aborts its pending storage call. A flush interrupted this
/// way never commits, its transaction is rolled back when dropped.
///
/// # Arguments
/// - `signal` - Future that resolves when cancellation is requested, e.g. a
///   `tokio::sync::oneshot::Receiver` or `tokio::time::sleep`
/// - `operation` - The repository or unit-of-work call to run
///
/// # Returns
/// - `Ok(T)` - Operation completed first
/// - `Err(DataError::Cancelled)` - Signal resolved first
/// - `Err(DataError)` - Operation failed
pub async fn cancellable<S, F, T>(signal: S, operation: F) -> Result<T, DataError>
where
    S: Future,
    F: Future<Output = Result<T, DataError>>,
{
    tokio::select! {
        biased;
        _ = signal => Err(DataError::Cancelled),
        result = operation => result,
    }
}
