use thiserror::Error;

/// Errors surfaced by repositories and the unit of work.
///
/// Lookups never fail with "not found"; they return `None` or an empty `Vec` and the caller
/// decides whether absence is an error.
#[derive(Error, Debug)]
pub enum DataError {
    /// Caller supplied an argument outside its valid range, e.g. page `0`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transaction control was used in a state that does not allow it, e.g. calling
    /// `begin_transaction` while a transaction is already open.
    #[error("Invalid transaction state: {0}")]
    TransactionState(String),

    /// The unit of work has been disposed and can no longer reach storage.
    #[error("Unit of work has been disposed")]
    Disposed,

    /// The operation was aborted by its cancellation signal before completing.
    #[error("Operation was cancelled")]
    Cancelled,

    /// Storage failure (connectivity, constraint violation, ...), passed through unchanged.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
}
