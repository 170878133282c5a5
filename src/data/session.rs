//! Storage session shared by a unit of work and its repositories.
//!
//! A session owns the connection pool handle and, while an explicit transaction is open, the
//! transaction itself. Reads go through whichever executor is current so that a unit of work
//! always sees its own flushed-but-uncommitted changes.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    Select, TransactionTrait,
};

use crate::error::data::DataError;

pub(crate) struct Session {
    db: DatabaseConnection,
    transaction: Mutex<Option<Arc<DatabaseTransaction>>>,
    disposed: AtomicBool,
}

/// Borrowed handle to the executor the next storage call should use.
pub(crate) enum Executor<'a> {
    Connection(&'a DatabaseConnection),
    Transaction(Arc<DatabaseTransaction>),
}

impl Session {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            transaction: Mutex::new(None),
            disposed: AtomicBool::new(false),
        }
    }

    /// Returns the executor for the current state, failing once the session is disposed.
    pub fn executor(&self) -> Result<Executor<'_>, DataError> {
        self.ensure_open()?;

        Ok(match self.slot().as_ref() {
            Some(transaction) => Executor::Transaction(Arc::clone(transaction)),
            None => Executor::Connection(&self.db),
        })
    }

    pub fn ensure_open(&self) -> Result<(), DataError> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(DataError::Disposed);
        }
        Ok(())
    }

    pub fn in_transaction(&self) -> bool {
        self.slot().is_some()
    }

    /// Opens an explicit transaction on the pool.
    ///
    /// The slot is checked again once the transaction exists, so of two overlapping calls
    /// only the first to finish keeps its transaction; the other rolls back and fails.
    pub async fn begin(&self) -> Result<(), DataError> {
        self.ensure_open()?;
        if self.in_transaction() {
            return Err(already_active());
        }

        let transaction = self.db.begin().await?;

        let Some(transaction) = self.store_transaction(transaction) else {
            return Ok(());
        };
        transaction.rollback().await?;

        Err(already_active())
    }

    /// Detaches the open transaction, if any, so it can be committed or rolled back.
    pub fn take_transaction(&self) -> Result<Option<DatabaseTransaction>, DataError> {
        let Some(shared) = self.slot().take() else {
            return Ok(None);
        };

        match Arc::try_unwrap(shared) {
            Ok(transaction) => Ok(Some(transaction)),
            Err(shared) => {
                // Someone still holds an executor; put it back untouched.
                *self.slot() = Some(shared);
                Err(DataError::TransactionState(
                    "the active transaction is still in use by a pending operation".to_string(),
                ))
            }
        }
    }

    /// Stores `transaction` in an empty slot, handing it back if the slot is taken.
    fn store_transaction(&self, transaction: DatabaseTransaction) -> Option<DatabaseTransaction> {
        let mut slot = self.slot();
        if slot.is_some() {
            return Some(transaction);
        }
        *slot = Some(Arc::new(transaction));
        None
    }

    /// Marks the session disposed. Returns `false` if it already was.
    pub fn mark_disposed(&self) -> bool {
        !self.disposed.swap(true, Ordering::AcqRel)
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<DatabaseTransaction>>> {
        self.transaction
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Executor<'_> {
    pub async fn all<E>(&self, select: Select<E>) -> Result<Vec<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Sync,
    {
        match self {
            Self::Connection(db) => select.all(*db).await,
            Self::Transaction(transaction) => select.all(transaction.as_ref()).await,
        }
    }

    pub async fn one<E>(&self, select: Select<E>) -> Result<Option<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Sync,
    {
        match self {
            Self::Connection(db) => select.one(*db).await,
            Self::Transaction(transaction) => select.one(transaction.as_ref()).await,
        }
    }

    pub async fn count<E>(&self, select: Select<E>) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Sync,
    {
        match self {
            Self::Connection(db) => select.count(*db).await,
            Self::Transaction(transaction) => select.count(transaction.as_ref()).await,
        }
    }

    /// Fetches one zero-indexed page of `page_size` rows.
    pub async fn page<E>(
        &self,
        select: Select<E>,
        page_size: u64,
        page_index: u64,
    ) -> Result<Vec<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Sync,
    {
        match self {
            Self::Connection(db) => select.paginate(*db, page_size).fetch_page(page_index).await,
            Self::Transaction(transaction) => {
                select
                    .paginate(transaction.as_ref(), page_size)
                    .fetch_page(page_index)
                    .await
            }
        }
    }

    /// Starts a transaction on the pool, or a savepoint when a transaction is already open.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        match self {
            Self::Connection(db) => db.begin().await,
            Self::Transaction(transaction) => transaction.begin().await,
        }
    }
}

fn already_active() -> DataError {
    DataError::TransactionState("a transaction is already active on this unit of work".to_string())
}
