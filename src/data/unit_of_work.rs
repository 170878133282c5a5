//! Unit of work coordinating repositories and transactions.
//!
//! A `UnitOfWork` is created per logical operation (typically one request). It owns one
//! [`Repository`] per entity type and a single storage session. Staged changes from every
//! repository are written together by [`UnitOfWork::save_changes`] inside one transaction.
//!
//! # Transaction states
//!
//! The unit is either in `NoTransaction` or `InTransaction`:
//!
//! - `begin_transaction` moves NoTransaction -> InTransaction and fails with
//!   `DataError::TransactionState` when a transaction is already open
//! - `commit_transaction` / `rollback_transaction` move back to NoTransaction and are no-ops
//!   when no transaction is open; commit saves anything still staged before committing
//! - `save_changes` works in both states; inside a transaction its effects only become durable
//!   once `commit_transaction` succeeds

use std::sync::Arc;

use entity::{
    aircraft, airport, booking, booking_service, company, document, flight, passenger, payment,
    refresh_token, review, user, user_alert,
};
use sea_orm::{ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr};
use uuid::Uuid;

use crate::{
    data::{
        repository::{FlushPhase, Repository},
        session::Session,
    },
    error::data::DataError,
};

/// Runs `$body` once per repository with `$repo` bound to it, parents before children.
macro_rules! in_dependency_order {
    ($uow:expr, $repo:ident => $body:expr) => {{
        { let $repo = &$uow.companies; $body; }
        { let $repo = &$uow.users; $body; }
        { let $repo = &$uow.airports; $body; }
        { let $repo = &$uow.aircraft; $body; }
        { let $repo = &$uow.flights; $body; }
        { let $repo = &$uow.bookings; $body; }
        { let $repo = &$uow.passengers; $body; }
        { let $repo = &$uow.payments; $body; }
        { let $repo = &$uow.booking_services; $body; }
        { let $repo = &$uow.documents; $body; }
        { let $repo = &$uow.reviews; $body; }
        { let $repo = &$uow.user_alerts; $body; }
        { let $repo = &$uow.refresh_tokens; $body; }
    }};
}

/// Runs `$body` once per repository with `$repo` bound to it, children before parents.
macro_rules! in_reverse_dependency_order {
    ($uow:expr, $repo:ident => $body:expr) => {{
        { let $repo = &$uow.refresh_tokens; $body; }
        { let $repo = &$uow.user_alerts; $body; }
        { let $repo = &$uow.reviews; $body; }
        { let $repo = &$uow.documents; $body; }
        { let $repo = &$uow.booking_services; $body; }
        { let $repo = &$uow.payments; $body; }
        { let $repo = &$uow.passengers; $body; }
        { let $repo = &$uow.bookings; $body; }
        { let $repo = &$uow.flights; $body; }
        { let $repo = &$uow.aircraft; $body; }
        { let $repo = &$uow.airports; $body; }
        { let $repo = &$uow.users; $body; }
        { let $repo = &$uow.companies; $body; }
    }};
}

pub struct UnitOfWork {
    session: Arc<Session>,
    companies: Repository<company::Entity>,
    users: Repository<user::Entity>,
    airports: Repository<airport::Entity>,
    aircraft: Repository<aircraft::Entity>,
    flights: Repository<flight::Entity>,
    bookings: Repository<booking::Entity>,
    passengers: Repository<passenger::Entity>,
    payments: Repository<payment::Entity>,
    booking_services: Repository<booking_service::Entity>,
    documents: Repository<document::Entity>,
    reviews: Repository<review::Entity>,
    user_alerts: Repository<user_alert::Entity>,
    refresh_tokens: Repository<refresh_token::Entity>,
}

impl UnitOfWork {
    /// Creates a unit of work over a connection pool handle.
    ///
    /// All repositories are created up front and live as long as the unit of work.
    pub fn new(db: DatabaseConnection) -> Self {
        let session = Arc::new(Session::new(db));

        Self {
            companies: Repository::new(Arc::clone(&session)),
            users: Repository::new(Arc::clone(&session)),
            airports: Repository::new(Arc::clone(&session)),
            aircraft: Repository::new(Arc::clone(&session)),
            flights: Repository::new(Arc::clone(&session)),
            bookings: Repository::new(Arc::clone(&session)),
            passengers: Repository::new(Arc::clone(&session)),
            payments: Repository::new(Arc::clone(&session)),
            booking_services: Repository::new(Arc::clone(&session)),
            documents: Repository::new(Arc::clone(&session)),
            reviews: Repository::new(Arc::clone(&session)),
            user_alerts: Repository::new(Arc::clone(&session)),
            refresh_tokens: Repository::new(Arc::clone(&session)),
            session,
        }
    }

    pub fn companies(&self) -> &Repository<company::Entity> {
        &self.companies
    }

    pub fn users(&self) -> &Repository<user::Entity> {
        &self.users
    }

    pub fn airports(&self) -> &Repository<airport::Entity> {
        &self.airports
    }

    pub fn aircraft(&self) -> &Repository<aircraft::Entity> {
        &self.aircraft
    }

    pub fn flights(&self) -> &Repository<flight::Entity> {
        &self.flights
    }

    pub fn bookings(&self) -> &Repository<booking::Entity> {
        &self.bookings
    }

    pub fn passengers(&self) -> &Repository<passenger::Entity> {
        &self.passengers
    }

    pub fn payments(&self) -> &Repository<payment::Entity> {
        &self.payments
    }

    pub fn booking_services(&self) -> &Repository<booking_service::Entity> {
        &self.booking_services
    }

    pub fn documents(&self) -> &Repository<document::Entity> {
        &self.documents
    }

    pub fn reviews(&self) -> &Repository<review::Entity> {
        &self.reviews
    }

    pub fn user_alerts(&self) -> &Repository<user_alert::Entity> {
        &self.user_alerts
    }

    pub fn refresh_tokens(&self) -> &Repository<refresh_token::Entity> {
        &self.refresh_tokens
    }

    /// Writes every staged change from every repository atomically.
    ///
    /// Inserts run parents first, then updates, then deletes children first, so foreign keys
    /// hold at every step. Outside an explicit transaction the flush gets its own transaction;
    /// inside one it runs in a savepoint. Either way a failure rolls the whole flush back and
    /// the staged changes are kept so the caller can fix and retry, or discard them.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted, updated or deleted
    /// - `Err(DataError::Storage)` - Flush failed; nothing from it is visible
    /// - `Err(DataError::Disposed)` - Unit of work has been disposed
    pub async fn save_changes(&mut self) -> Result<u64, DataError> {
        let executor = self.session.executor()?;
        let transaction = executor.begin().await?;

        match self.flush(&transaction).await {
            Ok(affected) => {
                transaction.commit().await?;
                self.discard_changes();

                tracing::debug!(
                    affected,
                    in_transaction = self.session.in_transaction(),
                    "saved changes"
                );

                Ok(affected)
            }
            Err(err) => {
                tracing::warn!("Failed to save changes, rolling back: {}", err);
                if let Err(rollback_err) = transaction.rollback().await {
                    tracing::warn!("Rollback after failed save also failed: {}", rollback_err);
                }

                Err(err.into())
            }
        }
    }

    /// Opens an explicit transaction spanning subsequent `save_changes` calls.
    ///
    /// # Returns
    /// - `Ok(())` - Transaction opened
    /// - `Err(DataError::TransactionState)` - A transaction is already active
    /// - `Err(DataError::Storage)` - Failed to start the transaction
    pub async fn begin_transaction(&mut self) -> Result<(), DataError> {
        self.session.begin().await?;

        tracing::debug!("began transaction");

        Ok(())
    }

    /// Commits the explicit transaction. No-op when none is active.
    ///
    /// Changes still staged are saved into the transaction first, so `begin`, stage, `commit`
    /// persists them without a separate `save_changes`. If that save fails the transaction
    /// stays open and the error is returned.
    pub async fn commit_transaction(&mut self) -> Result<(), DataError> {
        self.session.ensure_open()?;
        if !self.session.in_transaction() {
            return Ok(());
        }

        if self.pending_changes() > 0 {
            self.save_changes().await?;
        }

        let Some(transaction) = self.session.take_transaction()? else {
            return Ok(());
        };
        transaction.commit().await?;

        tracing::debug!("committed transaction");

        Ok(())
    }

    /// Rolls back the explicit transaction and discards staged changes. No-op when none is
    /// active.
    pub async fn rollback_transaction(&mut self) -> Result<(), DataError> {
        self.session.ensure_open()?;

        let Some(transaction) = self.session.take_transaction()? else {
            return Ok(());
        };
        self.discard_changes();
        transaction.rollback().await?;

        tracing::debug!("rolled back transaction");

        Ok(())
    }

    pub fn in_transaction(&self) -> bool {
        self.session.in_transaction()
    }

    /// Releases the unit of work.
    ///
    /// Rolls back an open transaction and drops staged changes. Safe to call more than once;
    /// every other operation fails with `DataError::Disposed` afterwards.
    pub async fn dispose(&mut self) -> Result<(), DataError> {
        if !self.session.mark_disposed() {
            return Ok(());
        }

        self.discard_changes();
        if let Some(transaction) = self.session.take_transaction()? {
            transaction.rollback().await?;
            tracing::debug!("rolled back transaction on dispose");
        }

        Ok(())
    }

    /// Total number of staged changes across all repositories.
    pub fn pending_changes(&self) -> usize {
        let mut pending = 0;
        in_dependency_order!(self, repository => pending += repository.pending_changes());
        pending
    }

    /// Drops staged changes in every repository.
    pub fn discard_changes(&self) {
        in_dependency_order!(self, repository => repository.discard_changes());
    }

    /// Soft-deletes a booking together with its passengers and booking services.
    ///
    /// Plain `soft_delete` on a booking leaves its children visible; this is the explicit
    /// cascade. Changes are staged and written by the next `save_changes`.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking and its live children staged for soft delete
    /// - `Ok(false)` - No live booking with that id; nothing staged
    pub async fn soft_delete_booking_cascade(&self, booking_id: Uuid) -> Result<bool, DataError> {
        if !self.bookings.soft_delete(booking_id).await? {
            return Ok(false);
        }

        let passengers = self
            .passengers
            .find(passenger::Column::BookingId.eq(booking_id))
            .await?;
        for passenger in passengers {
            self.passengers.stage_soft_delete(passenger)?;
        }

        let services = self
            .booking_services
            .find(booking_service::Column::BookingId.eq(booking_id))
            .await?;
        for service in services {
            self.booking_services.stage_soft_delete(service)?;
        }

        Ok(true)
    }

    async fn flush(&self, transaction: &DatabaseTransaction) -> Result<u64, DbErr> {
        let mut affected = 0;

        for phase in [FlushPhase::Insert, FlushPhase::Update] {
            in_dependency_order!(self, repository => affected += repository.flush(transaction, phase).await?);
        }
        in_reverse_dependency_order!(self, repository => affected += repository.flush(transaction, FlushPhase::Delete).await?);

        Ok(affected)
    }
}
