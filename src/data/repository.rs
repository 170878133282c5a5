//! Generic soft-delete aware repository.
//!
//! `Repository<E>` is the data-access gateway for one entity type. Reads always hide
//! soft-deleted rows unless the method name says otherwise; writes are staged in memory and
//! only reach storage when the owning `UnitOfWork` runs `save_changes`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use entity::{AuditedEntity, AuditedModel};
use sea_orm::{
    sea_query::IntoCondition, ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr,
    EntityName, EntityTrait, IntoActiveModel, Iterable, Order, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::{
    data::{
        now,
        session::Session,
        staged::{ChangeSet, StagedChange},
    },
    error::data::DataError,
};

/// Which kind of staged change a flush pass writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlushPhase {
    Insert,
    Update,
    Delete,
}

/// Data-access gateway for a single entity type.
///
/// Obtained from a [`UnitOfWork`](crate::data::unit_of_work::UnitOfWork) accessor; the unit of
/// work owns one instance per entity type for its whole lifetime.
pub struct Repository<E>
where
    E: AuditedEntity,
{
    session: Arc<Session>,
    changes: Mutex<ChangeSet<E::Model>>,
}

impl<E> Repository<E>
where
    E: AuditedEntity,
    E::Model: AuditedModel + IntoActiveModel<E::ActiveModel> + Sync,
{
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            changes: Mutex::new(ChangeSet::new()),
        }
    }

    /// Gets a live entity by id.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Entity exists and is not soft-deleted
    /// - `Ok(None)` - No such entity, or it has been soft-deleted
    /// - `Err(DataError)` - Storage failure or disposed unit of work
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<E::Model>, DataError> {
        let select = Self::live().filter(E::id_column().eq(id));

        Ok(self.session.executor()?.one(select).await?)
    }

    /// Gets an entity by id whether or not it has been soft-deleted.
    pub async fn get_by_id_including_deleted(
        &self,
        id: Uuid,
    ) -> Result<Option<E::Model>, DataError> {
        let select = E::find().filter(E::id_column().eq(id));

        Ok(self.session.executor()?.one(select).await?)
    }

    /// Gets all live entities. Order is unspecified.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DataError> {
        Ok(self.session.executor()?.all(Self::live()).await?)
    }

    /// Gets every entity, soft-deleted ones included.
    pub async fn get_all_including_deleted(&self) -> Result<Vec<E::Model>, DataError> {
        Ok(self.session.executor()?.all(E::find()).await?)
    }

    /// Gets all live entities matching `filter`.
    ///
    /// # Arguments
    /// - `filter` - Any SeaORM condition, e.g. `flight::Column::Currency.eq("EUR")`
    pub async fn find<F>(&self, filter: F) -> Result<Vec<E::Model>, DataError>
    where
        F: IntoCondition,
    {
        let select = Self::live().filter(filter);

        Ok(self.session.executor()?.all(select).await?)
    }

    /// Gets the first live entity matching `filter` in id order.
    pub async fn first_or_default<F>(&self, filter: F) -> Result<Option<E::Model>, DataError>
    where
        F: IntoCondition,
    {
        let select = Self::live()
            .filter(filter)
            .order_by_asc(E::id_column());

        Ok(self.session.executor()?.one(select).await?)
    }

    /// Checks whether any live entity matches `filter`.
    pub async fn any<F>(&self, filter: F) -> Result<bool, DataError>
    where
        F: IntoCondition,
    {
        Ok(self.count_where(filter).await? > 0)
    }

    /// Counts all live entities.
    pub async fn count(&self) -> Result<u64, DataError> {
        Ok(self.session.executor()?.count(Self::live()).await?)
    }

    /// Counts live entities matching `filter`.
    pub async fn count_where<F>(&self, filter: F) -> Result<u64, DataError>
    where
        F: IntoCondition,
    {
        let select = Self::live().filter(filter);

        Ok(self.session.executor()?.count(select).await?)
    }

    /// Gets one page of live entities ordered by id.
    ///
    /// # Arguments
    /// - `page` - 1-indexed page number
    /// - `page_size` - Maximum number of entities per page
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Entities `(page - 1) * page_size` through `page * page_size - 1`
    /// - `Err(DataError::InvalidArgument)` - `page` or `page_size` is zero, or the page starts
    ///   beyond the largest offset storage can address
    pub async fn get_paged(&self, page: u64, page_size: u64) -> Result<Vec<E::Model>, DataError> {
        let page_index = page_index(page, page_size)?;
        let select = Self::live().order_by_asc(E::id_column());

        Ok(self
            .session
            .executor()?
            .page(select, page_size, page_index)
            .await?)
    }

    /// Gets one page of live entities sorted ascending by `order_by`.
    pub async fn get_paged_by(
        &self,
        page: u64,
        page_size: u64,
        order_by: E::Column,
    ) -> Result<Vec<E::Model>, DataError> {
        self.get_paged_ordered(page, page_size, order_by, true)
            .await
    }

    /// Gets one page of live entities sorted by `order_by`.
    ///
    /// Sorting happens before pagination. Rows with equal sort keys are ordered by id so that
    /// consecutive pages never overlap.
    pub async fn get_paged_ordered(
        &self,
        page: u64,
        page_size: u64,
        order_by: E::Column,
        ascending: bool,
    ) -> Result<Vec<E::Model>, DataError> {
        let page_index = page_index(page, page_size)?;
        let order = if ascending { Order::Asc } else { Order::Desc };
        let select = Self::live()
            .order_by(order_by, order)
            .order_by_asc(E::id_column());

        Ok(self
            .session
            .executor()?
            .page(select, page_size, page_index)
            .await?)
    }

    /// Stages an entity for insertion.
    ///
    /// Assigns a fresh id when the model carries the nil UUID, stamps `created_at` and
    /// `updated_at`, and clears any soft-delete state. Nothing is written until
    /// `save_changes`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stamped model as it will be inserted
    /// - `Err(DataError::Disposed)` - Unit of work has been disposed
    pub fn add(&self, mut model: E::Model) -> Result<E::Model, DataError> {
        self.session.ensure_open()?;

        if model.id().is_nil() {
            model.set_id(Uuid::new_v4());
        }
        model.stamp_created(now());

        self.changes().insert(model.clone());

        Ok(model)
    }

    /// Stages several entities for insertion. See [`Repository::add`].
    pub fn add_range<I>(&self, models: I) -> Result<Vec<E::Model>, DataError>
    where
        I: IntoIterator<Item = E::Model>,
    {
        models.into_iter().map(|model| self.add(model)).collect()
    }

    /// Stages an entity for update, refreshing `updated_at` immediately.
    ///
    /// `created_at`, `is_deleted` and `deleted_at` are owned by the repository: the flush
    /// leaves the stored values in place, and a change already staged for the same row keeps
    /// its own. Use `soft_delete` and `restore` to change the soft-delete state.
    pub fn update(&self, mut model: E::Model) -> Result<E::Model, DataError> {
        self.session.ensure_open()?;

        let mut changes = self.changes();
        if let Some(pending) = changes.pending_model(model.id()) {
            model.copy_lifecycle(pending);
        }
        model.touch(now());
        changes.update(model.clone());

        Ok(model)
    }

    /// Stages several entities for update. See [`Repository::update`].
    pub fn update_range<I>(&self, models: I) -> Result<Vec<E::Model>, DataError>
    where
        I: IntoIterator<Item = E::Model>,
    {
        models.into_iter().map(|model| self.update(model)).collect()
    }

    /// Stages a hard delete: the row is physically removed on `save_changes`.
    pub fn remove(&self, model: &E::Model) -> Result<(), DataError> {
        self.session.ensure_open()?;

        self.changes().delete(model.id());

        Ok(())
    }

    /// Stages hard deletes for several entities. See [`Repository::remove`].
    pub fn remove_range(&self, models: &[E::Model]) -> Result<(), DataError> {
        self.session.ensure_open()?;

        let mut changes = self.changes();
        for model in models {
            changes.delete(model.id());
        }

        Ok(())
    }

    /// Soft-deletes the live entity with the given id.
    ///
    /// Loads the entity through the soft-delete filter, flags it deleted with `deleted_at` set
    /// to now and stages the update. Missing or already-deleted entities are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - Soft delete staged
    /// - `Ok(false)` - No live entity with that id, or a soft delete is already pending
    /// - `Err(DataError)` - Storage failure or disposed unit of work
    pub async fn soft_delete(&self, id: Uuid) -> Result<bool, DataError> {
        let Some(model) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        self.stage_soft_delete(model)
    }

    /// Stages a soft delete for an already loaded model.
    ///
    /// A pending update for the same row is kept and flagged deleted rather than overwritten.
    pub fn stage_soft_delete(&self, model: E::Model) -> Result<bool, DataError> {
        self.session.ensure_open()?;

        let id = model.id();
        let mut changes = self.changes();
        if changes.is_pending_delete(id) {
            return Ok(false);
        }

        let mut model = changes.pending_model(id).cloned().unwrap_or(model);
        if model.is_deleted() {
            return Ok(false);
        }

        model.mark_deleted(now());
        changes.update_lifecycle(model);

        tracing::debug!(table = E::default().table_name(), %id, "staged soft delete");

        Ok(true)
    }

    /// Reverses a soft delete.
    ///
    /// # Returns
    /// - `Ok(true)` - Restore staged
    /// - `Ok(false)` - No such entity, or it is not soft-deleted
    pub async fn restore(&self, id: Uuid) -> Result<bool, DataError> {
        let Some(stored) = self.get_by_id_including_deleted(id).await? else {
            return Ok(false);
        };

        let mut changes = self.changes();
        let mut model = changes.pending_model(id).cloned().unwrap_or(stored);
        if !model.is_deleted() || changes.is_pending_delete(id) {
            return Ok(false);
        }

        model.clear_deleted(now());
        changes.update_lifecycle(model);

        Ok(true)
    }

    /// Number of staged changes waiting for `save_changes`.
    pub fn pending_changes(&self) -> usize {
        self.changes().len()
    }

    /// Drops every staged change without touching storage.
    pub fn discard_changes(&self) {
        self.changes().clear();
    }

    /// Writes the staged changes of one phase into `transaction`.
    ///
    /// Staged changes are left in place; the unit of work clears them once the whole flush
    /// has committed.
    pub(crate) async fn flush(
        &self,
        transaction: &DatabaseTransaction,
        phase: FlushPhase,
    ) -> Result<u64, DbErr> {
        let changes = self.changes().snapshot();

        let mut affected = 0;
        for change in changes {
            match (phase, change) {
                (FlushPhase::Insert, StagedChange::Insert(model)) => {
                    affected += E::insert(Self::active_model(model, &[]))
                        .exec_without_returning(transaction)
                        .await?;
                }
                (FlushPhase::Update, StagedChange::Update(model)) => {
                    let skip = [
                        E::created_at_column(),
                        E::is_deleted_column(),
                        E::deleted_at_column(),
                    ];
                    affected += Self::update_row(transaction, model, &skip).await?;
                }
                (FlushPhase::Update, StagedChange::Lifecycle(model)) => {
                    affected +=
                        Self::update_row(transaction, model, &[E::created_at_column()]).await?;
                }
                (FlushPhase::Delete, StagedChange::Delete(id)) => {
                    affected += E::delete_many()
                        .filter(E::id_column().eq(id))
                        .exec(transaction)
                        .await?
                        .rows_affected;
                }
                _ => {}
            }
        }

        Ok(affected)
    }

    fn live() -> Select<E> {
        E::find().filter(E::is_deleted_column().eq(false))
    }

    async fn update_row(
        transaction: &DatabaseTransaction,
        model: E::Model,
        skip: &[E::Column],
    ) -> Result<u64, DbErr> {
        let id = model.id();

        Ok(E::update_many()
            .set(Self::active_model(model, skip))
            .filter(E::id_column().eq(id))
            .exec(transaction)
            .await?
            .rows_affected)
    }

    /// Converts a model into an active model with every column except `skip` marked as set.
    fn active_model(model: E::Model, skip: &[E::Column]) -> E::ActiveModel {
        let mut active = model.into_active_model();
        for column in E::Column::iter() {
            active.reset(column);
        }
        for column in skip {
            active.not_set(*column);
        }
        active
    }

    fn changes(&self) -> MutexGuard<'_, ChangeSet<E::Model>> {
        self.changes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Largest row offset or page size storage accepts; both are bound as signed 64-bit integers.
const MAX_ROWS: u64 = i64::MAX as u64;

/// Validates 1-indexed paging arguments and returns the zero-indexed page.
fn page_index(page: u64, page_size: u64) -> Result<u64, DataError> {
    if page == 0 {
        return Err(DataError::InvalidArgument(
            "page must be 1 or greater".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(DataError::InvalidArgument(
            "page size must be 1 or greater".to_string(),
        ));
    }
    if page_size > MAX_ROWS {
        return Err(DataError::InvalidArgument(format!(
            "page size must not exceed {MAX_ROWS}"
        )));
    }

    let index = page - 1;
    match index.checked_mul(page_size) {
        Some(offset) if offset <= MAX_ROWS => Ok(index),
        _ => Err(DataError::InvalidArgument(format!(
            "page {page} of size {page_size} starts past row {MAX_ROWS}"
        ))),
    }
}
