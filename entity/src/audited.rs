//! Audit and soft-delete contract shared by every entity.
//!
//! Each table carries the same five bookkeeping columns: `id`, `created_at`, `updated_at`,
//! `is_deleted` and `deleted_at`. `AuditedEntity` exposes those columns to generic query code
//! and `AuditedModel` lets generic code stamp a model without knowing its concrete type.

use chrono::{DateTime, Utc};
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Column access for the shared bookkeeping columns of an entity.
pub trait AuditedEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn is_deleted_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

/// Field access and lifecycle stamping for a row of an audited entity.
///
/// Invariant kept by every mutator: `deleted_at` is `Some` if and only if `is_deleted` is true.
pub trait AuditedModel {
    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn is_deleted(&self) -> bool;
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Stamps a model that is about to be inserted.
    ///
    /// Sets both timestamps to `now` and clears any soft-delete state.
    fn stamp_created(&mut self, now: DateTime<Utc>);

    /// Refreshes `updated_at`.
    fn touch(&mut self, now: DateTime<Utc>);

    /// Flags the row as soft-deleted at `now`, refreshing `updated_at` as well.
    fn mark_deleted(&mut self, now: DateTime<Utc>);

    /// Clears the soft-delete flag, refreshing `updated_at`.
    fn clear_deleted(&mut self, now: DateTime<Utc>);

    /// Copies `created_at`, `is_deleted` and `deleted_at` from `other`.
    fn copy_lifecycle(&mut self, other: &Self);
}
