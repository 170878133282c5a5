//! SeaORM entity models for the empty-leg marketplace.
//!
//! Every entity shares the audit/soft-delete columns described in [`audited`]. The
//! `audited!` macro below implements [`AuditedEntity`] and [`AuditedModel`] for the
//! `Entity`/`Model` pair of the module it is invoked in.

pub mod audited;

pub use audited::{AuditedEntity, AuditedModel};

macro_rules! audited {
    () => {
        impl crate::audited::AuditedEntity for Entity {
            fn id_column() -> Column {
                Column::Id
            }

            fn created_at_column() -> Column {
                Column::CreatedAt
            }

            fn updated_at_column() -> Column {
                Column::UpdatedAt
            }

            fn is_deleted_column() -> Column {
                Column::IsDeleted
            }

            fn deleted_at_column() -> Column {
                Column::DeletedAt
            }
        }

        impl crate::audited::AuditedModel for Model {
            fn id(&self) -> Uuid {
                self.id
            }

            fn set_id(&mut self, id: Uuid) {
                self.id = id;
            }

            fn created_at(&self) -> ChronoDateTimeUtc {
                self.created_at
            }

            fn updated_at(&self) -> ChronoDateTimeUtc {
                self.updated_at
            }

            fn is_deleted(&self) -> bool {
                self.is_deleted
            }

            fn deleted_at(&self) -> Option<ChronoDateTimeUtc> {
                self.deleted_at
            }

            fn stamp_created(&mut self, now: ChronoDateTimeUtc) {
                self.created_at = now;
                self.updated_at = now;
                self.is_deleted = false;
                self.deleted_at = None;
            }

            fn touch(&mut self, now: ChronoDateTimeUtc) {
                self.updated_at = now;
            }

            fn mark_deleted(&mut self, now: ChronoDateTimeUtc) {
                self.is_deleted = true;
                self.deleted_at = Some(now);
                self.updated_at = now;
            }

            fn clear_deleted(&mut self, now: ChronoDateTimeUtc) {
                self.is_deleted = false;
                self.deleted_at = None;
                self.updated_at = now;
            }

            fn copy_lifecycle(&mut self, other: &Self) {
                self.created_at = other.created_at;
                self.is_deleted = other.is_deleted;
                self.deleted_at = other.deleted_at;
            }
        }
    };
}

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod booking_service;
pub mod company;
pub mod document;
pub mod flight;
pub mod passenger;
pub mod payment;
pub mod prelude;
pub mod refresh_token;
pub mod review;
pub mod user;
pub mod user_alert;
