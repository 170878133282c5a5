//! Response DTOs mapped from entity models.
//!
//! Each DTO copies the public fields of its entity and drops the soft-delete bookkeeping
//! (`is_deleted`, `deleted_at`), which never leaves the data layer.

pub mod aircraft;
pub mod airport;
pub mod booking;
pub mod company;
pub mod document;
pub mod flight;
pub mod review;
pub mod user;
pub mod user_alert;

use serde::{Deserialize, Serialize};

/// One page of results together with the paging arguments that produced it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
}

impl<T> PaginatedDto<T> {
    /// Maps a page of entity models through `map`.
    pub fn from_entities<M>(
        models: Vec<M>,
        page: u64,
        page_size: u64,
        map: impl Fn(M) -> T,
    ) -> Self {
        Self {
            items: models.into_iter().map(map).collect(),
            page,
            page_size,
        }
    }
}
