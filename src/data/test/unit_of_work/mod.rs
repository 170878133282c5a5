use crate::{data::UnitOfWork, error::data::DataError};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod accessors;
mod dispose;
mod save_changes;
mod soft_delete_booking_cascade;
mod transaction;
