use crate::{data::UnitOfWork, error::data::DataError};
use entity::AuditedModel;
use sea_orm::ColumnTrait;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod add;
mod count;
mod get_all;
mod soft_delete;
