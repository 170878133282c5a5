use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000006_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_uuid(Payment::Id))
                    .col(uuid(Payment::BookingId))
                    .col(big_integer(Payment::Amount))
                    .col(string(Payment::Currency))
                    .col(string(Payment::Provider))
                    .col(string_null(Payment::ProviderReference))
                    .col(string(Payment::Status))
                    .col(timestamp_with_time_zone_null(Payment::PaidAt))
                    .col(timestamp_with_time_zone(Payment::CreatedAt))
                    .col(timestamp_with_time_zone(Payment::UpdatedAt))
                    .col(boolean(Payment::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Payment::DeletedAt))
                    // A booking with recorded payments cannot be hard-deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_booking_id")
                            .from(Payment::Table, Payment::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    BookingId,
    Amount,
    Currency,
    Provider,
    ProviderReference,
    Status,
    PaidAt,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
