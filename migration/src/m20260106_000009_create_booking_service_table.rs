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
                    .table(BookingService::Table)
                    .if_not_exists()
                    .col(pk_uuid(BookingService::Id))
                    .col(uuid(BookingService::BookingId))
                    .col(string(BookingService::Name))
                    .col(big_integer(BookingService::Price))
                    .col(integer(BookingService::Quantity))
                    .col(timestamp_with_time_zone(BookingService::CreatedAt))
                    .col(timestamp_with_time_zone(BookingService::UpdatedAt))
                    .col(boolean(BookingService::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(BookingService::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_booking_id")
                            .from(BookingService::Table, BookingService::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingService {
    Table,
    Id,
    BookingId,
    Name,
    Price,
    Quantity,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
