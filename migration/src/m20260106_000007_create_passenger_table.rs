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
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_uuid(Passenger::Id))
                    .col(uuid(Passenger::BookingId))
                    .col(string(Passenger::FirstName))
                    .col(string(Passenger::LastName))
                    .col(date_null(Passenger::DateOfBirth))
                    .col(string_null(Passenger::PassportNumber))
                    .col(timestamp_with_time_zone(Passenger::CreatedAt))
                    .col(timestamp_with_time_zone(Passenger::UpdatedAt))
                    .col(boolean(Passenger::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Passenger::DeletedAt))
                    // Passengers live and die with their booking
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_booking_id")
                            .from(Passenger::Table, Passenger::BookingId)
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
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    Table,
    Id,
    BookingId,
    FirstName,
    LastName,
    DateOfBirth,
    PassportNumber,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
