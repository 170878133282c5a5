use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_user_table::User, m20260105_000005_create_flight_table::Flight,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_uuid(Booking::Id))
                    .col(uuid(Booking::FlightId))
                    .col(uuid(Booking::UserId))
                    .col(string_uniq(Booking::Reference))
                    .col(integer(Booking::SeatCount))
                    .col(big_integer(Booking::TotalPrice))
                    .col(string(Booking::Currency))
                    .col(string(Booking::Status))
                    .col(timestamp_with_time_zone(Booking::CreatedAt))
                    .col(timestamp_with_time_zone(Booking::UpdatedAt))
                    .col(boolean(Booking::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Booking::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_flight_id")
                            .from(Booking::Table, Booking::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    FlightId,
    UserId,
    Reference,
    SeatCount,
    TotalPrice,
    Currency,
    Status,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
