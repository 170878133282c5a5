use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_user_table::User, m20260105_000003_create_airport_table::Airport,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAlert::Table)
                    .if_not_exists()
                    .col(pk_uuid(UserAlert::Id))
                    .col(uuid(UserAlert::UserId))
                    .col(uuid_null(UserAlert::DepartureAirportId))
                    .col(uuid_null(UserAlert::ArrivalAirportId))
                    .col(timestamp_with_time_zone_null(UserAlert::EarliestDeparture))
                    .col(timestamp_with_time_zone_null(UserAlert::LatestDeparture))
                    .col(big_integer_null(UserAlert::MaxPrice))
                    .col(boolean(UserAlert::IsActive).default(true))
                    .col(timestamp_with_time_zone(UserAlert::CreatedAt))
                    .col(timestamp_with_time_zone(UserAlert::UpdatedAt))
                    .col(boolean(UserAlert::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(UserAlert::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_alert_user_id")
                            .from(UserAlert::Table, UserAlert::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_alert_departure_airport_id")
                            .from(UserAlert::Table, UserAlert::DepartureAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_alert_arrival_airport_id")
                            .from(UserAlert::Table, UserAlert::ArrivalAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAlert {
    Table,
    Id,
    UserId,
    DepartureAirportId,
    ArrivalAirportId,
    EarliestDeparture,
    LatestDeparture,
    MaxPrice,
    IsActive,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
