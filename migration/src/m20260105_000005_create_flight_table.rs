use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_company_table::Company,
    m20260105_000003_create_airport_table::Airport,
    m20260105_000004_create_aircraft_table::Aircraft,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_uuid(Flight::Id))
                    .col(uuid(Flight::CompanyId))
                    .col(uuid(Flight::AircraftId))
                    .col(uuid(Flight::DepartureAirportId))
                    .col(uuid(Flight::ArrivalAirportId))
                    .col(timestamp_with_time_zone(Flight::DepartureTime))
                    .col(timestamp_with_time_zone(Flight::ArrivalTime))
                    .col(big_integer(Flight::Price))
                    .col(string(Flight::Currency))
                    .col(integer(Flight::AvailableSeats))
                    .col(string(Flight::Status))
                    .col(timestamp_with_time_zone(Flight::CreatedAt))
                    .col(timestamp_with_time_zone(Flight::UpdatedAt))
                    .col(boolean(Flight::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Flight::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_company_id")
                            .from(Flight::Table, Flight::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_aircraft_id")
                            .from(Flight::Table, Flight::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_departure_airport_id")
                            .from(Flight::Table, Flight::DepartureAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_arrival_airport_id")
                            .from(Flight::Table, Flight::ArrivalAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    CompanyId,
    AircraftId,
    DepartureAirportId,
    ArrivalAirportId,
    DepartureTime,
    ArrivalTime,
    Price,
    Currency,
    AvailableSeats,
    Status,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
