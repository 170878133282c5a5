use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_uuid(Aircraft::Id))
                    .col(uuid(Aircraft::CompanyId))
                    .col(string_uniq(Aircraft::Registration))
                    .col(string(Aircraft::ModelName))
                    .col(string(Aircraft::Manufacturer))
                    .col(integer(Aircraft::SeatCapacity))
                    .col(integer_null(Aircraft::RangeKm))
                    .col(timestamp_with_time_zone(Aircraft::CreatedAt))
                    .col(timestamp_with_time_zone(Aircraft::UpdatedAt))
                    .col(boolean(Aircraft::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Aircraft::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircraft_company_id")
                            .from(Aircraft::Table, Aircraft::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    CompanyId,
    Registration,
    ModelName,
    Manufacturer,
    SeatCapacity,
    RangeKm,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
