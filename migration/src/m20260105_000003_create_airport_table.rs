use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_uuid(Airport::Id))
                    .col(string_uniq(Airport::IataCode))
                    .col(string_null(Airport::IcaoCode))
                    .col(string(Airport::Name))
                    .col(string(Airport::City))
                    .col(string(Airport::Country))
                    .col(timestamp_with_time_zone(Airport::CreatedAt))
                    .col(timestamp_with_time_zone(Airport::UpdatedAt))
                    .col(boolean(Airport::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Airport::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    IataCode,
    IcaoCode,
    Name,
    City,
    Country,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
