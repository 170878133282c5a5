use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_uuid(Company::Id))
                    .col(string(Company::Name))
                    .col(string_null(Company::RegistrationNumber))
                    .col(string_null(Company::Email))
                    .col(string_null(Company::Phone))
                    .col(boolean(Company::IsVerified).default(false))
                    .col(timestamp_with_time_zone(Company::CreatedAt))
                    .col(timestamp_with_time_zone(Company::UpdatedAt))
                    .col(boolean(Company::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Company::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Company {
    Table,
    Id,
    Name,
    RegistrationNumber,
    Email,
    Phone,
    IsVerified,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
