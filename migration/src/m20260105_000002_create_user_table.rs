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
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_uuid(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_null(User::Phone))
                    .col(string(User::Role))
                    .col(uuid_null(User::CompanyId))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .col(boolean(User::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(User::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_company_id")
                            .from(User::Table, User::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Phone,
    Role,
    CompanyId,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
