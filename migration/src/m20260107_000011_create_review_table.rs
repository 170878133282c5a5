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
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_uuid(Review::Id))
                    .col(uuid(Review::UserId))
                    .col(uuid(Review::FlightId))
                    .col(integer(Review::Rating))
                    .col(text_null(Review::Comment))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .col(timestamp_with_time_zone(Review::UpdatedAt))
                    .col(boolean(Review::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Review::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_flight_id")
                            .from(Review::Table, Review::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    UserId,
    FlightId,
    Rating,
    Comment,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
