use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_user_table::User, m20260106_000006_create_booking_table::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_uuid(Document::Id))
                    .col(uuid(Document::UserId))
                    .col(uuid_null(Document::BookingId))
                    .col(string(Document::Kind))
                    .col(string(Document::FileName))
                    .col(string(Document::StoragePath))
                    .col(timestamp_with_time_zone(Document::CreatedAt))
                    .col(timestamp_with_time_zone(Document::UpdatedAt))
                    .col(boolean(Document::IsDeleted).default(false))
                    .col(timestamp_with_time_zone_null(Document::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_user_id")
                            .from(Document::Table, Document::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_booking_id")
                            .from(Document::Table, Document::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    UserId,
    BookingId,
    Kind,
    FileName,
    StoragePath,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
}
