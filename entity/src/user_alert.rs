use sea_orm::entity::prelude::*;

/// Saved search that notifies a user when a matching empty leg is published.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_alert")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub departure_airport_id: Option<Uuid>,
    pub arrival_airport_id: Option<Uuid>,
    pub earliest_departure: Option<ChronoDateTimeUtc>,
    pub latest_departure: Option<ChronoDateTimeUtc>,
    pub max_price: Option<i64>,
    pub is_active: bool,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
    pub is_deleted: bool,
    pub deleted_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DepartureAirportId",
        to = "super::airport::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    DepartureAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::ArrivalAirportId",
        to = "super::airport::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ArrivalAirport,
}

impl ActiveModelBehavior for ActiveModel {}

audited!();
