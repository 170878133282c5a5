use sea_orm::entity::prelude::*;

/// An empty-leg flight offered for booking.
///
/// `price` is stored in minor currency units (cents) to avoid floating point rounding.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub aircraft_id: Uuid,
    pub departure_airport_id: Uuid,
    pub arrival_airport_id: Uuid,
    pub departure_time: ChronoDateTimeUtc,
    pub arrival_time: ChronoDateTimeUtc,
    pub price: i64,
    pub currency: String,
    pub available_seats: i32,
    pub status: String,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
    pub is_deleted: bool,
    pub deleted_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Aircraft,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::DepartureAirportId",
        to = "super::airport::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    DepartureAirport,
    #[sea_orm(
        belongs_to = "super::airport::Entity",
        from = "Column::ArrivalAirportId",
        to = "super::airport::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    ArrivalAirport,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

audited!();
