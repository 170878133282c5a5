pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_company_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_airport_table;
mod m20260105_000004_create_aircraft_table;
mod m20260105_000005_create_flight_table;
mod m20260106_000006_create_booking_table;
mod m20260106_000007_create_passenger_table;
mod m20260106_000008_create_payment_table;
mod m20260106_000009_create_booking_service_table;
mod m20260107_000010_create_document_table;
mod m20260107_000011_create_review_table;
mod m20260107_000012_create_user_alert_table;
mod m20260108_000013_create_refresh_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_company_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_airport_table::Migration),
            Box::new(m20260105_000004_create_aircraft_table::Migration),
            Box::new(m20260105_000005_create_flight_table::Migration),
            Box::new(m20260106_000006_create_booking_table::Migration),
            Box::new(m20260106_000007_create_passenger_table::Migration),
            Box::new(m20260106_000008_create_payment_table::Migration),
            Box::new(m20260106_000009_create_booking_service_table::Migration),
            Box::new(m20260107_000010_create_document_table::Migration),
            Box::new(m20260107_000011_create_review_table::Migration),
            Box::new(m20260107_000012_create_user_alert_table::Migration),
            Box::new(m20260108_000013_create_refresh_token_table::Migration),
        ]
    }
}
