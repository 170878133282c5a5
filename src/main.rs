use emptyleg::{config::Config, data::UnitOfWork, error::AppError, logging, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Connected to database, schema is up to date");

    let mut uow = UnitOfWork::new(db);
    let counts = [
        ("company", uow.companies().count().await?),
        ("user", uow.users().count().await?),
        ("airport", uow.airports().count().await?),
        ("aircraft", uow.aircraft().count().await?),
        ("flight", uow.flights().count().await?),
        ("booking", uow.bookings().count().await?),
        ("passenger", uow.passengers().count().await?),
        ("payment", uow.payments().count().await?),
        ("booking_service", uow.booking_services().count().await?),
        ("document", uow.documents().count().await?),
        ("review", uow.reviews().count().await?),
        ("user_alert", uow.user_alerts().count().await?),
        ("refresh_token", uow.refresh_tokens().count().await?),
    ];
    for (table, live) in counts {
        tracing::info!(table, live, "live rows");
    }

    uow.dispose().await?;

    Ok(())
}
