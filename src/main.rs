use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use autosalon_demo::config::{AppConfig, DEFAULT_PROPERTIES_PATH};
use autosalon_demo::database;
use autosalon_demo::demo;
use autosalon_demo::utils::errors::DemoResult;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Autosalon - dealership CRUD demo");
    info!("===================================");

    if let Err(e) = run().await {
        error!("❌ Demo run failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Load config → migrate → connect → run the demo transaction → close.
async fn run() -> DemoResult<()> {
    let config = AppConfig::load(DEFAULT_PROPERTIES_PATH)?;

    database::run_migrations(&config.database).await?;

    let mut conn = database::connect(&config.database).await?;
    let outcome = demo::run_demo(&mut conn).await;

    // The connection is closed on every exit path; a close failure is logged
    // inside and never masks the demo outcome.
    database::close(conn).await;

    outcome
}
