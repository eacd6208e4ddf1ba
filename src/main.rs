//! # Rentals API Main Entry Point
//!
//! This is the main entry point for the Rentals API service.

use rentals::{config::ConfigLoader, db::init_pool, server::run_server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    telemetry::init_tracing(&config)?;
    tracing::info!(profile = %config.profile, "Loaded configuration");

    // Acquire the connection pool once at startup and apply pending migrations
    let db = init_pool(&config).await?;
    use migration::MigratorTrait;
    migration::Migrator::up(&db, None).await?;

    // Start the server with the loaded configuration
    run_server(config, db).await
}
