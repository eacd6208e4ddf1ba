//! Test utilities for driving the router against an in-memory database.

use anyhow::Result;
use axum::Router;
use migration::{Migrator, MigratorTrait};
use rentals::config::AppConfig;
use rentals::server::{AppState, create_app};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Builds the full application router over a fresh in-memory database.
pub async fn setup_test_app() -> Result<(DatabaseConnection, Router)> {
    let db = setup_test_db().await?;

    let state = AppState {
        config: Arc::new(AppConfig {
            profile: "test".to_string(),
            ..Default::default()
        }),
        db: db.clone(),
    };

    Ok((db, create_app(state)))
}

/// Inserts a location row directly, optionally with WKT coordinates.
pub async fn insert_location(db: &DatabaseConnection, id: i32, wkt: Option<&str>) -> Result<()> {
    let coordinates = match wkt {
        Some(text) => format!("'{text}'"),
        None => "NULL".to_string(),
    };
    db.execute(Statement::from_string(
        db.get_database_backend(),
        format!(
            "INSERT INTO locations (id, address, city, state, country, postal_code, coordinates, created_at) \
             VALUES ({id}, '{id} Main St', 'Springfield', 'IL', 'USA', '62701', {coordinates}, '2025-01-10 10:00:00+00:00')"
        ),
    ))
    .await?;
    Ok(())
}

/// Inserts a property row directly.
pub async fn insert_property(db: &DatabaseConnection, id: i32, location_id: i32) -> Result<()> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        format!(
            "INSERT INTO properties (id, name, description, price_per_month, beds, baths, location_id, created_at) \
             VALUES ({id}, 'Unit {id}', 'Sunny two-bed', 1450.0, 2, 1, {location_id}, '2025-01-10 10:00:00+00:00')"
        ),
    ))
    .await?;
    Ok(())
}

/// Records a current residence for the tenant.
pub async fn insert_residence(
    db: &DatabaseConnection,
    tenant_id: i32,
    property_id: i32,
) -> Result<()> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        format!(
            "INSERT INTO tenant_residences (tenant_id, property_id, created_at) \
             VALUES ({tenant_id}, {property_id}, '2025-01-10 10:00:00+00:00')"
        ),
    ))
    .await?;
    Ok(())
}
