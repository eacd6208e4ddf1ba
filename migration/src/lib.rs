//! Database migrations for the Rentals API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_01_10_100000_create_tenants;
mod m2025_01_10_100100_create_locations;
mod m2025_01_10_100200_create_properties;
mod m2025_01_10_100300_create_tenant_favorites;
mod m2025_01_10_100400_create_tenant_residences;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_01_10_100000_create_tenants::Migration),
            Box::new(m2025_01_10_100100_create_locations::Migration),
            Box::new(m2025_01_10_100200_create_properties::Migration),
            Box::new(m2025_01_10_100300_create_tenant_favorites::Migration),
            Box::new(m2025_01_10_100400_create_tenant_residences::Migration),
        ]
    }
}
