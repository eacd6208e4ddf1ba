//! # Data Models
//!
//! This module contains all the data models used throughout the Rentals API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod location;
pub mod property;
pub mod tenant;
pub mod tenant_favorite;
pub mod tenant_residence;

pub use location::Entity as Location;
pub use property::Entity as Property;
pub use tenant::Entity as Tenant;
pub use tenant_favorite::Entity as TenantFavorite;
pub use tenant_residence::Entity as TenantResidence;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "rentals".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
