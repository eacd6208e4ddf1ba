//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean API for data access.

pub mod property;
pub mod tenant;

pub use property::PropertyRepository;
pub use tenant::{CreateTenantData, TenantRepository, UpdateTenantData};
