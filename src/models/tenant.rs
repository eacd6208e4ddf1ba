//! Tenant entity model
//!
//! This module contains the SeaORM entity model for the tenants table,
//! which stores renter records keyed by the identity provider subject id.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Tenant entity representing an end-user renter
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    /// Internal identifier for the tenant (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// External identity-provider subject id (unique, immutable)
    #[sea_orm(unique)]
    pub cognito_id: String,

    /// Display name of the tenant
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Contact phone number
    pub phone_number: String,

    /// Timestamp when the tenant was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Link from a tenant to its favorited properties through tenant_favorites.
pub struct FavoriteProperties;

impl Linked for FavoriteProperties {
    type FromEntity = Entity;
    type ToEntity = super::property::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::tenant_favorite::Relation::Tenant.def().rev(),
            super::tenant_favorite::Relation::Property.def(),
        ]
    }
}

/// Link from a tenant to its current residences through tenant_residences.
pub struct Residences;

impl Linked for Residences {
    type FromEntity = Entity;
    type ToEntity = super::property::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::tenant_residence::Relation::Tenant.def().rev(),
            super::tenant_residence::Relation::Property.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
