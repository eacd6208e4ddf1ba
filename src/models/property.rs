//! Property entity model
//!
//! Properties are owned by the listings service; this service only reads
//! them when resolving residences and favorites.

use super::location::Entity as Location;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Property entity representing a rentable listing
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    /// Unique identifier for the property (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the listing
    pub name: String,

    /// Listing description (optional)
    pub description: Option<String>,

    /// Monthly rent
    pub price_per_month: f64,

    /// Number of bedrooms
    pub beds: i32,

    /// Number of bathrooms
    pub baths: i32,

    /// Identifier of the property's location (one-to-one)
    pub location_id: i32,

    /// Timestamp when the property was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Location",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
}

impl Related<Location> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
