//! Location entity model
//!
//! The locations table also carries a `coordinates` geometry column that is
//! deliberately not mapped here: the ORM's structured representation of the
//! geometry type is not usable, so coordinates are re-fetched per property
//! as well-known text through a raw SQL statement (see
//! `repositories::property`).

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Location entity holding the postal address of a property
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    /// Unique identifier for the location (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Street address
    pub address: String,

    /// City name
    pub city: String,

    /// State or region
    pub state: String,

    /// Country name
    pub country: String,

    /// Postal code
    pub postal_code: String,

    /// Timestamp when the location was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
