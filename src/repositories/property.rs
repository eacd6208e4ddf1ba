//! # Property Repository
//!
//! Read-only access to properties and their locations. The geometry column
//! on locations is not mapped by the ORM, so coordinates are fetched per
//! location through a raw SQL passthrough and returned as well-known text.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, ModelTrait, Statement};

use crate::models::location::{Entity as Location, Model as LocationModel};
use crate::models::property::Model as PropertyModel;
use crate::models::tenant::{Model as TenantModel, Residences};

/// Repository for Property database operations
pub struct PropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PropertyRepository<'a> {
    /// Create a new PropertyRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the properties the tenant currently lives in, with locations
    pub async fn residences_for_tenant(
        &self,
        tenant: &TenantModel,
    ) -> Result<Vec<(PropertyModel, Option<LocationModel>)>, sea_orm::DbErr> {
        tenant
            .find_linked(Residences)
            .find_also_related(Location)
            .all(self.db)
            .await
    }

    /// Read a location's coordinates as well-known text.
    ///
    /// On Postgres the geometry column goes through `ST_AsText`; on SQLite
    /// the column already stores WKT. Returns `None` when the location does
    /// not exist or its geometry is NULL.
    pub async fn location_wkt(&self, location_id: i32) -> Result<Option<String>, sea_orm::DbErr> {
        let backend = self.db.get_database_backend();
        let sql = match backend {
            DbBackend::Postgres => {
                "SELECT ST_AsText(coordinates) AS coordinates FROM locations WHERE id = $1"
            }
            _ => "SELECT coordinates FROM locations WHERE id = ?",
        };

        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                backend,
                sql,
                [location_id.into()],
            ))
            .await?;

        match row {
            Some(row) => row.try_get::<Option<String>>("", "coordinates"),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tenant::{CreateTenantData, TenantRepository};
    use migration::MigratorTrait;
    use sea_orm::Database;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_location(db: &DatabaseConnection, id: i32, wkt: Option<&str>) {
        let coordinates = match wkt {
            Some(text) => format!("'{text}'"),
            None => "NULL".to_string(),
        };
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!(
                "INSERT INTO locations (id, address, city, state, country, postal_code, coordinates, created_at) \
                 VALUES ({id}, '1 Main St', 'Springfield', 'IL', 'USA', '62701', {coordinates}, '2025-01-10 10:00:00+00:00')"
            ),
        ))
        .await
        .unwrap();
    }

    async fn seed_property(db: &DatabaseConnection, id: i32, location_id: i32) {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!(
                "INSERT INTO properties (id, name, description, price_per_month, beds, baths, location_id, created_at) \
                 VALUES ({id}, 'Unit {id}', 'Sunny two-bed', 1450.0, 2, 1, {location_id}, '2025-01-10 10:00:00+00:00')"
            ),
        ))
        .await
        .unwrap();
    }

    async fn seed_residence(db: &DatabaseConnection, tenant_id: i32, property_id: i32) {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!(
                "INSERT INTO tenant_residences (tenant_id, property_id, created_at) \
                 VALUES ({tenant_id}, {property_id}, '2025-01-10 10:00:00+00:00')"
            ),
        ))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_location_wkt_round_trip() {
        let db = setup_test_db().await;
        seed_location(&db, 1, Some("POINT(-89.65 39.78)")).await;

        let repo = PropertyRepository::new(&db);
        let wkt = repo.location_wkt(1).await.unwrap();
        assert_eq!(wkt.as_deref(), Some("POINT(-89.65 39.78)"));
    }

    #[tokio::test]
    async fn test_location_wkt_null_geometry() {
        let db = setup_test_db().await;
        seed_location(&db, 1, None).await;

        let repo = PropertyRepository::new(&db);
        assert!(repo.location_wkt(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_location_wkt_missing_row() {
        let db = setup_test_db().await;

        let repo = PropertyRepository::new(&db);
        assert!(repo.location_wkt(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_residences_for_tenant() {
        let db = setup_test_db().await;
        seed_location(&db, 1, Some("POINT(1 2)")).await;
        seed_location(&db, 2, Some("POINT(3 4)")).await;
        seed_property(&db, 10, 1).await;
        seed_property(&db, 11, 2).await;

        let tenant_repo = TenantRepository::new(&db);
        let tenant = tenant_repo
            .create(CreateTenantData {
                cognito_id: "user_1".to_string(),
                name: "Jamie Doe".to_string(),
                email: "jamie@example.com".to_string(),
                phone_number: "+1-555-0100".to_string(),
            })
            .await
            .unwrap();

        seed_residence(&db, tenant.id, 10).await;

        let repo = PropertyRepository::new(&db);
        let residences = repo.residences_for_tenant(&tenant).await.unwrap();

        assert_eq!(residences.len(), 1);
        let (property, location) = &residences[0];
        assert_eq!(property.id, 10);
        assert_eq!(location.as_ref().unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_residences_for_tenant_empty() {
        let db = setup_test_db().await;

        let tenant_repo = TenantRepository::new(&db);
        let tenant = tenant_repo
            .create(CreateTenantData {
                cognito_id: "user_1".to_string(),
                name: "Jamie Doe".to_string(),
                email: "jamie@example.com".to_string(),
                phone_number: "+1-555-0100".to_string(),
            })
            .await
            .unwrap();

        let repo = PropertyRepository::new(&db);
        let residences = repo.residences_for_tenant(&tenant).await.unwrap();
        assert!(residences.is_empty());
    }
}
