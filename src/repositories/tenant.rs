//! # Tenant Repository
//!
//! This module contains the repository implementation for Tenant entities,
//! providing lookup, create/update, and favorite management operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, Set,
};

use crate::models::property::Model as PropertyModel;
use crate::models::tenant::{
    self, ActiveModel as TenantActiveModel, Entity as Tenant, FavoriteProperties,
    Model as TenantModel,
};
use crate::models::tenant_favorite::{self, ActiveModel as FavoriteActiveModel};

/// Field values for creating a new tenant
#[derive(Debug, Clone)]
pub struct CreateTenantData {
    pub cognito_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// Field values for updating a tenant; `None` fields are preserved
#[derive(Debug, Clone, Default)]
pub struct UpdateTenantData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Repository for Tenant database operations
pub struct TenantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantRepository<'a> {
    /// Create a new TenantRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a tenant by its identity-provider subject id
    pub async fn find_by_cognito_id(
        &self,
        cognito_id: &str,
    ) -> Result<Option<TenantModel>, sea_orm::DbErr> {
        Tenant::find()
            .filter(tenant::Column::CognitoId.eq(cognito_id))
            .one(self.db)
            .await
    }

    /// Create a new tenant row.
    ///
    /// A duplicate `cognito_id` surfaces as a unique-violation `DbErr`;
    /// callers map it to a conflict response.
    pub async fn create(&self, data: CreateTenantData) -> Result<TenantModel, sea_orm::DbErr> {
        let now = Utc::now();

        let tenant = TenantActiveModel {
            cognito_id: Set(data.cognito_id),
            name: Set(data.name),
            email: Set(data.email),
            phone_number: Set(data.phone_number),
            created_at: Set(now.into()),
            ..Default::default()
        };

        tenant.insert(self.db).await
    }

    /// Update the tenant matching `cognito_id`, preserving omitted fields.
    ///
    /// Returns `Ok(None)` when no such tenant exists.
    pub async fn update(
        &self,
        cognito_id: &str,
        data: UpdateTenantData,
    ) -> Result<Option<TenantModel>, sea_orm::DbErr> {
        let Some(existing) = self.find_by_cognito_id(cognito_id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        if let Some(phone_number) = data.phone_number {
            active.phone_number = Set(phone_number);
        }

        let updated = active.update(self.db).await?;
        Ok(Some(updated))
    }

    /// List the properties the tenant has favorited
    pub async fn favorites(
        &self,
        tenant: &TenantModel,
    ) -> Result<Vec<PropertyModel>, sea_orm::DbErr> {
        tenant.find_linked(FavoriteProperties).all(self.db).await
    }

    /// Record a favorite for the tenant/property pair.
    ///
    /// The insert races against concurrent adds on the join table's
    /// composite primary key; the loser observes a unique-violation `DbErr`
    /// and no duplicate row is ever created.
    pub async fn add_favorite(
        &self,
        tenant_id: i32,
        property_id: i32,
    ) -> Result<(), sea_orm::DbErr> {
        let favorite = FavoriteActiveModel {
            tenant_id: Set(tenant_id),
            property_id: Set(property_id),
            created_at: Set(Utc::now().into()),
        };

        // exec-only: composite-key entities have no auto-generated id to read back
        tenant_favorite::Entity::insert(favorite)
            .exec_without_returning(self.db)
            .await?;
        Ok(())
    }

    /// Remove a favorite for the tenant/property pair.
    ///
    /// Removing a pair that was never favorited is not an error; the
    /// returned count is zero in that case.
    pub async fn remove_favorite(
        &self,
        tenant_id: i32,
        property_id: i32,
    ) -> Result<u64, sea_orm::DbErr> {
        let result = tenant_favorite::Entity::delete_many()
            .filter(tenant_favorite::Column::TenantId.eq(tenant_id))
            .filter(tenant_favorite::Column::PropertyId.eq(property_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_unique_violation;
    use migration::MigratorTrait;
    use sea_orm::{ConnectionTrait, Database, Statement};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_property(db: &DatabaseConnection, id: i32) {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!(
                "INSERT INTO locations (id, address, city, state, country, postal_code, coordinates, created_at) \
                 VALUES ({id}, '1 Main St', 'Springfield', 'IL', 'USA', '62701', 'POINT(-89.65 39.78)', '2025-01-10 10:00:00+00:00')"
            ),
        ))
        .await
        .unwrap();
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!(
                "INSERT INTO properties (id, name, description, price_per_month, beds, baths, location_id, created_at) \
                 VALUES ({id}, 'Unit {id}', NULL, 1200.0, 2, 1, {id}, '2025-01-10 10:00:00+00:00')"
            ),
        ))
        .await
        .unwrap();
    }

    fn sample_tenant() -> CreateTenantData {
        CreateTenantData {
            cognito_id: "user_1".to_string(),
            name: "Jamie Doe".to_string(),
            email: "jamie@example.com".to_string(),
            phone_number: "+1-555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_cognito_id() {
        let db = setup_test_db().await;
        let repo = TenantRepository::new(&db);

        let created = repo.create(sample_tenant()).await.unwrap();
        assert_eq!(created.cognito_id, "user_1");
        assert!(created.id > 0);

        let found = repo.find_by_cognito_id("user_1").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.email, "jamie@example.com");

        assert!(repo.find_by_cognito_id("user_2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_cognito_id_is_unique_violation() {
        let db = setup_test_db().await;
        let repo = TenantRepository::new(&db);

        repo.create(sample_tenant()).await.unwrap();
        let err = repo.create(sample_tenant()).await.unwrap_err();
        assert!(is_unique_violation(&err));
    }

    #[tokio::test]
    async fn test_update_preserves_omitted_fields() {
        let db = setup_test_db().await;
        let repo = TenantRepository::new(&db);

        repo.create(sample_tenant()).await.unwrap();

        let updated = repo
            .update(
                "user_1",
                UpdateTenantData {
                    email: Some("new@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.name, "Jamie Doe");
        assert_eq!(updated.phone_number, "+1-555-0100");
    }

    #[tokio::test]
    async fn test_update_unknown_tenant_returns_none() {
        let db = setup_test_db().await;
        let repo = TenantRepository::new(&db);

        let result = repo
            .update("missing", UpdateTenantData::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_add_and_remove_favorite() {
        let db = setup_test_db().await;
        seed_property(&db, 42).await;

        let repo = TenantRepository::new(&db);
        let tenant = repo.create(sample_tenant()).await.unwrap();

        repo.add_favorite(tenant.id, 42).await.unwrap();
        let favorites = repo.favorites(&tenant).await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, 42);

        // Second add hits the composite primary key
        let err = repo.add_favorite(tenant.id, 42).await.unwrap_err();
        assert!(is_unique_violation(&err));

        let removed = repo.remove_favorite(tenant.id, 42).await.unwrap();
        assert_eq!(removed, 1);
        assert!(repo.favorites(&tenant).await.unwrap().is_empty());

        // Removing again is a no-op, not an error
        let removed = repo.remove_favorite(tenant.id, 42).await.unwrap();
        assert_eq!(removed, 0);
    }
}
