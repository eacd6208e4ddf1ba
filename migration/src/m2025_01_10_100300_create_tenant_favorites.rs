//! Migration to create the tenant_favorites join table.
//!
//! The composite primary key is the uniqueness guarantee for the
//! tenant/property pair; concurrent duplicate adds are resolved by the
//! database rather than an application-level existence check.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TenantFavorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TenantFavorites::TenantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantFavorites::PropertyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantFavorites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(TenantFavorites::TenantId)
                            .col(TenantFavorites::PropertyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_favorites_tenant")
                            .from(TenantFavorites::Table, TenantFavorites::TenantId)
                            .to(Tenants::Table, Tenants::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_favorites_property")
                            .from(TenantFavorites::Table, TenantFavorites::PropertyId)
                            .to(Properties::Table, Properties::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TenantFavorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TenantFavorites {
    Table,
    TenantId,
    PropertyId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
}
