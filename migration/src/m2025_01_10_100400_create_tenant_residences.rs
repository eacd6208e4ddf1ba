//! Migration to create the tenant_residences join table.
//!
//! Records which properties a tenant currently lives in. Rows are written
//! by the leasing flow elsewhere; this service only reads them.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TenantResidences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TenantResidences::TenantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantResidences::PropertyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantResidences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(TenantResidences::TenantId)
                            .col(TenantResidences::PropertyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_residences_tenant")
                            .from(TenantResidences::Table, TenantResidences::TenantId)
                            .to(Tenants::Table, Tenants::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_residences_property")
                            .from(TenantResidences::Table, TenantResidences::PropertyId)
                            .to(Properties::Table, Properties::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TenantResidences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TenantResidences {
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
