//! Migration to create the properties table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Name).text().not_null())
                    .col(ColumnDef::new(Properties::Description).text().null())
                    .col(
                        ColumnDef::new(Properties::PricePerMonth)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Beds).integer().not_null())
                    .col(ColumnDef::new(Properties::Baths).integer().not_null())
                    .col(ColumnDef::new(Properties::LocationId).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_location")
                            .from(Properties::Table, Properties::LocationId)
                            .to(Locations::Table, Locations::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Name,
    Description,
    PricePerMonth,
    Beds,
    Baths,
    LocationId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
}
