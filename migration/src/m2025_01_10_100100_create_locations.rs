//! Migration to create the locations table.
//!
//! The `coordinates` column is a PostGIS `geometry` on Postgres and plain
//! WKT text on SQLite; the application never maps it through the ORM and
//! always reads it back as well-known text.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut coordinates = ColumnDef::new(Locations::Coordinates);
        match manager.get_database_backend() {
            DbBackend::Postgres => coordinates.custom(Alias::new("geometry")),
            _ => coordinates.text(),
        };

        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Address).text().not_null())
                    .col(ColumnDef::new(Locations::City).text().not_null())
                    .col(ColumnDef::new(Locations::State).text().not_null())
                    .col(ColumnDef::new(Locations::Country).text().not_null())
                    .col(ColumnDef::new(Locations::PostalCode).text().not_null())
                    .col(&mut coordinates)
                    .col(
                        ColumnDef::new(Locations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    Address,
    City,
    State,
    Country,
    PostalCode,
    Coordinates,
    CreatedAt,
}
