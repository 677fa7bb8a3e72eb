//! Migration: Create recipes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Recipes::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Recipes::Name).string().not_null())
                    .col(ColumnDef::new(Recipes::Difficulty).string().not_null())
                    .col(ColumnDef::new(Recipes::Time).string().not_null())
                    .col(ColumnDef::new(Recipes::Type).string().not_null())
                    .col(ColumnDef::new(Recipes::Ingredients).json().not_null())
                    .col(ColumnDef::new(Recipes::Preparation).text().not_null())
                    .col(ColumnDef::new(Recipes::Image).string().null())
                    .col(
                        ColumnDef::new(Recipes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Filtering by type and time is the common list query
        manager
            .create_index(
                Index::create()
                    .name("idx_recipes_type_time")
                    .table(Recipes::Table)
                    .col(Recipes::Type)
                    .col(Recipes::Time)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Recipes {
    Table,
    Id,
    Name,
    Difficulty,
    Time,
    Type,
    Ingredients,
    Preparation,
    Image,
    CreatedAt,
}
