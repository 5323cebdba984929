// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single-row stamp of the dataset version that was last loaded
        manager
            .create_table(
                Table::create()
                    .table(SeedMetadata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeedMetadata::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SeedMetadata::DatasetVersion).string().not_null())
                    .col(
                        ColumnDef::new(SeedMetadata::RecordCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(SeedMetadata::SeededAt)
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
            .drop_table(Table::drop().table(SeedMetadata::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SeedMetadata {
    Table,
    Key,
    DatasetVersion,
    RecordCount,
    SeededAt,
}
