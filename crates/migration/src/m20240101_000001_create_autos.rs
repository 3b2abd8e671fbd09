//! Create `autos` table.
//!
//! One row per vehicle, keyed by VIN.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Autos::Table)
                    .if_not_exists()
                    // 列宽与 models::auto 中的 MAX_*_LEN 保持一致
                    .col(string_len(Autos::Vin, 17).primary_key())
                    .col(string_len(Autos::Color, 64).not_null())
                    .col(string_len(Autos::Make, 128).not_null())
                    .col(string_len(Autos::Model, 128).not_null())
                    .col(integer(Autos::Year).not_null())
                    .col(
                        ColumnDef::new(Autos::Owner)
                            .string_len(256)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Autos::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Autos::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Autos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Autos { Table, Vin, Color, Make, Model, Year, Owner, CreatedAt, UpdatedAt }
