//! Create `standar_akg` table.
//! Reference nutrient ranges per age group.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StandarAkg::Table)
                    .if_not_exists()
                    .col(uuid(StandarAkg::Id).primary_key())
                    .col(string_len(StandarAkg::KelompokUsia, 255))
                    .col(double(StandarAkg::MinKalori))
                    .col(double_null(StandarAkg::MaxKalori))
                    .col(double(StandarAkg::MinProtein))
                    .col(double(StandarAkg::MinKarbohidrat))
                    .col(double(StandarAkg::MinLemak))
                    .col(text_null(StandarAkg::Deskripsi))
                    .col(string_len(StandarAkg::StatusAktif, 32).default("AKTIF"))
                    .col(uuid(StandarAkg::CreatedBy))
                    .col(timestamp_with_time_zone(StandarAkg::CreatedAt))
                    .col(uuid_null(StandarAkg::UpdatedBy))
                    .col(timestamp_with_time_zone_null(StandarAkg::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StandarAkg::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StandarAkg {
    Table,
    Id,
    KelompokUsia,
    MinKalori,
    MaxKalori,
    MinProtein,
    MinKarbohidrat,
    MinLemak,
    Deskripsi,
    StatusAktif,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
