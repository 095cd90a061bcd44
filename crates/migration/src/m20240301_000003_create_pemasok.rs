//! Create `pemasok` table.
//! Suppliers; certificates are kept as a JSON array of file paths.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pemasok::Table)
                    .if_not_exists()
                    .col(uuid(Pemasok::Id).primary_key())
                    .col(string_len(Pemasok::Nama, 255))
                    .col(text(Pemasok::Alamat))
                    .col(string_len_null(Pemasok::Kontak, 128))
                    .col(string_len(Pemasok::JenisPemasok, 32))
                    .col(string_len(Pemasok::StatusAktif, 32).default("AKTIF"))
                    .col(json(Pemasok::Sertifikat))
                    .col(uuid(Pemasok::CreatedBy))
                    .col(timestamp_with_time_zone(Pemasok::CreatedAt))
                    .col(uuid_null(Pemasok::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Pemasok::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pemasok::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pemasok {
    Table,
    Id,
    Nama,
    Alamat,
    Kontak,
    JenisPemasok,
    StatusAktif,
    Sertifikat,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}
