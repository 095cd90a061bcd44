//! Create `sppg` table.
//! Food-service units; every unit belongs to one organization.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sppg::Table)
                    .if_not_exists()
                    .col(uuid(Sppg::Id).primary_key())
                    .col(string_len(Sppg::Nama, 255))
                    .col(text(Sppg::Alamat))
                    .col(string_len_null(Sppg::Kontak, 128))
                    .col(integer(Sppg::KapasitasProduksi))
                    .col(string_len(Sppg::StatusVerifikasi, 32).default("DRAFT"))
                    .col(text_null(Sppg::CatatanVerifikasi))
                    .col(double_null(Sppg::Longitude))
                    .col(double_null(Sppg::Latitude))
                    .col(uuid(Sppg::OrganisasiId))
                    .col(uuid(Sppg::CreatedBy))
                    .col(timestamp_with_time_zone(Sppg::CreatedAt))
                    .col(uuid_null(Sppg::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Sppg::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sppg_organisasi")
                            .from(Sppg::Table, Sppg::OrganisasiId)
                            .to(Organisasi::Table, Organisasi::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sppg::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sppg {
    Table,
    Id,
    Nama,
    Alamat,
    Kontak,
    KapasitasProduksi,
    StatusVerifikasi,
    CatatanVerifikasi,
    Longitude,
    Latitude,
    OrganisasiId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organisasi { Table, Id }
