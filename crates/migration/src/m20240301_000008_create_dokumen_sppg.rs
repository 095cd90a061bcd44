//! Create `dokumen_sppg` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DokumenSppg::Table)
                    .if_not_exists()
                    .col(uuid(DokumenSppg::Id).primary_key())
                    .col(string_len(DokumenSppg::JenisDokumen, 32))
                    .col(string_len(DokumenSppg::NamaDokumen, 255))
                    .col(string_len_null(DokumenSppg::NomorDokumen, 128))
                    .col(date(DokumenSppg::TanggalTerbit))
                    .col(date_null(DokumenSppg::TanggalExpiry))
                    .col(string_len(DokumenSppg::FilePath, 1024))
                    .col(string_len(DokumenSppg::StatusDokumen, 32).default("PENDING"))
                    .col(text_null(DokumenSppg::CatatanReview))
                    .col(uuid(DokumenSppg::SppgId))
                    .col(uuid(DokumenSppg::CreatedBy))
                    .col(timestamp_with_time_zone(DokumenSppg::CreatedAt))
                    .col(uuid_null(DokumenSppg::UpdatedBy))
                    .col(timestamp_with_time_zone_null(DokumenSppg::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dokumen_sppg_sppg")
                            .from(DokumenSppg::Table, DokumenSppg::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DokumenSppg::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DokumenSppg {
    Table,
    Id,
    JenisDokumen,
    NamaDokumen,
    NomorDokumen,
    TanggalTerbit,
    TanggalExpiry,
    FilePath,
    StatusDokumen,
    CatatanReview,
    SppgId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }
