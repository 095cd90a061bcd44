//! Create `kegiatan_pengolahan` table.
//! Cooking sessions for a menu at an SPPG.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KegiatanPengolahan::Table)
                    .if_not_exists()
                    .col(uuid(KegiatanPengolahan::Id).primary_key())
                    .col(date(KegiatanPengolahan::TanggalPengolahan))
                    .col(timestamp_with_time_zone(KegiatanPengolahan::JamMulai))
                    .col(timestamp_with_time_zone_null(KegiatanPengolahan::JamSelesai))
                    .col(string_len(KegiatanPengolahan::JenisPengolahan, 32))
                    .col(integer(KegiatanPengolahan::TargetPorsi))
                    .col(integer_null(KegiatanPengolahan::PorsiTerealisasi))
                    .col(double_null(KegiatanPengolahan::SuhuPengolahan))
                    .col(string_len(KegiatanPengolahan::MetodePengolahan, 255))
                    .col(string_len(KegiatanPengolahan::PenanggungJawab, 255))
                    .col(string_len(KegiatanPengolahan::StatusKegiatan, 32).default("PERSIAPAN"))
                    .col(text_null(KegiatanPengolahan::CatatanProses))
                    .col(text_null(KegiatanPengolahan::CatatanMutu))
                    .col(json(KegiatanPengolahan::FotoProses))
                    .col(uuid(KegiatanPengolahan::SppgId))
                    .col(uuid(KegiatanPengolahan::MenuHarianId))
                    .col(uuid(KegiatanPengolahan::CreatedBy))
                    .col(timestamp_with_time_zone(KegiatanPengolahan::CreatedAt))
                    .col(uuid_null(KegiatanPengolahan::UpdatedBy))
                    .col(timestamp_with_time_zone_null(KegiatanPengolahan::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kegiatan_pengolahan_sppg")
                            .from(KegiatanPengolahan::Table, KegiatanPengolahan::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kegiatan_pengolahan_menu_harian")
                            .from(KegiatanPengolahan::Table, KegiatanPengolahan::MenuHarianId)
                            .to(MenuHarian::Table, MenuHarian::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(KegiatanPengolahan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum KegiatanPengolahan {
    Table,
    Id,
    TanggalPengolahan,
    JamMulai,
    JamSelesai,
    JenisPengolahan,
    TargetPorsi,
    PorsiTerealisasi,
    SuhuPengolahan,
    MetodePengolahan,
    PenanggungJawab,
    StatusKegiatan,
    CatatanProses,
    CatatanMutu,
    FotoProses,
    SppgId,
    MenuHarianId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }

#[derive(DeriveIden)]
enum MenuHarian { Table, Id }
