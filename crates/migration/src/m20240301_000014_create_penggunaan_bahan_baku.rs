//! Create `penggunaan_bahan_baku` table.
//! Raw material drawn by a cooking session, traceable to its delivery.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PenggunaanBahanBaku::Table)
                    .if_not_exists()
                    .col(uuid(PenggunaanBahanBaku::Id).primary_key())
                    .col(string_len(PenggunaanBahanBaku::NamaBahan, 255))
                    .col(string_len(PenggunaanBahanBaku::JenisBahan, 32))
                    .col(double(PenggunaanBahanBaku::JumlahDigunakan))
                    .col(string_len(PenggunaanBahanBaku::Satuan, 32))
                    .col(string_len_null(PenggunaanBahanBaku::BatchNumber, 255))
                    .col(date_null(PenggunaanBahanBaku::TanggalExpiry))
                    .col(string_len(PenggunaanBahanBaku::KondisiBahan, 32))
                    .col(string_len_null(PenggunaanBahanBaku::SumberBahan, 255))
                    .col(text_null(PenggunaanBahanBaku::CatatanPenggunaan))
                    .col(uuid(PenggunaanBahanBaku::KegiatanPengolahanId))
                    .col(uuid_null(PenggunaanBahanBaku::LaporanBahanBakuId))
                    .col(uuid(PenggunaanBahanBaku::CreatedBy))
                    .col(timestamp_with_time_zone(PenggunaanBahanBaku::CreatedAt))
                    .col(uuid_null(PenggunaanBahanBaku::UpdatedBy))
                    .col(timestamp_with_time_zone_null(PenggunaanBahanBaku::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_penggunaan_bahan_baku_kegiatan")
                            .from(PenggunaanBahanBaku::Table, PenggunaanBahanBaku::KegiatanPengolahanId)
                            .to(KegiatanPengolahan::Table, KegiatanPengolahan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_penggunaan_bahan_baku_laporan")
                            .from(PenggunaanBahanBaku::Table, PenggunaanBahanBaku::LaporanBahanBakuId)
                            .to(LaporanBahanBaku::Table, LaporanBahanBaku::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PenggunaanBahanBaku::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PenggunaanBahanBaku {
    Table,
    Id,
    NamaBahan,
    JenisBahan,
    JumlahDigunakan,
    Satuan,
    BatchNumber,
    TanggalExpiry,
    KondisiBahan,
    SumberBahan,
    CatatanPenggunaan,
    KegiatanPengolahanId,
    LaporanBahanBakuId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum KegiatanPengolahan { Table, Id }

#[derive(DeriveIden)]
enum LaporanBahanBaku { Table, Id }
