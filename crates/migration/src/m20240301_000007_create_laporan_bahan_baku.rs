//! Create `laporan_bahan_baku` table.
//! Raw-material receipts per SPPG and supplier.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LaporanBahanBaku::Table)
                    .if_not_exists()
                    .col(uuid(LaporanBahanBaku::Id).primary_key())
                    .col(date(LaporanBahanBaku::Tanggal))
                    .col(string_len(LaporanBahanBaku::NamaBahan, 255))
                    .col(string_len(LaporanBahanBaku::JenisBahan, 32))
                    .col(double(LaporanBahanBaku::Jumlah))
                    .col(string_len(LaporanBahanBaku::Satuan, 32))
                    .col(date_null(LaporanBahanBaku::TanggalExpiry))
                    .col(string_len(LaporanBahanBaku::KondisiBahan, 32))
                    .col(double_null(LaporanBahanBaku::SuhuPenerimaan))
                    .col(text_null(LaporanBahanBaku::Catatan))
                    .col(uuid(LaporanBahanBaku::SppgId))
                    .col(uuid(LaporanBahanBaku::PemasokId))
                    .col(uuid(LaporanBahanBaku::CreatedBy))
                    .col(timestamp_with_time_zone(LaporanBahanBaku::CreatedAt))
                    .col(uuid_null(LaporanBahanBaku::UpdatedBy))
                    .col(timestamp_with_time_zone_null(LaporanBahanBaku::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_laporan_bahan_baku_sppg")
                            .from(LaporanBahanBaku::Table, LaporanBahanBaku::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_laporan_bahan_baku_pemasok")
                            .from(LaporanBahanBaku::Table, LaporanBahanBaku::PemasokId)
                            .to(Pemasok::Table, Pemasok::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LaporanBahanBaku::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LaporanBahanBaku {
    Table,
    Id,
    Tanggal,
    NamaBahan,
    JenisBahan,
    Jumlah,
    Satuan,
    TanggalExpiry,
    KondisiBahan,
    SuhuPenerimaan,
    Catatan,
    SppgId,
    PemasokId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }

#[derive(DeriveIden)]
enum Pemasok { Table, Id }
