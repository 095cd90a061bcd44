//! Create `kontrol_mutu_pengolahan` table.
//! Quality checks recorded during a cooking session.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KontrolMutuPengolahan::Table)
                    .if_not_exists()
                    .col(uuid(KontrolMutuPengolahan::Id).primary_key())
                    .col(timestamp_with_time_zone(KontrolMutuPengolahan::WaktuKontrol))
                    .col(string_len(KontrolMutuPengolahan::TahapPengolahan, 32))
                    .col(double_null(KontrolMutuPengolahan::Suhu))
                    .col(string_len_null(KontrolMutuPengolahan::Tekstur, 255))
                    .col(string_len_null(KontrolMutuPengolahan::Warna, 255))
                    .col(string_len_null(KontrolMutuPengolahan::Aroma, 255))
                    .col(string_len_null(KontrolMutuPengolahan::Rasa, 255))
                    .col(boolean(KontrolMutuPengolahan::KebersihanAlat))
                    .col(boolean(KontrolMutuPengolahan::HigienePetugas))
                    .col(string_len(KontrolMutuPengolahan::StatusMutu, 32))
                    .col(text_null(KontrolMutuPengolahan::TindakanKoreksi))
                    .col(json(KontrolMutuPengolahan::FotoEvidence))
                    .col(string_len(KontrolMutuPengolahan::PetugasKontrol, 255))
                    .col(uuid(KontrolMutuPengolahan::KegiatanPengolahanId))
                    .col(uuid(KontrolMutuPengolahan::CreatedBy))
                    .col(timestamp_with_time_zone(KontrolMutuPengolahan::CreatedAt))
                    .col(uuid_null(KontrolMutuPengolahan::UpdatedBy))
                    .col(timestamp_with_time_zone_null(KontrolMutuPengolahan::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kontrol_mutu_pengolahan_kegiatan")
                            .from(KontrolMutuPengolahan::Table, KontrolMutuPengolahan::KegiatanPengolahanId)
                            .to(KegiatanPengolahan::Table, KegiatanPengolahan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(KontrolMutuPengolahan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum KontrolMutuPengolahan {
    Table,
    Id,
    WaktuKontrol,
    TahapPengolahan,
    Suhu,
    Tekstur,
    Warna,
    Aroma,
    Rasa,
    KebersihanAlat,
    HigienePetugas,
    StatusMutu,
    TindakanKoreksi,
    FotoEvidence,
    PetugasKontrol,
    KegiatanPengolahanId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum KegiatanPengolahan { Table, Id }
