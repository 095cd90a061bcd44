//! Create `menu_harian` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuHarian::Table)
                    .if_not_exists()
                    .col(uuid(MenuHarian::Id).primary_key())
                    .col(date(MenuHarian::Tanggal))
                    .col(string_len(MenuHarian::NamaMenu, 255))
                    .col(text_null(MenuHarian::Deskripsi))
                    .col(integer(MenuHarian::PorsiTarget))
                    .col(double_null(MenuHarian::KaloriPerPorsi))
                    .col(double_null(MenuHarian::ProteinPerPorsi))
                    .col(double_null(MenuHarian::KarbohidratPerPorsi))
                    .col(double_null(MenuHarian::LemakPerPorsi))
                    .col(string_len(MenuHarian::StatusAkg, 32).default("BELUM_DIEVALUASI"))
                    .col(text_null(MenuHarian::CatatanGizi))
                    .col(double_null(MenuHarian::BiayaPerPorsi))
                    .col(json(MenuHarian::FotoMenu))
                    .col(uuid(MenuHarian::SppgId))
                    .col(uuid(MenuHarian::CreatedBy))
                    .col(timestamp_with_time_zone(MenuHarian::CreatedAt))
                    .col(uuid_null(MenuHarian::UpdatedBy))
                    .col(timestamp_with_time_zone_null(MenuHarian::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_harian_sppg")
                            .from(MenuHarian::Table, MenuHarian::SppgId)
                            .to(Sppg::Table, Sppg::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuHarian::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuHarian {
    Table,
    Id,
    Tanggal,
    NamaMenu,
    Deskripsi,
    PorsiTarget,
    KaloriPerPorsi,
    ProteinPerPorsi,
    KarbohidratPerPorsi,
    LemakPerPorsi,
    StatusAkg,
    CatatanGizi,
    BiayaPerPorsi,
    FotoMenu,
    SppgId,
    CreatedBy,
    CreatedAt,
    UpdatedBy,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sppg { Table, Id }
