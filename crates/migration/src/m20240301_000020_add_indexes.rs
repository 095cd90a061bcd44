use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sppg: lookups by organization and by verification status
        manager
            .create_index(
                Index::create()
                    .name("idx_sppg_organisasi")
                    .table(Sppg::Table)
                    .col(Sppg::OrganisasiId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_sppg_status_verifikasi")
                    .table(Sppg::Table)
                    .col(Sppg::StatusVerifikasi)
                    .to_owned(),
            )
            .await?;

        // Date-ordered lists scoped by SPPG
        for (name, table) in [
            ("idx_menu_harian_sppg_tanggal", DatedTable::MenuHarian),
            ("idx_laporan_bahan_baku_sppg_tanggal", DatedTable::LaporanBahanBaku),
            ("idx_checklist_harian_sppg_tanggal", DatedTable::ChecklistHarian),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(DatedTable::SppgId)
                        .col(DatedTable::Tanggal)
                        .to_owned(),
                )
                .await?;
        }

        // KomponenMenu: components of one menu
        manager
            .create_index(
                Index::create()
                    .name("idx_komponen_menu_menu_harian")
                    .table(KomponenMenu::Table)
                    .col(KomponenMenu::MenuHarianId)
                    .to_owned(),
            )
            .await?;

        // Peringatan: dedupe lookup for generated alerts
        manager
            .create_index(
                Index::create()
                    .name("idx_peringatan_entity_jenis")
                    .table(Peringatan::Table)
                    .col(Peringatan::EntityType)
                    .col(Peringatan::EntityId)
                    .col(Peringatan::JenisPeringatan)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_peringatan_status")
                    .table(Peringatan::Table)
                    .col(Peringatan::StatusPeringatan)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_peringatan_status", Peringatan::Table.into_iden()),
            ("idx_peringatan_entity_jenis", Peringatan::Table.into_iden()),
            ("idx_komponen_menu_menu_harian", KomponenMenu::Table.into_iden()),
            ("idx_checklist_harian_sppg_tanggal", DatedTable::ChecklistHarian.into_iden()),
            ("idx_laporan_bahan_baku_sppg_tanggal", DatedTable::LaporanBahanBaku.into_iden()),
            ("idx_menu_harian_sppg_tanggal", DatedTable::MenuHarian.into_iden()),
            ("idx_sppg_status_verifikasi", Sppg::Table.into_iden()),
            ("idx_sppg_organisasi", Sppg::Table.into_iden()),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sppg { Table, OrganisasiId, StatusVerifikasi }

#[derive(DeriveIden, Clone, Copy)]
enum DatedTable {
    #[sea_orm(iden = "menu_harian")]
    MenuHarian,
    #[sea_orm(iden = "laporan_bahan_baku")]
    LaporanBahanBaku,
    #[sea_orm(iden = "checklist_harian")]
    ChecklistHarian,
    SppgId,
    Tanggal,
}

#[derive(DeriveIden)]
enum KomponenMenu { Table, MenuHarianId }

#[derive(DeriveIden)]
enum Peringatan { Table, EntityType, EntityId, JenisPeringatan, StatusPeringatan }
