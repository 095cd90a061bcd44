//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_organisasi;
mod m20240301_000002_create_sppg;
mod m20240301_000003_create_pemasok;
mod m20240301_000004_create_menu_harian;
mod m20240301_000005_create_komponen_menu;
mod m20240301_000006_create_kegiatan_pengolahan;
mod m20240301_000007_create_laporan_bahan_baku;
mod m20240301_000008_create_dokumen_sppg;
mod m20240301_000009_create_checklist_harian;
mod m20240301_000010_create_peringatan;
mod m20240301_000011_create_pengguna;
mod m20240301_000012_create_standar_akg;
mod m20240301_000013_create_kontrol_mutu_pengolahan;
mod m20240301_000014_create_penggunaan_bahan_baku;
mod m20240301_000015_create_notifikasi_peringatan;
mod m20240301_000020_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_organisasi::Migration),
            Box::new(m20240301_000002_create_sppg::Migration),
            Box::new(m20240301_000003_create_pemasok::Migration),
            Box::new(m20240301_000004_create_menu_harian::Migration),
            Box::new(m20240301_000005_create_komponen_menu::Migration),
            Box::new(m20240301_000006_create_kegiatan_pengolahan::Migration),
            Box::new(m20240301_000007_create_laporan_bahan_baku::Migration),
            Box::new(m20240301_000008_create_dokumen_sppg::Migration),
            Box::new(m20240301_000009_create_checklist_harian::Migration),
            Box::new(m20240301_000010_create_peringatan::Migration),
            Box::new(m20240301_000011_create_pengguna::Migration),
            Box::new(m20240301_000012_create_standar_akg::Migration),
            Box::new(m20240301_000013_create_kontrol_mutu_pengolahan::Migration),
            Box::new(m20240301_000014_create_penggunaan_bahan_baku::Migration),
            Box::new(m20240301_000015_create_notifikasi_peringatan::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000020_add_indexes::Migration),
        ]
    }
}
