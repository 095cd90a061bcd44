#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use uuid::Uuid;

use crate::actor::Actor;
use models::{kegiatan_pengolahan, menu_harian, organisasi, pemasok, sppg};

/// Fresh in-memory database with the full schema. One connection, so every
/// query sees the same memory store.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn operator() -> Actor {
    Actor::new(Uuid::new_v4())
}

pub async fn seed_organisasi(db: &DatabaseConnection, nama: &str) -> anyhow::Result<organisasi::Model> {
    let input = organisasi::CreateOrganisasi::parse(&json!({ "nama": nama }))?;
    Ok(input.into_active_model(Uuid::nil()).insert(db).await?)
}

pub async fn seed_sppg(db: &DatabaseConnection, organisasi_id: Uuid, nama: &str) -> anyhow::Result<sppg::Model> {
    let input = sppg::CreateSppg::parse(&json!({
        "nama": nama,
        "alamat": "Jl. Merdeka 1",
        "kapasitasProduksi": 300,
        "latitude": -6.48,
        "longitude": 106.84,
        "organisasiId": organisasi_id.to_string(),
    }))?;
    Ok(input.into_active_model(Uuid::nil()).insert(db).await?)
}

pub async fn seed_pemasok(db: &DatabaseConnection, nama: &str) -> anyhow::Result<pemasok::Model> {
    let input = pemasok::CreatePemasok::parse(&json!({
        "nama": nama,
        "alamat": "Pasar Induk",
        "jenisPemasok": "SAYURAN",
    }))?;
    Ok(input.into_active_model(Uuid::nil()).insert(db).await?)
}

pub async fn seed_menu(db: &DatabaseConnection, sppg_id: Uuid, tanggal: &str) -> anyhow::Result<menu_harian::Model> {
    let input = menu_harian::CreateMenuHarian::parse(&json!({
        "tanggal": tanggal,
        "namaMenu": "Nasi Sayur",
        "porsiTarget": 100,
    }))?;
    Ok(input.into_active_model(sppg_id, Uuid::nil()).insert(db).await?)
}

pub async fn seed_kegiatan(db: &DatabaseConnection, sppg_id: Uuid, menu_id: Uuid) -> anyhow::Result<kegiatan_pengolahan::Model> {
    let input = kegiatan_pengolahan::CreateKegiatanPengolahan::parse(&json!({
        "tanggalPengolahan": "2024-03-01",
        "jamMulai": "2024-03-01T06:00:00+07:00",
        "jenisPengolahan": "MAKAN_SIANG",
        "targetPorsi": 100,
        "metodePengolahan": "Rebus",
        "penanggungJawab": "Bu Sri",
        "sppgId": sppg_id.to_string(),
        "menuHarianId": menu_id.to_string(),
    }))?;
    Ok(input.into_active_model(Uuid::nil()).insert(db).await?)
}
