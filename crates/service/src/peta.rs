//! Public map feed of SPPG locations.

use sea_orm::DatabaseConnection;
use serde::Serialize;
use uuid::Uuid;

use models::enums::StatusVerifikasi;

use crate::errors::ServiceError;
use crate::services::sppg::{self, SppgWithOrganisasi};

const NOT_AVAILABLE: &str = "N/A";
const NO_ADDRESS: &str = "Alamat tidak tersedia";
const COUNTRY: &str = "Indonesia";

/// Status shown on the public map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusPeta {
    Aktif,
    Pending,
    TidakAktif,
}

impl From<StatusVerifikasi> for StatusPeta {
    fn from(s: StatusVerifikasi) -> Self {
        match s {
            StatusVerifikasi::Approved => Self::Aktif,
            StatusVerifikasi::UnderReview => Self::Pending,
            _ => Self::TidakAktif,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SppgLokasi {
    pub id: Uuid,
    pub nama: String,
    pub alamat: String,
    pub kecamatan: String,
    pub kabupaten: String,
    pub provinsi: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StatusPeta,
}

impl SppgLokasi {
    /// `None` when the unit lacks a coordinate.
    pub fn from_row(row: SppgWithOrganisasi) -> Option<Self> {
        let SppgWithOrganisasi { sppg, organisasi } = row;
        let alamat = if sppg.alamat.trim().is_empty() { NO_ADDRESS.to_string() } else { sppg.alamat };
        Some(Self {
            id: sppg.id,
            nama: sppg.nama,
            alamat,
            kecamatan: NOT_AVAILABLE.into(),
            kabupaten: organisasi.map_or_else(|| NOT_AVAILABLE.into(), |o| o.nama),
            provinsi: COUNTRY.into(),
            latitude: sppg.latitude?,
            longitude: sppg.longitude?,
            status: sppg.status_verifikasi.into(),
        })
    }
}

pub async fn list_lokasi(db: &DatabaseConnection) -> Result<Vec<SppgLokasi>, ServiceError> {
    Ok(sppg::list_for_map(db)
        .await?
        .into_iter()
        .filter_map(SppgLokasi::from_row)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_organisasi, seed_sppg};

    #[test]
    fn status_mapping() {
        assert_eq!(StatusPeta::from(StatusVerifikasi::Approved), StatusPeta::Aktif);
        assert_eq!(StatusPeta::from(StatusVerifikasi::UnderReview), StatusPeta::Pending);
        assert_eq!(StatusPeta::from(StatusVerifikasi::Draft), StatusPeta::TidakAktif);
        assert_eq!(StatusPeta::from(StatusVerifikasi::Suspended), StatusPeta::TidakAktif);
        assert_eq!(serde_json::to_value(StatusPeta::TidakAktif).unwrap(), "TIDAK_AKTIF");
    }

    #[tokio::test]
    async fn feed_uses_organisasi_as_kabupaten() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Kab. Bogor").await?;
        let unit = seed_sppg(&db, org.id, "SPPG Cibinong").await?;

        let feed = list_lokasi(&db).await?;
        assert_eq!(feed.len(), 1);
        let item = &feed[0];
        assert_eq!(item.id, unit.id);
        assert_eq!(item.kabupaten, "Kab. Bogor");
        assert_eq!(item.kecamatan, "N/A");
        assert_eq!(item.provinsi, "Indonesia");
        assert_eq!(item.status, StatusPeta::TidakAktif);
        assert_eq!(item.latitude, -6.48);
        Ok(())
    }
}
