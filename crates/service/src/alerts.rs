//! Automatic alert generation.
//!
//! Runs three independent rules against the current state of the store and
//! inserts one `AKTIF` alert per finding, unless an open alert already points
//! at the same entity for the same rule.

use std::collections::HashSet;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use common::metrics::ALERTS_GENERATED_TOTAL;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, TransactionTrait};
use tracing::{info, instrument};
use uuid::Uuid;

use models::enums::{JenisPeringatan, StatusDokumen, StatusPeringatan, StatusVerifikasi, TingkatPrioritas};
use models::peringatan::{self, CreatePeringatan};
use models::{checklist_harian, dokumen_sppg, laporan_bahan_baku, sppg};

use crate::actor::SYSTEM_ACTOR;
use crate::errors::ServiceError;
use crate::services::notifikasi_peringatan;

pub const ENTITY_SPPG: &str = "sppg";
pub const ENTITY_DOKUMEN: &str = "dokumen";
pub const ENTITY_BAHAN_BAKU: &str = "bahan_baku";

const DOKUMEN_WINDOW_DAYS: i64 = 7;
const BAHAN_WINDOW_DAYS: i64 = 3;
const REPORT_DEADLINE_HOURS: i64 = 8;

type AlertKey = (String, Uuid, JenisPeringatan);

fn tanggal(d: NaiveDate) -> String {
    d.format("%-d/%-m/%Y").to_string()
}

fn start_of(d: NaiveDate) -> DateTime<FixedOffset> {
    d.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

/// Keys of alerts that are still open and tied to an entity.
async fn open_alert_keys(db: &DatabaseConnection) -> Result<HashSet<AlertKey>, ServiceError> {
    let rows: Vec<(Option<String>, Option<Uuid>, JenisPeringatan)> = peringatan::Entity::find()
        .select_only()
        .column(peringatan::Column::EntityType)
        .column(peringatan::Column::EntityId)
        .column(peringatan::Column::JenisPeringatan)
        .filter(peringatan::Column::StatusPeringatan.is_in(StatusPeringatan::OPEN))
        .filter(peringatan::Column::EntityId.is_not_null())
        .into_tuple()
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(t, id, jenis)| Some((t?, id?, jenis)))
        .collect())
}

/// Approved units with no checklist dated yesterday or later.
async fn silent_sppg(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<Vec<CreatePeringatan>, ServiceError> {
    let yesterday = (now - Duration::days(1)).date_naive();
    let reported: HashSet<Uuid> = checklist_harian::Entity::find()
        .select_only()
        .column(checklist_harian::Column::SppgId)
        .filter(checklist_harian::Column::Tanggal.gte(yesterday))
        .distinct()
        .into_tuple::<Uuid>()
        .all(db)
        .await?
        .into_iter()
        .collect();
    let approved = sppg::Entity::find()
        .filter(sppg::Column::StatusVerifikasi.eq(StatusVerifikasi::Approved))
        .all(db)
        .await?;

    let deadline = (now + Duration::hours(REPORT_DEADLINE_HOURS)).fixed_offset();
    Ok(approved
        .into_iter()
        .filter(|s| !reported.contains(&s.id))
        .map(|s| CreatePeringatan {
            judul: format!("SPPG {} belum melaporkan aktivitas", s.nama),
            deskripsi: format!(
                "SPPG {} belum submit checklist harian lebih dari 24 jam. Segera lakukan follow-up.",
                s.nama
            ),
            jenis_peringatan: JenisPeringatan::KepatuhanOperasional,
            tingkat_prioritas: TingkatPrioritas::Tinggi,
            status_peringatan: StatusPeringatan::Aktif,
            entity_type: Some(ENTITY_SPPG.into()),
            entity_id: Some(s.id),
            sppg_id: Some(s.id),
            organisasi_id: Some(s.organisasi_id),
            batas_waktu_tindakan: Some(deadline),
            auto_resolve: true,
        })
        .collect())
}

/// Approved documents expiring within the next week.
async fn expiring_dokumen(db: &DatabaseConnection, today: NaiveDate) -> Result<Vec<CreatePeringatan>, ServiceError> {
    let rows = dokumen_sppg::Entity::find()
        .find_also_related(sppg::Entity)
        .filter(dokumen_sppg::Column::StatusDokumen.eq(StatusDokumen::Approved))
        .filter(dokumen_sppg::Column::TanggalExpiry.gte(today))
        .filter(dokumen_sppg::Column::TanggalExpiry.lte(today + Duration::days(DOKUMEN_WINDOW_DAYS)))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(doc, unit)| {
            let expiry = doc.tanggal_expiry?;
            let unit = unit?;
            Some(CreatePeringatan {
                judul: format!("Dokumen {} akan expired", doc.nama_dokumen),
                deskripsi: format!(
                    "Dokumen {} dari SPPG {} akan expired pada {}. Segera lakukan perpanjangan.",
                    doc.nama_dokumen,
                    unit.nama,
                    tanggal(expiry)
                ),
                jenis_peringatan: JenisPeringatan::DokumenKepatuhan,
                tingkat_prioritas: TingkatPrioritas::Sedang,
                status_peringatan: StatusPeringatan::Aktif,
                entity_type: Some(ENTITY_DOKUMEN.into()),
                entity_id: Some(doc.id),
                sppg_id: Some(doc.sppg_id),
                organisasi_id: Some(unit.organisasi_id),
                batas_waktu_tindakan: Some(start_of(expiry)),
                auto_resolve: false,
            })
        })
        .collect())
}

/// Received materials expiring within three days.
async fn expiring_bahan(db: &DatabaseConnection, today: NaiveDate) -> Result<Vec<CreatePeringatan>, ServiceError> {
    let rows = laporan_bahan_baku::Entity::find()
        .find_also_related(sppg::Entity)
        .filter(laporan_bahan_baku::Column::TanggalExpiry.gte(today))
        .filter(laporan_bahan_baku::Column::TanggalExpiry.lte(today + Duration::days(BAHAN_WINDOW_DAYS)))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(bahan, unit)| {
            let expiry = bahan.tanggal_expiry?;
            let unit = unit?;
            Some(CreatePeringatan {
                judul: format!("Bahan baku {} mendekati expired", bahan.nama_bahan),
                deskripsi: format!(
                    "Bahan baku {} di SPPG {} akan expired pada {}. Segera gunakan atau buang.",
                    bahan.nama_bahan,
                    unit.nama,
                    tanggal(expiry)
                ),
                jenis_peringatan: JenisPeringatan::KualitasBahan,
                tingkat_prioritas: TingkatPrioritas::Tinggi,
                status_peringatan: StatusPeringatan::Aktif,
                entity_type: Some(ENTITY_BAHAN_BAKU.into()),
                entity_id: Some(bahan.id),
                sppg_id: Some(bahan.sppg_id),
                organisasi_id: Some(unit.organisasi_id),
                batas_waktu_tindakan: Some(start_of(expiry)),
                auto_resolve: true,
            })
        })
        .collect())
}

/// Run every rule as of `now` and return how many alerts were created.
#[instrument(skip(db))]
pub async fn generate_automatic_alerts(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<u64, ServiceError> {
    let today = now.date_naive();
    let mut seen = open_alert_keys(db).await?;

    let mut candidates = silent_sppg(db, now).await?;
    candidates.extend(expiring_dokumen(db, today).await?);
    candidates.extend(expiring_bahan(db, today).await?);

    let fresh: Vec<peringatan::ActiveModel> = candidates
        .into_iter()
        .filter(|c| match (&c.entity_type, c.entity_id) {
            (Some(t), Some(id)) => seen.insert((t.clone(), id, c.jenis_peringatan)),
            _ => true,
        })
        .map(|c| c.into_active_model(SYSTEM_ACTOR.user_id))
        .collect();

    if fresh.is_empty() {
        info!("no new alerts");
        return Ok(0);
    }
    let created = fresh.len() as u64;
    let targets: Vec<(Uuid, Uuid)> = fresh
        .iter()
        .filter_map(|am| match (&am.id, &am.sppg_id) {
            (ActiveValue::Set(id), ActiveValue::Set(Some(unit))) => Some((*id, *unit)),
            _ => None,
        })
        .collect();
    let txn = db.begin().await?;
    peringatan::Entity::insert_many(fresh).exec_without_returning(&txn).await?;
    notifikasi_peringatan::notify_sppg_users(&txn, &targets, now).await?;
    txn.commit().await?;
    ALERTS_GENERATED_TOTAL.inc_by(created);
    info!(created, "automatic alerts generated");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{checklist_harian as checklist_svc, peringatan as peringatan_svc};
    use crate::test_support::{get_db, operator, seed_organisasi, seed_pemasok, seed_sppg};
    use models::checklist_harian::CreateChecklistHarian;
    use models::dokumen_sppg::CreateDokumenSppg;
    use models::laporan_bahan_baku::CreateLaporanBahanBaku;
    use models::peringatan::{FilterPeringatan, ResolvePeringatan};
    use models::sppg::VerifySppg;
    use sea_orm::{ActiveModelTrait, PaginatorTrait};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-10T09:00:00Z").unwrap().with_timezone(&Utc)
    }

    async fn approved_sppg(db: &DatabaseConnection, nama: &str) -> anyhow::Result<sppg::Model> {
        let org = seed_organisasi(db, &format!("Org {nama}")).await?;
        let unit = seed_sppg(db, org.id, nama).await?;
        let verdict = VerifySppg::parse(&json!({ "statusVerifikasi": "APPROVED" }))?;
        Ok(verdict.apply(unit, Uuid::nil()).update(db).await?)
    }

    async fn checklist_on(db: &DatabaseConnection, sppg_id: Uuid, tanggal: &str) -> anyhow::Result<()> {
        let input = CreateChecklistHarian::parse(&json!({
            "tanggal": tanggal,
            "kebersihanSdm": true,
            "kebersihanInfrastruktur": true,
            "kondisiPeralatan": true,
            "fotoEvidence": ["/f.jpg"],
            "sppgId": sppg_id.to_string(),
        }))?;
        checklist_svc::create(db, &operator(), input).await?;
        Ok(())
    }

    #[tokio::test]
    async fn silent_units_are_flagged_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let diam = approved_sppg(&db, "Diam").await?;
        let rajin = approved_sppg(&db, "Rajin").await?;
        checklist_on(&db, rajin.id, "2024-03-09").await?;
        checklist_on(&db, diam.id, "2024-03-07").await?;
        let org = seed_organisasi(&db, "Draft Org").await?;
        seed_sppg(&db, org.id, "Belum Disetujui").await?;

        assert_eq!(generate_automatic_alerts(&db, now()).await?, 1);
        let alerts = peringatan::Entity::find().all(&db).await?;
        assert_eq!(alerts.len(), 1);
        let a = &alerts[0];
        assert_eq!(a.judul, "SPPG Diam belum melaporkan aktivitas");
        assert_eq!(a.entity_type.as_deref(), Some(ENTITY_SPPG));
        assert_eq!(a.entity_id, Some(diam.id));
        assert_eq!(a.organisasi_id, Some(diam.organisasi_id));
        assert_eq!(a.tingkat_prioritas, TingkatPrioritas::Tinggi);
        assert!(a.auto_resolve);
        assert_eq!(a.created_by, Uuid::nil());
        assert_eq!(
            a.batas_waktu_tindakan.map(|d| d.with_timezone(&Utc)),
            Some(now() + Duration::hours(8))
        );

        assert_eq!(generate_automatic_alerts(&db, now()).await?, 0);
        assert_eq!(peringatan::Entity::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn resolved_alert_allows_a_new_one() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        approved_sppg(&db, "Diam").await?;
        generate_automatic_alerts(&db, now()).await?;
        let first = peringatan::Entity::find().one(&db).await?.expect("generated");
        peringatan_svc::resolve(&db, &operator(), first.id, ResolvePeringatan::default()).await?;

        assert_eq!(generate_automatic_alerts(&db, now()).await?, 1);
        let open = peringatan_svc::list(&db, &FilterPeringatan::default()).await?;
        assert_eq!(open.total_count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn expiring_documents_and_materials() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let unit = approved_sppg(&db, "Dapur").await?;
        checklist_on(&db, unit.id, "2024-03-10").await?;
        let reviewer = operator();

        for (nama, expiry, approve) in [
            ("SLHS", "2024-03-15", true),
            ("Halal", "2024-03-25", true),
            ("Denah", "2024-03-12", false),
        ] {
            let input = CreateDokumenSppg::parse(&json!({
                "jenisDokumen": "LAINNYA",
                "namaDokumen": nama,
                "tanggalTerbit": "2023-03-01",
                "tanggalExpiry": expiry,
                "filePath": format!("/{nama}.pdf"),
                "sppgId": unit.id.to_string(),
            }))?;
            let doc = crate::services::dokumen_sppg::create(&db, &reviewer, input).await?;
            if approve {
                let verdict = models::dokumen_sppg::ReviewDokumen::parse(&json!({
                    "statusDokumen": "APPROVED",
                    "catatanReview": "ok",
                }))?;
                crate::services::dokumen_sppg::review(&db, &reviewer, doc.id, verdict).await?;
            }
        }

        let supplier = seed_pemasok(&db, "Tani").await?;
        for (nama, expiry) in [("Susu", "2024-03-12"), ("Beras", "2024-04-30"), ("Tahu", "2024-03-09")] {
            let input = CreateLaporanBahanBaku::parse(&json!({
                "tanggal": "2024-03-08",
                "namaBahan": nama,
                "jenisBahan": "LAINNYA",
                "jumlah": 1,
                "satuan": "kg",
                "kondisiBahan": "BAIK",
                "tanggalExpiry": expiry,
                "pemasokId": supplier.id.to_string(),
                "sppgId": unit.id.to_string(),
            }))?;
            crate::services::laporan_bahan_baku::create(&db, &reviewer, input).await?;
        }

        assert_eq!(generate_automatic_alerts(&db, now()).await?, 2);
        let mut titles: Vec<String> = peringatan::Entity::find().all(&db).await?.into_iter().map(|a| a.judul).collect();
        titles.sort();
        assert_eq!(
            titles,
            vec!["Bahan baku Susu mendekati expired".to_string(), "Dokumen SLHS akan expired".to_string()]
        );

        let doc_alert = peringatan::Entity::find()
            .filter(peringatan::Column::EntityType.eq(ENTITY_DOKUMEN))
            .one(&db)
            .await?
            .expect("document alert");
        assert_eq!(
            doc_alert.deskripsi,
            "Dokumen SLHS dari SPPG Dapur akan expired pada 15/3/2024. Segera lakukan perpanjangan."
        );
        assert_eq!(doc_alert.tingkat_prioritas, TingkatPrioritas::Sedang);
        assert!(!doc_alert.auto_resolve);
        assert_eq!(
            doc_alert.batas_waktu_tindakan.map(|d| d.with_timezone(&Utc)),
            Some(start_of(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).with_timezone(&Utc))
        );
        Ok(())
    }

    #[tokio::test]
    async fn generated_alerts_notify_unit_accounts() -> Result<(), anyhow::Error> {
        use crate::actor::Actor;
        use crate::services::notifikasi_peringatan as notifikasi_svc;
        use models::notifikasi_peringatan::FilterNotifikasi;
        use models::pengguna;

        let db = get_db().await?;
        let diam = approved_sppg(&db, "Diam").await?;
        let user = pengguna::create(&db, "op@diam.id", "Operator", "x".into(), "argon2", Some(diam.id)).await?;
        let outsider = pengguna::create(&db, "lain@dinkes.id", "Pengawas", "x".into(), "argon2", None).await?;

        assert_eq!(generate_automatic_alerts(&db, now()).await?, 1);
        let inbox = notifikasi_svc::list_for_user(&db, &Actor::new(user.id).with_sppg(diam.id), &FilterNotifikasi::default()).await?;
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].peringatan.as_ref().map(|p| p.entity_id), Some(Some(diam.id)));
        assert_eq!(inbox[0].notifikasi.created_at.with_timezone(&Utc), now());
        assert!(notifikasi_svc::list_for_user(&db, &Actor::new(outsider.id), &FilterNotifikasi::default()).await?.is_empty());
        Ok(())
    }
}
