//! Read-only analytics behind the dashboard pages.
//!
//! Every figure is computed relative to `now`; "recent" means the calendar
//! month before today. Percentages are rounded to two decimals and are 0 when
//! there is nothing to divide by.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate, NaiveTime, Utc};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use models::enums::{
    JenisBahan, JenisPemasok, KondisiBahan, StatusAkg, StatusAktif, StatusChecklist, StatusMutu, StatusVerifikasi,
};
use models::{
    checklist_harian, dokumen_sppg, kegiatan_pengolahan, kontrol_mutu_pengolahan, laporan_bahan_baku, menu_harian,
    organisasi, pemasok, penggunaan_bahan_baku, sppg, standar_akg,
};

use super::sppg::list_for_map;
use crate::errors::ServiceError;

const TOP_ORGANISASI: u64 = 5;
const STOCK_WINDOW_DAYS: i64 = 7;

/// Chart order and colour of each verification status.
const VERIFICATION_COLORS: [(StatusVerifikasi, &str); 5] = [
    (StatusVerifikasi::Draft, "#94a3b8"),
    (StatusVerifikasi::UnderReview, "#fbbf24"),
    (StatusVerifikasi::Approved, "#10b981"),
    (StatusVerifikasi::Rejected, "#ef4444"),
    (StatusVerifikasi::Suspended, "#f97316"),
];

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_sppg: u64,
    pub verified_sppg: u64,
    pub verification_rate: f64,
    pub sppg_growth: f64,
    pub today_menus: u64,
    pub target_portions: i64,
    pub nutrition_compliance: f64,
    pub checklist_compliance: f64,
    pub pending_checklists: u64,
    pub processing_trend: Vec<ProcessingPoint>,
    pub verification_status: Vec<StatusSlice>,
    pub organization_stats: Vec<OrganisasiSummary>,
    pub alerts: OverviewAlerts,
    pub performance: Performance,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingPoint {
    pub date: NaiveDate,
    pub activities: i64,
    pub portions: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: StatusVerifikasi,
    pub count: i64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisasiSummary {
    pub id: Uuid,
    pub nama: String,
    pub status: StatusAktif,
    pub sppg_count: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewAlerts {
    pub expired_documents: u64,
    pub overdue_checklists: u64,
    pub low_nutrition: u64,
    pub low_stock: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub data_completion: f64,
    pub quality_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalAnalytics {
    pub processing_activities: Vec<ProcessingActivity>,
    pub quality_metrics: Vec<StatusCount<StatusMutu>>,
    pub checklist_trend: Vec<ChecklistPoint>,
}

/// A session of today with its menu, its unit and how much was logged on it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingActivity {
    #[serde(flatten)]
    pub kegiatan: kegiatan_pengolahan::Model,
    pub nama_menu: Option<String>,
    pub nama_sppg: Option<String>,
    pub penggunaan_count: i64,
    pub kontrol_mutu_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount<S> {
    pub status: S,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistPoint {
    pub date: NaiveDate,
    pub status: StatusChecklist,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalytics {
    pub akg_compliance: Vec<AkgCompliance>,
    pub nutrition_trend: Vec<NutritionPoint>,
    pub standard_akg: Vec<standar_akg::Model>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkgCompliance {
    pub status: StatusAkg,
    pub count: i64,
    pub avg_kalori: Option<f64>,
    pub avg_protein: Option<f64>,
    pub avg_karbohidrat: Option<f64>,
    pub avg_lemak: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPoint {
    pub date: NaiveDate,
    pub nama_menu: String,
    pub kalori: Option<f64>,
    pub protein: Option<f64>,
    pub karbohidrat: Option<f64>,
    pub lemak: Option<f64>,
    pub status_akg: StatusAkg,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainAnalytics {
    pub supplier_performance: Vec<SupplierPerformance>,
    pub inventory_status: Vec<InventoryBucket>,
    pub usage_trend: Vec<UsageTotal>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPerformance {
    pub id: Uuid,
    pub nama: String,
    pub jenis_pemasok: JenisPemasok,
    pub status_aktif: StatusAktif,
    pub total_reports: i64,
    pub recent_reports: i64,
    pub recent_quantity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryBucket {
    pub jenis_bahan: JenisBahan,
    pub kondisi_bahan: KondisiBahan,
    pub total_jumlah: f64,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTotal {
    pub nama_bahan: String,
    pub total_digunakan: f64,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicAnalytics {
    pub sppg_distribution: Vec<SppgLocation>,
    pub regional_stats: Vec<RegionalStats>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SppgLocation {
    pub id: Uuid,
    pub nama: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status_verifikasi: StatusVerifikasi,
    pub kapasitas_produksi: i32,
    pub organisasi: Option<String>,
    pub menu_count: i64,
    pub checklist_count: i64,
    pub kegiatan_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalStats {
    pub id: Uuid,
    pub nama: String,
    pub sppg_count: i64,
    pub total_kapasitas: i64,
    pub verification: HashMap<StatusVerifikasi, i64>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

/// Change of the current total against the units registered last month.
fn growth(total: u64, last_month: u64) -> f64 {
    if last_month == 0 {
        return 0.0;
    }
    round2((total as f64 - last_month as f64) / last_month as f64 * 100.0)
}

fn month_before(d: NaiveDate) -> NaiveDate {
    d.checked_sub_months(Months::new(1)).unwrap_or(d - Duration::days(30))
}

fn start_of(d: NaiveDate) -> DateTime<FixedOffset> {
    d.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

fn avg(col: menu_harian::Column) -> SimpleExpr {
    Func::avg(Expr::col((menu_harian::Entity, col))).into()
}

/// Row counts per value of a uuid column, optionally only for `within`.
async fn tally<E: EntityTrait>(
    db: &DatabaseConnection,
    key: E::Column,
    within: Option<&[Uuid]>,
) -> Result<HashMap<Uuid, i64>, ServiceError> {
    let mut q = E::find()
        .select_only()
        .column(key)
        .column_as(key.count(), "jumlah")
        .group_by(key);
    if let Some(ids) = within {
        q = q.filter(key.is_in(ids.iter().copied()));
    }
    let rows: Vec<(Uuid, i64)> = q.into_tuple().all(db).await?;
    Ok(rows.into_iter().collect())
}

/// Headline counters, today's compliance rates and the processing trend.
#[instrument(skip(db))]
pub async fn overview(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<DashboardOverview, ServiceError> {
    let today = now.date_naive();
    let month_ago = month_before(today);
    let this_month = today.with_day(1).unwrap_or(today);
    let last_month = month_before(this_month);

    let total_sppg = sppg::Entity::find().count(db).await?;
    let verified_sppg = sppg::Entity::find()
        .filter(sppg::Column::StatusVerifikasi.eq(StatusVerifikasi::Approved))
        .count(db)
        .await?;
    let registered_last_month = sppg::Entity::find()
        .filter(sppg::Column::CreatedAt.gte(start_of(last_month)))
        .filter(sppg::Column::CreatedAt.lt(start_of(this_month)))
        .count(db)
        .await?;

    let menus_today = || menu_harian::Entity::find().filter(menu_harian::Column::Tanggal.eq(today));
    let today_menus = menus_today().count(db).await?;
    let compliant_menus = menus_today()
        .filter(menu_harian::Column::StatusAkg.eq(StatusAkg::Memenuhi))
        .count(db)
        .await?;
    let target_portions: Option<i64> = menus_today()
        .select_only()
        .column_as(menu_harian::Column::PorsiTarget.sum(), "jumlah")
        .into_tuple::<Option<i64>>()
        .one(db)
        .await?
        .flatten();

    let checklists_today = checklist_harian::Entity::find()
        .filter(checklist_harian::Column::Tanggal.eq(today))
        .count(db)
        .await?;
    let reviewed_today = checklist_harian::Entity::find()
        .filter(checklist_harian::Column::Tanggal.eq(today))
        .filter(checklist_harian::Column::Status.eq(StatusChecklist::Reviewed))
        .count(db)
        .await?;
    let pending_checklists = checklist_harian::Entity::find()
        .filter(checklist_harian::Column::Tanggal.lt(today))
        .filter(checklist_harian::Column::Status.is_in([StatusChecklist::Draft, StatusChecklist::Submitted]))
        .count(db)
        .await?;

    let trend: Vec<(NaiveDate, i64, Option<i64>)> = kegiatan_pengolahan::Entity::find()
        .select_only()
        .column(kegiatan_pengolahan::Column::TanggalPengolahan)
        .column_as(kegiatan_pengolahan::Column::Id.count(), "jumlah")
        .column_as(kegiatan_pengolahan::Column::PorsiTerealisasi.sum(), "porsi")
        .filter(kegiatan_pengolahan::Column::TanggalPengolahan.gte(month_ago))
        .group_by(kegiatan_pengolahan::Column::TanggalPengolahan)
        .order_by_asc(kegiatan_pengolahan::Column::TanggalPengolahan)
        .into_tuple()
        .all(db)
        .await?;

    let per_status: HashMap<StatusVerifikasi, i64> = sppg::Entity::find()
        .select_only()
        .column(sppg::Column::StatusVerifikasi)
        .column_as(sppg::Column::Id.count(), "jumlah")
        .group_by(sppg::Column::StatusVerifikasi)
        .into_tuple::<(StatusVerifikasi, i64)>()
        .all(db)
        .await?
        .into_iter()
        .collect();

    let top = organisasi::Entity::find()
        .order_by_asc(organisasi::Column::Nama)
        .limit(TOP_ORGANISASI)
        .all(db)
        .await?;
    let top_ids: Vec<Uuid> = top.iter().map(|o| o.id).collect();
    let units = tally::<sppg::Entity>(db, sppg::Column::OrganisasiId, Some(&top_ids)).await?;

    let alerts = OverviewAlerts {
        expired_documents: dokumen_sppg::Entity::find()
            .filter(dokumen_sppg::Column::TanggalExpiry.lte(today))
            .count(db)
            .await?,
        overdue_checklists: pending_checklists,
        low_nutrition: menu_harian::Entity::find()
            .filter(menu_harian::Column::Tanggal.gte(this_month))
            .filter(menu_harian::Column::StatusAkg.is_in([StatusAkg::TidakMemenuhi, StatusAkg::BelumDievaluasi]))
            .count(db)
            .await?,
        low_stock: laporan_bahan_baku::Entity::find()
            .filter(laporan_bahan_baku::Column::TanggalExpiry.lte(today + Duration::days(STOCK_WINDOW_DAYS)))
            .count(db)
            .await?,
    };

    let verification_rate = percent(verified_sppg, total_sppg);
    let nutrition_compliance = percent(compliant_menus, today_menus);
    let checklist_compliance = percent(reviewed_today, checklists_today);
    let performance = Performance {
        data_completion: percent(
            verified_sppg + compliant_menus + reviewed_today,
            total_sppg + today_menus + checklists_today,
        ),
        quality_score: round2((verification_rate + nutrition_compliance + checklist_compliance) / 3.0).min(100.0),
    };

    Ok(DashboardOverview {
        total_sppg,
        verified_sppg,
        verification_rate,
        sppg_growth: growth(total_sppg, registered_last_month),
        today_menus,
        target_portions: target_portions.unwrap_or(0),
        nutrition_compliance,
        checklist_compliance,
        pending_checklists,
        processing_trend: trend
            .into_iter()
            .map(|(date, activities, portions)| ProcessingPoint { date, activities, portions: portions.unwrap_or(0) })
            .collect(),
        verification_status: VERIFICATION_COLORS
            .iter()
            .filter_map(|&(status, color)| {
                let count = *per_status.get(&status)?;
                Some(StatusSlice { status, count, color })
            })
            .collect(),
        organization_stats: top
            .into_iter()
            .map(|o| OrganisasiSummary { sppg_count: units.get(&o.id).copied().unwrap_or(0), id: o.id, nama: o.nama, status: o.status })
            .collect(),
        alerts,
        performance,
    })
}

/// Today's processing sessions, recent quality checks and checklist activity.
#[instrument(skip(db))]
pub async fn operational(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<OperationalAnalytics, ServiceError> {
    let today = now.date_naive();
    let month_ago = month_before(today);

    let sessions = kegiatan_pengolahan::Entity::find()
        .filter(kegiatan_pengolahan::Column::TanggalPengolahan.eq(today))
        .find_also_related(menu_harian::Entity)
        .order_by_desc(kegiatan_pengolahan::Column::JamMulai)
        .all(db)
        .await?;
    let ids: Vec<Uuid> = sessions.iter().map(|(k, _)| k.id).collect();
    let unit_ids: Vec<Uuid> = sessions.iter().map(|(k, _)| k.sppg_id).collect();
    let unit_names: HashMap<Uuid, String> = sppg::Entity::find()
        .select_only()
        .column(sppg::Column::Id)
        .column(sppg::Column::Nama)
        .filter(sppg::Column::Id.is_in(unit_ids))
        .into_tuple::<(Uuid, String)>()
        .all(db)
        .await?
        .into_iter()
        .collect();
    let usage =
        tally::<penggunaan_bahan_baku::Entity>(db, penggunaan_bahan_baku::Column::KegiatanPengolahanId, Some(&ids)).await?;
    let checks =
        tally::<kontrol_mutu_pengolahan::Entity>(db, kontrol_mutu_pengolahan::Column::KegiatanPengolahanId, Some(&ids))
            .await?;

    let quality: Vec<(StatusMutu, i64)> = kontrol_mutu_pengolahan::Entity::find()
        .select_only()
        .column(kontrol_mutu_pengolahan::Column::StatusMutu)
        .column_as(kontrol_mutu_pengolahan::Column::Id.count(), "jumlah")
        .filter(kontrol_mutu_pengolahan::Column::WaktuKontrol.gte(start_of(month_ago)))
        .group_by(kontrol_mutu_pengolahan::Column::StatusMutu)
        .order_by_asc(kontrol_mutu_pengolahan::Column::StatusMutu)
        .into_tuple()
        .all(db)
        .await?;

    let checklist_trend: Vec<(NaiveDate, StatusChecklist, i64)> = checklist_harian::Entity::find()
        .select_only()
        .column(checklist_harian::Column::Tanggal)
        .column(checklist_harian::Column::Status)
        .column_as(checklist_harian::Column::Id.count(), "jumlah")
        .filter(checklist_harian::Column::Tanggal.gte(month_ago))
        .group_by(checklist_harian::Column::Tanggal)
        .group_by(checklist_harian::Column::Status)
        .order_by_asc(checklist_harian::Column::Tanggal)
        .order_by_asc(checklist_harian::Column::Status)
        .into_tuple()
        .all(db)
        .await?;

    Ok(OperationalAnalytics {
        processing_activities: sessions
            .into_iter()
            .map(|(kegiatan, menu)| ProcessingActivity {
                nama_menu: menu.map(|m| m.nama_menu),
                nama_sppg: unit_names.get(&kegiatan.sppg_id).cloned(),
                penggunaan_count: usage.get(&kegiatan.id).copied().unwrap_or(0),
                kontrol_mutu_count: checks.get(&kegiatan.id).copied().unwrap_or(0),
                kegiatan,
            })
            .collect(),
        quality_metrics: quality.into_iter().map(|(status, count)| StatusCount { status, count }).collect(),
        checklist_trend: checklist_trend
            .into_iter()
            .map(|(date, status, count)| ChecklistPoint { date, status, count })
            .collect(),
    })
}

/// Menu grades with average nutrients, the recent menu trend and the active
/// standards.
#[instrument(skip(db))]
pub async fn nutrition(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<NutritionAnalytics, ServiceError> {
    use menu_harian::Column;

    let month_ago = month_before(now.date_naive());
    let graded: Vec<(StatusAkg, i64, Option<f64>, Option<f64>, Option<f64>, Option<f64>)> = menu_harian::Entity::find()
        .select_only()
        .column(Column::StatusAkg)
        .column_as(Column::Id.count(), "jumlah")
        .column_as(avg(Column::KaloriPerPorsi), "kalori")
        .column_as(avg(Column::ProteinPerPorsi), "protein")
        .column_as(avg(Column::KarbohidratPerPorsi), "karbohidrat")
        .column_as(avg(Column::LemakPerPorsi), "lemak")
        .group_by(Column::StatusAkg)
        .order_by_asc(Column::StatusAkg)
        .into_tuple()
        .all(db)
        .await?;

    let trend = menu_harian::Entity::find()
        .filter(Column::Tanggal.gte(month_ago))
        .order_by_asc(Column::Tanggal)
        .all(db)
        .await?;
    let standard_akg = standar_akg::Entity::find()
        .filter(standar_akg::Column::StatusAktif.eq(StatusAktif::Aktif))
        .order_by_asc(standar_akg::Column::KelompokUsia)
        .all(db)
        .await?;

    Ok(NutritionAnalytics {
        akg_compliance: graded
            .into_iter()
            .map(|(status, count, kalori, protein, karbohidrat, lemak)| AkgCompliance {
                status,
                count,
                avg_kalori: kalori.map(round2),
                avg_protein: protein.map(round2),
                avg_karbohidrat: karbohidrat.map(round2),
                avg_lemak: lemak.map(round2),
            })
            .collect(),
        nutrition_trend: trend
            .into_iter()
            .map(|m| NutritionPoint {
                date: m.tanggal,
                nama_menu: m.nama_menu,
                kalori: m.kalori_per_porsi,
                protein: m.protein_per_porsi,
                karbohidrat: m.karbohidrat_per_porsi,
                lemak: m.lemak_per_porsi,
                status_akg: m.status_akg,
            })
            .collect(),
        standard_akg,
    })
}

/// Supplier delivery volumes, recent stock by kind and condition, and the
/// materials used most.
#[instrument(skip(db))]
pub async fn supply_chain(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<SupplyChainAnalytics, ServiceError> {
    use laporan_bahan_baku::Column as Laporan;

    let month_ago = month_before(now.date_naive());
    let suppliers = pemasok::Entity::find().order_by_asc(pemasok::Column::Nama).all(db).await?;
    let totals = tally::<laporan_bahan_baku::Entity>(db, Laporan::PemasokId, None).await?;
    let recent: HashMap<Uuid, (i64, Option<f64>)> = laporan_bahan_baku::Entity::find()
        .select_only()
        .column(Laporan::PemasokId)
        .column_as(Laporan::Id.count(), "jumlah")
        .column_as(Laporan::Jumlah.sum(), "total")
        .filter(Laporan::Tanggal.gte(month_ago))
        .group_by(Laporan::PemasokId)
        .into_tuple::<(Uuid, i64, Option<f64>)>()
        .all(db)
        .await?
        .into_iter()
        .map(|(id, n, total)| (id, (n, total)))
        .collect();

    let inventory: Vec<(JenisBahan, KondisiBahan, Option<f64>, i64)> = laporan_bahan_baku::Entity::find()
        .select_only()
        .column(Laporan::JenisBahan)
        .column(Laporan::KondisiBahan)
        .column_as(Laporan::Jumlah.sum(), "total")
        .column_as(Laporan::Id.count(), "jumlah")
        .filter(Laporan::Tanggal.gte(month_ago))
        .group_by(Laporan::JenisBahan)
        .group_by(Laporan::KondisiBahan)
        .order_by_asc(Laporan::JenisBahan)
        .order_by_asc(Laporan::KondisiBahan)
        .into_tuple()
        .all(db)
        .await?;

    let usage: Vec<(String, Option<f64>, i64)> = penggunaan_bahan_baku::Entity::find()
        .select_only()
        .column(penggunaan_bahan_baku::Column::NamaBahan)
        .column_as(penggunaan_bahan_baku::Column::JumlahDigunakan.sum(), "total")
        .column_as(penggunaan_bahan_baku::Column::Id.count(), "jumlah")
        .filter(penggunaan_bahan_baku::Column::CreatedAt.gte(start_of(month_ago)))
        .group_by(penggunaan_bahan_baku::Column::NamaBahan)
        .into_tuple()
        .all(db)
        .await?;
    let mut usage_trend: Vec<UsageTotal> = usage
        .into_iter()
        .map(|(nama_bahan, total, count)| UsageTotal { nama_bahan, total_digunakan: total.unwrap_or(0.0), count })
        .collect();
    usage_trend.sort_by(|a, b| b.total_digunakan.total_cmp(&a.total_digunakan).then_with(|| a.nama_bahan.cmp(&b.nama_bahan)));

    Ok(SupplyChainAnalytics {
        supplier_performance: suppliers
            .into_iter()
            .map(|p| {
                let (recent_reports, recent_quantity) = recent.get(&p.id).copied().unwrap_or((0, None));
                SupplierPerformance {
                    total_reports: totals.get(&p.id).copied().unwrap_or(0),
                    recent_reports,
                    recent_quantity: recent_quantity.unwrap_or(0.0),
                    id: p.id,
                    nama: p.nama,
                    jenis_pemasok: p.jenis_pemasok,
                    status_aktif: p.status_aktif,
                }
            })
            .collect(),
        inventory_status: inventory
            .into_iter()
            .map(|(jenis_bahan, kondisi_bahan, total, count)| InventoryBucket {
                jenis_bahan,
                kondisi_bahan,
                total_jumlah: total.unwrap_or(0.0),
                count,
            })
            .collect(),
        usage_trend,
    })
}

/// Mapped units with their activity counts, and per-organization totals.
#[instrument(skip(db))]
pub async fn geographic(db: &DatabaseConnection) -> Result<GeographicAnalytics, ServiceError> {
    let mapped = list_for_map(db).await?;
    let menus = tally::<menu_harian::Entity>(db, menu_harian::Column::SppgId, None).await?;
    let checklists = tally::<checklist_harian::Entity>(db, checklist_harian::Column::SppgId, None).await?;
    let sessions = tally::<kegiatan_pengolahan::Entity>(db, kegiatan_pengolahan::Column::SppgId, None).await?;

    let sppg_distribution = mapped
        .into_iter()
        .filter_map(|row| {
            let s = row.sppg;
            Some(SppgLocation {
                latitude: s.latitude?,
                longitude: s.longitude?,
                menu_count: menus.get(&s.id).copied().unwrap_or(0),
                checklist_count: checklists.get(&s.id).copied().unwrap_or(0),
                kegiatan_count: sessions.get(&s.id).copied().unwrap_or(0),
                organisasi: row.organisasi.map(|o| o.nama),
                id: s.id,
                nama: s.nama,
                status_verifikasi: s.status_verifikasi,
                kapasitas_produksi: s.kapasitas_produksi,
            })
        })
        .collect();

    let per_org: Vec<(Uuid, StatusVerifikasi, i64, Option<i64>)> = sppg::Entity::find()
        .select_only()
        .column(sppg::Column::OrganisasiId)
        .column(sppg::Column::StatusVerifikasi)
        .column_as(sppg::Column::Id.count(), "jumlah")
        .column_as(sppg::Column::KapasitasProduksi.sum(), "kapasitas")
        .group_by(sppg::Column::OrganisasiId)
        .group_by(sppg::Column::StatusVerifikasi)
        .into_tuple()
        .all(db)
        .await?;
    let mut regional_stats: Vec<RegionalStats> = organisasi::Entity::find()
        .order_by_asc(organisasi::Column::Nama)
        .all(db)
        .await?
        .into_iter()
        .map(|o| RegionalStats { id: o.id, nama: o.nama, sppg_count: 0, total_kapasitas: 0, verification: HashMap::new() })
        .collect();
    for (org, status, n, kapasitas) in per_org {
        if let Some(stats) = regional_stats.iter_mut().find(|r| r.id == org) {
            stats.sppg_count += n;
            stats.total_kapasitas += kapasitas.unwrap_or(0);
            stats.verification.insert(status, n);
        }
    }

    Ok(GeographicAnalytics { sppg_distribution, regional_stats })
}
