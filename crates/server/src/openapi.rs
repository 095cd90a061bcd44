use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub nama: String,
    pub password: String,
    pub sppg_id: Option<Uuid>,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SppgRequest {
    pub nama: String,
    pub alamat: String,
    pub kontak: Option<String>,
    pub kapasitas_produksi: i32,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organisasi_id: Uuid,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct KomponenRequest {
    pub nama_bahan: String,
    pub jumlah: f64,
    pub satuan: String,
    pub kalori_per100g: Option<f64>,
    pub protein_per100g: Option<f64>,
    pub karbohidrat_per100g: Option<f64>,
    pub lemak_per100g: Option<f64>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MenuWithKomponenRequest {
    /// `YYYY-MM-DD`
    pub tanggal: String,
    pub nama_menu: String,
    pub deskripsi: Option<String>,
    pub porsi_target: i32,
    pub biaya_per_porsi: Option<f64>,
    pub sppg_id: Option<Uuid>,
    pub komponen: Vec<KomponenRequest>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BahanBakuRequest {
    pub nama_bahan: String,
    pub jenis_bahan: String,
    pub jumlah: f64,
    pub satuan: String,
    pub tanggal_expiry: Option<String>,
    pub kondisi_bahan: String,
    pub suhu_penerimaan: Option<f64>,
    pub catatan: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BulkLaporanRequest {
    pub tanggal: String,
    pub pemasok_id: Uuid,
    pub sppg_id: Option<Uuid>,
    pub bahan_baku: Vec<BahanBakuRequest>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::sppg::list,
        crate::routes::sppg::get_one,
        crate::routes::sppg::create,
        crate::routes::organisasi::list,
        crate::routes::menu::create_with_komponen,
        crate::routes::laporan::create_bulk,
        crate::routes::peringatan::list,
        crate::routes::peringatan::generate,
        crate::routes::notifikasi::list,
        crate::routes::standar_akg::validate,
        crate::routes::dashboard::overview,
        crate::routes::peta::lokasi,
        crate::routes::peta::token,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            SppgRequest,
            KomponenRequest,
            MenuWithKomponenRequest,
            BahanBakuRequest,
            BulkLaporanRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "organisasi"),
        (name = "sppg"),
        (name = "menu"),
        (name = "laporan"),
        (name = "peringatan"),
        (name = "gizi"),
        (name = "dashboard"),
        (name = "peta")
    )
)]
pub struct ApiDoc;
