//! Status and category enumerations shared by the entities.
//!
//! Stored as their upper-snake string and serialized the same way.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of organizations and suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusAktif {
    #[default]
    #[sea_orm(string_value = "AKTIF")]
    Aktif,
    #[sea_orm(string_value = "NON_AKTIF")]
    NonAktif,
    #[sea_orm(string_value = "DIBUBARKAN")]
    Dibubarkan,
}

/// Verification state of an SPPG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusVerifikasi {
    #[default]
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "UNDER_REVIEW")]
    UnderReview,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "SUSPENDED")]
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenisPemasok {
    #[sea_orm(string_value = "SAYURAN")]
    Sayuran,
    #[sea_orm(string_value = "DAGING")]
    Daging,
    #[sea_orm(string_value = "IKAN")]
    Ikan,
    #[sea_orm(string_value = "BERAS_BIJI")]
    BerasBiji,
    #[sea_orm(string_value = "BUMBU_REMPAH")]
    BumbuRempah,
    #[default]
    #[sea_orm(string_value = "LAINNYA")]
    Lainnya,
}

/// Outcome of the nutrition-adequacy (AKG) evaluation of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusAkg {
    #[sea_orm(string_value = "MEMENUHI")]
    Memenuhi,
    #[sea_orm(string_value = "HAMPIR_MEMENUHI")]
    HampirMemenuhi,
    #[sea_orm(string_value = "TIDAK_MEMENUHI")]
    TidakMemenuhi,
    #[default]
    #[sea_orm(string_value = "BELUM_DIEVALUASI")]
    BelumDievaluasi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenisPengolahan {
    #[sea_orm(string_value = "SARAPAN")]
    Sarapan,
    #[default]
    #[sea_orm(string_value = "MAKAN_SIANG")]
    MakanSiang,
    #[sea_orm(string_value = "MAKAN_MALAM")]
    MakanMalam,
    #[sea_orm(string_value = "SNACK")]
    Snack,
    #[sea_orm(string_value = "KHUSUS")]
    Khusus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKegiatan {
    #[default]
    #[sea_orm(string_value = "PERSIAPAN")]
    Persiapan,
    #[sea_orm(string_value = "BERLANGSUNG")]
    Berlangsung,
    #[sea_orm(string_value = "SELESAI")]
    Selesai,
    #[sea_orm(string_value = "DIHENTIKAN")]
    Dihentikan,
    #[sea_orm(string_value = "GAGAL")]
    Gagal,
}

/// Cooking stage a quality check was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TahapPengolahan {
    #[default]
    #[sea_orm(string_value = "PERSIAPAN_BAHAN")]
    PersiapanBahan,
    #[sea_orm(string_value = "PENCUCIAN")]
    Pencucian,
    #[sea_orm(string_value = "PEMOTONGAN")]
    Pemotongan,
    #[sea_orm(string_value = "PEMASAKAN")]
    Pemasakan,
    #[sea_orm(string_value = "PENYAJIAN")]
    Penyajian,
    #[sea_orm(string_value = "PEMBERSIHAN")]
    Pembersihan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusMutu {
    #[sea_orm(string_value = "SANGAT_BAIK")]
    SangatBaik,
    #[default]
    #[sea_orm(string_value = "BAIK")]
    Baik,
    #[sea_orm(string_value = "CUKUP")]
    Cukup,
    #[sea_orm(string_value = "PERLU_PERBAIKAN")]
    PerluPerbaikan,
    #[sea_orm(string_value = "DITOLAK")]
    Ditolak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenisBahan {
    #[sea_orm(string_value = "PROTEIN_HEWANI")]
    ProteinHewani,
    #[sea_orm(string_value = "PROTEIN_NABATI")]
    ProteinNabati,
    #[sea_orm(string_value = "KARBOHIDRAT")]
    Karbohidrat,
    #[sea_orm(string_value = "SAYURAN")]
    Sayuran,
    #[sea_orm(string_value = "BUAH")]
    Buah,
    #[sea_orm(string_value = "BUMBU_REMPAH")]
    BumbuRempah,
    #[sea_orm(string_value = "MINYAK_LEMAK")]
    MinyakLemak,
    #[default]
    #[sea_orm(string_value = "LAINNYA")]
    Lainnya,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KondisiBahan {
    #[sea_orm(string_value = "SANGAT_BAIK")]
    SangatBaik,
    #[default]
    #[sea_orm(string_value = "BAIK")]
    Baik,
    #[sea_orm(string_value = "CUKUP")]
    Cukup,
    #[sea_orm(string_value = "BURUK")]
    Buruk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenisDokumen {
    #[sea_orm(string_value = "SLHS")]
    Slhs,
    #[sea_orm(string_value = "SERTIFIKAT_HALAL")]
    SertifikatHalal,
    #[sea_orm(string_value = "FOOD_HANDLER_CERTIFICATE")]
    FoodHandlerCertificate,
    #[sea_orm(string_value = "DENAH_DAPUR")]
    DenahDapur,
    #[sea_orm(string_value = "SIUP")]
    Siup,
    #[sea_orm(string_value = "IZIN_OPERASIONAL")]
    IzinOperasional,
    #[default]
    #[sea_orm(string_value = "LAINNYA")]
    Lainnya,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDokumen {
    #[default]
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "EXPIRED")]
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusChecklist {
    #[default]
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "REVIEWED")]
    Reviewed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenisPeringatan {
    #[sea_orm(string_value = "KEPATUHAN_OPERASIONAL")]
    KepatuhanOperasional,
    #[sea_orm(string_value = "KEAMANAN_PANGAN")]
    KeamananPangan,
    #[sea_orm(string_value = "STANDAR_GIZI")]
    StandarGizi,
    #[sea_orm(string_value = "DOKUMEN_KEPATUHAN")]
    DokumenKepatuhan,
    #[sea_orm(string_value = "KUALITAS_BAHAN")]
    KualitasBahan,
    #[sea_orm(string_value = "KAPASITAS_PRODUKSI")]
    KapasitasProduksi,
    #[default]
    #[sea_orm(string_value = "SISTEM_TEKNIS")]
    SistemTeknis,
    #[sea_orm(string_value = "AUDIT_INSPEKSI")]
    AuditInspeksi,
    #[sea_orm(string_value = "PELATIHAN_SDM")]
    PelatihanSdm,
    #[sea_orm(string_value = "REGULASI_KEBIJAKAN")]
    RegulasiKebijakan,
}

/// Alert priority, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TingkatPrioritas {
    #[sea_orm(string_value = "KRITIS")]
    Kritis,
    #[sea_orm(string_value = "TINGGI")]
    Tinggi,
    #[default]
    #[sea_orm(string_value = "SEDANG")]
    Sedang,
    #[sea_orm(string_value = "RENDAH")]
    Rendah,
    #[sea_orm(string_value = "INFO")]
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusPeringatan {
    #[default]
    #[sea_orm(string_value = "AKTIF")]
    Aktif,
    #[sea_orm(string_value = "DITINDAKLANJUTI")]
    Ditindaklanjuti,
    #[sea_orm(string_value = "SELESAI")]
    Selesai,
    #[sea_orm(string_value = "DIABAIKAN")]
    Diabaikan,
    #[sea_orm(string_value = "KADALUARSA")]
    Kadaluarsa,
}

impl StatusVerifikasi {
    /// Statuses a reviewer may set through verification.
    pub const VERDICTS: [StatusVerifikasi; 3] = [Self::Approved, Self::Rejected, Self::Suspended];
}

impl StatusAkg {
    pub const EVALUATED: [StatusAkg; 3] = [Self::Memenuhi, Self::HampirMemenuhi, Self::TidakMemenuhi];
}

impl StatusKegiatan {
    /// Terminal statuses accepted when a session is closed.
    pub const FINISHED: [StatusKegiatan; 3] = [Self::Selesai, Self::Dihentikan, Self::Gagal];
}

impl StatusDokumen {
    pub const VERDICTS: [StatusDokumen; 2] = [Self::Approved, Self::Rejected];
}

impl StatusPeringatan {
    /// Alerts that still need attention.
    pub const OPEN: [StatusPeringatan; 2] = [Self::Aktif, Self::Ditindaklanjuti];
}

impl TingkatPrioritas {
    pub const ALL: [TingkatPrioritas; 5] = [Self::Kritis, Self::Tinggi, Self::Sedang, Self::Rendah, Self::Info];

    /// Position in the urgency order, 0 being most urgent.
    pub fn rank(self) -> i32 {
        match self {
            Self::Kritis => 0,
            Self::Tinggi => 1,
            Self::Sedang => 2,
            Self::Rendah => 3,
            Self::Info => 4,
        }
    }
}
