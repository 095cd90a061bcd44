use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{JenisBahan, KondisiBahan};
use crate::schema::{Fields, ValidationErrors};
use crate::{kegiatan_pengolahan, laporan_bahan_baku};

/// Raw material consumed by a cooking session, optionally traced back to the
/// delivery it came from.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "penggunaan_bahan_baku")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nama_bahan: String,
    pub jenis_bahan: JenisBahan,
    pub jumlah_digunakan: f64,
    pub satuan: String,
    pub batch_number: Option<String>,
    pub tanggal_expiry: Option<Date>,
    pub kondisi_bahan: KondisiBahan,
    pub sumber_bahan: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan_penggunaan: Option<String>,
    pub kegiatan_pengolahan_id: Uuid,
    pub laporan_bahan_baku_id: Option<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    KegiatanPengolahan,
    LaporanBahanBaku,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::KegiatanPengolahan => Entity::belongs_to(kegiatan_pengolahan::Entity)
                .from(Column::KegiatanPengolahanId)
                .to(kegiatan_pengolahan::Column::Id)
                .into(),
            Relation::LaporanBahanBaku => Entity::belongs_to(laporan_bahan_baku::Entity)
                .from(Column::LaporanBahanBakuId)
                .to(laporan_bahan_baku::Column::Id)
                .into(),
        }
    }
}

impl Related<kegiatan_pengolahan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KegiatanPengolahan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_NAMA: &str = "Nama bahan harus diisi";
const MSG_JUMLAH: &str = "Jumlah yang digunakan harus lebih dari 0";
const MSG_SATUAN: &str = "Satuan harus diisi";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePenggunaanBahanBaku {
    pub nama_bahan: String,
    pub jenis_bahan: JenisBahan,
    pub jumlah_digunakan: f64,
    pub satuan: String,
    pub batch_number: Option<String>,
    pub tanggal_expiry: Option<NaiveDate>,
    pub kondisi_bahan: KondisiBahan,
    pub sumber_bahan: Option<String>,
    pub catatan_penggunaan: Option<String>,
    pub kegiatan_pengolahan_id: Uuid,
    pub laporan_bahan_baku_id: Option<Uuid>,
}

impl CreatePenggunaanBahanBaku {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama_bahan: f.text("namaBahan").required(MSG_NAMA),
            jenis_bahan: f.choice("jenisBahan").required(),
            jumlah_digunakan: f.number("jumlahDigunakan").min(0.01, MSG_JUMLAH).required(),
            satuan: f.text("satuan").required(MSG_SATUAN),
            batch_number: f.text("batchNumber").optional(),
            tanggal_expiry: f.date("tanggalExpiry").optional(),
            kondisi_bahan: f.choice("kondisiBahan").required(),
            sumber_bahan: f.text("sumberBahan").optional(),
            catatan_penggunaan: f.text("catatanPenggunaan").optional(),
            kegiatan_pengolahan_id: f.uuid("kegiatanPengolahanId").required("Kegiatan pengolahan harus dipilih"),
            laporan_bahan_baku_id: f.uuid("laporanBahanBakuId").optional(),
        };
        f.finish(out)
    }

    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            nama_bahan: Set(self.nama_bahan),
            jenis_bahan: Set(self.jenis_bahan),
            jumlah_digunakan: Set(self.jumlah_digunakan),
            satuan: Set(self.satuan),
            batch_number: Set(self.batch_number),
            tanggal_expiry: Set(self.tanggal_expiry),
            kondisi_bahan: Set(self.kondisi_bahan),
            sumber_bahan: Set(self.sumber_bahan),
            catatan_penggunaan: Set(self.catatan_penggunaan),
            kegiatan_pengolahan_id: Set(self.kegiatan_pengolahan_id),
            laporan_bahan_baku_id: Set(self.laporan_bahan_baku_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePenggunaanBahanBaku {
    pub nama_bahan: Option<String>,
    pub jenis_bahan: Option<JenisBahan>,
    pub jumlah_digunakan: Option<f64>,
    pub satuan: Option<String>,
    pub batch_number: Option<String>,
    pub tanggal_expiry: Option<NaiveDate>,
    pub kondisi_bahan: Option<KondisiBahan>,
    pub sumber_bahan: Option<String>,
    pub catatan_penggunaan: Option<String>,
    pub laporan_bahan_baku_id: Option<Uuid>,
}

impl UpdatePenggunaanBahanBaku {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama_bahan: f.text("namaBahan").non_blank(MSG_NAMA).optional(),
            jenis_bahan: f.choice("jenisBahan").optional(),
            jumlah_digunakan: f.number("jumlahDigunakan").min(0.01, MSG_JUMLAH).optional(),
            satuan: f.text("satuan").non_blank(MSG_SATUAN).optional(),
            batch_number: f.text("batchNumber").optional(),
            tanggal_expiry: f.date("tanggalExpiry").optional(),
            kondisi_bahan: f.choice("kondisiBahan").optional(),
            sumber_bahan: f.text("sumberBahan").optional(),
            catatan_penggunaan: f.text("catatanPenggunaan").optional(),
            laporan_bahan_baku_id: f.uuid("laporanBahanBakuId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.nama_bahan { am.nama_bahan = Set(v); }
        if let Some(v) = self.jenis_bahan { am.jenis_bahan = Set(v); }
        if let Some(v) = self.jumlah_digunakan { am.jumlah_digunakan = Set(v); }
        if let Some(v) = self.satuan { am.satuan = Set(v); }
        if let Some(v) = self.batch_number { am.batch_number = Set(Some(v)); }
        if let Some(v) = self.tanggal_expiry { am.tanggal_expiry = Set(Some(v)); }
        if let Some(v) = self.kondisi_bahan { am.kondisi_bahan = Set(v); }
        if let Some(v) = self.sumber_bahan { am.sumber_bahan = Set(Some(v)); }
        if let Some(v) = self.catatan_penggunaan { am.catatan_penggunaan = Set(Some(v)); }
        if let Some(v) = self.laporan_bahan_baku_id { am.laporan_bahan_baku_id = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
