use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{JenisBahan, KondisiBahan};
use crate::schema::{Fields, ValidationErrors};
use crate::{pemasok, sppg};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "laporan_bahan_baku")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tanggal: Date,
    pub nama_bahan: String,
    pub jenis_bahan: JenisBahan,
    pub jumlah: f64,
    pub satuan: String,
    pub tanggal_expiry: Option<Date>,
    pub kondisi_bahan: KondisiBahan,
    pub suhu_penerimaan: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan: Option<String>,
    pub sppg_id: Uuid,
    pub pemasok_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sppg,
    Pemasok,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sppg => Entity::belongs_to(sppg::Entity)
                .from(Column::SppgId)
                .to(sppg::Column::Id)
                .into(),
            Relation::Pemasok => Entity::belongs_to(pemasok::Entity)
                .from(Column::PemasokId)
                .to(pemasok::Column::Id)
                .into(),
        }
    }
}

impl Related<sppg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sppg.def()
    }
}

impl Related<pemasok::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pemasok.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_TANGGAL: &str = "Tanggal penerimaan harus diisi";
const MSG_NAMA_BAHAN: &str = "Nama bahan harus diisi";
const MSG_JUMLAH: &str = "Jumlah harus lebih dari 0";
const MSG_SATUAN: &str = "Satuan harus diisi";
const MSG_PEMASOK: &str = "Pemasok harus dipilih";

/// One received material, without the receipt-level references.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BahanBakuInput {
    pub nama_bahan: String,
    pub jenis_bahan: JenisBahan,
    pub jumlah: f64,
    pub satuan: String,
    pub tanggal_expiry: Option<NaiveDate>,
    pub kondisi_bahan: KondisiBahan,
    pub suhu_penerimaan: Option<f64>,
    pub catatan: Option<String>,
}

impl BahanBakuInput {
    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            nama_bahan: f.text("namaBahan").required(MSG_NAMA_BAHAN),
            jenis_bahan: f.choice("jenisBahan").required(),
            jumlah: f.number("jumlah").min(0.1, MSG_JUMLAH).required(),
            satuan: f.text("satuan").required(MSG_SATUAN),
            tanggal_expiry: f.date("tanggalExpiry").optional(),
            kondisi_bahan: f.choice("kondisiBahan").required(),
            suhu_penerimaan: f.number("suhuPenerimaan").optional(),
            catatan: f.text("catatan").optional(),
        }
    }

    pub fn into_active_model(
        self,
        tanggal: NaiveDate,
        sppg_id: Uuid,
        pemasok_id: Uuid,
        created_by: Uuid,
    ) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            tanggal: Set(tanggal),
            nama_bahan: Set(self.nama_bahan),
            jenis_bahan: Set(self.jenis_bahan),
            jumlah: Set(self.jumlah),
            satuan: Set(self.satuan),
            tanggal_expiry: Set(self.tanggal_expiry),
            kondisi_bahan: Set(self.kondisi_bahan),
            suhu_penerimaan: Set(self.suhu_penerimaan),
            catatan: Set(self.catatan),
            sppg_id: Set(sppg_id),
            pemasok_id: Set(pemasok_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLaporanBahanBaku {
    pub tanggal: NaiveDate,
    #[serde(flatten)]
    pub bahan: BahanBakuInput,
    pub pemasok_id: Uuid,
    /// Falls back to the caller's own SPPG when omitted.
    pub sppg_id: Option<Uuid>,
}

impl CreateLaporanBahanBaku {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let tanggal = f.date("tanggal").required(MSG_TANGGAL);
        let bahan = BahanBakuInput::read(&mut f);
        let pemasok_id = f.uuid("pemasokId").required(MSG_PEMASOK);
        let sppg_id = f.uuid("sppgId").optional();
        f.finish(Self { tanggal, bahan, pemasok_id, sppg_id })
    }

    pub fn into_active_model(self, sppg_id: Uuid, created_by: Uuid) -> ActiveModel {
        self.bahan.into_active_model(self.tanggal, sppg_id, self.pemasok_id, created_by)
    }
}

/// Several materials from one delivery, stored together.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBulkLaporanBahanBaku {
    pub tanggal: NaiveDate,
    pub pemasok_id: Uuid,
    pub sppg_id: Option<Uuid>,
    pub bahan_baku: Vec<BahanBakuInput>,
}

impl CreateBulkLaporanBahanBaku {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").required(MSG_TANGGAL),
            pemasok_id: f.uuid("pemasokId").required(MSG_PEMASOK),
            sppg_id: f.uuid("sppgId").optional(),
            bahan_baku: f.objects("bahanBaku", 1, "Minimal 1 bahan baku harus diisi", BahanBakuInput::read),
        };
        f.finish(out)
    }

    pub fn into_active_models(self, sppg_id: Uuid, created_by: Uuid) -> Vec<ActiveModel> {
        let (tanggal, pemasok_id) = (self.tanggal, self.pemasok_id);
        self.bahan_baku
            .into_iter()
            .map(|b| b.into_active_model(tanggal, sppg_id, pemasok_id, created_by))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLaporanBahanBaku {
    pub tanggal: Option<NaiveDate>,
    pub nama_bahan: Option<String>,
    pub jenis_bahan: Option<JenisBahan>,
    pub jumlah: Option<f64>,
    pub satuan: Option<String>,
    pub tanggal_expiry: Option<NaiveDate>,
    pub kondisi_bahan: Option<KondisiBahan>,
    pub suhu_penerimaan: Option<f64>,
    pub catatan: Option<String>,
    pub sppg_id: Option<Uuid>,
    pub pemasok_id: Option<Uuid>,
}

impl UpdateLaporanBahanBaku {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").optional(),
            nama_bahan: f.text("namaBahan").non_blank(MSG_NAMA_BAHAN).optional(),
            jenis_bahan: f.choice("jenisBahan").optional(),
            jumlah: f.number("jumlah").min(0.1, MSG_JUMLAH).optional(),
            satuan: f.text("satuan").non_blank(MSG_SATUAN).optional(),
            tanggal_expiry: f.date("tanggalExpiry").optional(),
            kondisi_bahan: f.choice("kondisiBahan").optional(),
            suhu_penerimaan: f.number("suhuPenerimaan").optional(),
            catatan: f.text("catatan").optional(),
            sppg_id: f.uuid("sppgId").optional(),
            pemasok_id: f.uuid("pemasokId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.tanggal { am.tanggal = Set(v); }
        if let Some(v) = self.nama_bahan { am.nama_bahan = Set(v); }
        if let Some(v) = self.jenis_bahan { am.jenis_bahan = Set(v); }
        if let Some(v) = self.jumlah { am.jumlah = Set(v); }
        if let Some(v) = self.satuan { am.satuan = Set(v); }
        if let Some(v) = self.tanggal_expiry { am.tanggal_expiry = Set(Some(v)); }
        if let Some(v) = self.kondisi_bahan { am.kondisi_bahan = Set(v); }
        if let Some(v) = self.suhu_penerimaan { am.suhu_penerimaan = Set(Some(v)); }
        if let Some(v) = self.catatan { am.catatan = Set(Some(v)); }
        if let Some(v) = self.sppg_id { am.sppg_id = Set(v); }
        if let Some(v) = self.pemasok_id { am.pemasok_id = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
