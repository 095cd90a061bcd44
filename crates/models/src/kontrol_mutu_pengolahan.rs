use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{StatusMutu, TahapPengolahan};
use crate::json::StringList;
use crate::kegiatan_pengolahan;
use crate::schema::{Fields, ValidationErrors};

/// Quality check taken during one cooking session.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kontrol_mutu_pengolahan")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub waktu_kontrol: DateTimeWithTimeZone,
    pub tahap_pengolahan: TahapPengolahan,
    pub suhu: Option<f64>,
    pub tekstur: Option<String>,
    pub warna: Option<String>,
    pub aroma: Option<String>,
    pub rasa: Option<String>,
    pub kebersihan_alat: bool,
    pub higiene_petugas: bool,
    pub status_mutu: StatusMutu,
    #[sea_orm(column_type = "Text", nullable)]
    pub tindakan_koreksi: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub foto_evidence: StringList,
    pub petugas_kontrol: String,
    pub kegiatan_pengolahan_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    KegiatanPengolahan,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::KegiatanPengolahan => Entity::belongs_to(kegiatan_pengolahan::Entity)
                .from(Column::KegiatanPengolahanId)
                .to(kegiatan_pengolahan::Column::Id)
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

const MSG_WAKTU: &str = "Waktu kontrol harus diisi";
const MSG_SUHU: &str = "Suhu harus di antara -50 dan 200 °C";
const MSG_ALAT: &str = "Kebersihan alat harus diisi";
const MSG_HIGIENE: &str = "Higiene petugas harus diisi";
const MSG_PETUGAS: &str = "Petugas kontrol harus diisi";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKontrolMutu {
    pub waktu_kontrol: DateTimeWithTimeZone,
    pub tahap_pengolahan: TahapPengolahan,
    pub suhu: Option<f64>,
    pub tekstur: Option<String>,
    pub warna: Option<String>,
    pub aroma: Option<String>,
    pub rasa: Option<String>,
    pub kebersihan_alat: bool,
    pub higiene_petugas: bool,
    pub status_mutu: StatusMutu,
    pub tindakan_koreksi: Option<String>,
    pub foto_evidence: Vec<String>,
    pub petugas_kontrol: String,
    pub kegiatan_pengolahan_id: Uuid,
}

impl CreateKontrolMutu {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            waktu_kontrol: f.datetime("waktuKontrol").required(MSG_WAKTU),
            tahap_pengolahan: f.choice("tahapPengolahan").required(),
            suhu: f.number("suhu").min(-50.0, MSG_SUHU).max(200.0, MSG_SUHU).optional(),
            tekstur: f.text("tekstur").optional(),
            warna: f.text("warna").optional(),
            aroma: f.text("aroma").optional(),
            rasa: f.text("rasa").optional(),
            kebersihan_alat: f.boolean("kebersihanAlat").required(MSG_ALAT),
            higiene_petugas: f.boolean("higienePetugas").required(MSG_HIGIENE),
            status_mutu: f.choice("statusMutu").required(),
            tindakan_koreksi: f.text("tindakanKoreksi").optional(),
            foto_evidence: f.list("fotoEvidence").or_empty(),
            petugas_kontrol: f.text("petugasKontrol").required(MSG_PETUGAS),
            kegiatan_pengolahan_id: f.uuid("kegiatanPengolahanId").required("Kegiatan pengolahan harus dipilih"),
        };
        f.finish(out)
    }

    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            waktu_kontrol: Set(self.waktu_kontrol),
            tahap_pengolahan: Set(self.tahap_pengolahan),
            suhu: Set(self.suhu),
            tekstur: Set(self.tekstur),
            warna: Set(self.warna),
            aroma: Set(self.aroma),
            rasa: Set(self.rasa),
            kebersihan_alat: Set(self.kebersihan_alat),
            higiene_petugas: Set(self.higiene_petugas),
            status_mutu: Set(self.status_mutu),
            tindakan_koreksi: Set(self.tindakan_koreksi),
            foto_evidence: Set(self.foto_evidence.into()),
            petugas_kontrol: Set(self.petugas_kontrol),
            kegiatan_pengolahan_id: Set(self.kegiatan_pengolahan_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKontrolMutu {
    pub waktu_kontrol: Option<DateTimeWithTimeZone>,
    pub tahap_pengolahan: Option<TahapPengolahan>,
    pub suhu: Option<f64>,
    pub tekstur: Option<String>,
    pub warna: Option<String>,
    pub aroma: Option<String>,
    pub rasa: Option<String>,
    pub kebersihan_alat: Option<bool>,
    pub higiene_petugas: Option<bool>,
    pub status_mutu: Option<StatusMutu>,
    pub tindakan_koreksi: Option<String>,
    pub foto_evidence: Option<Vec<String>>,
    pub petugas_kontrol: Option<String>,
}

impl UpdateKontrolMutu {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            waktu_kontrol: f.datetime("waktuKontrol").optional(),
            tahap_pengolahan: f.choice("tahapPengolahan").optional(),
            suhu: f.number("suhu").min(-50.0, MSG_SUHU).max(200.0, MSG_SUHU).optional(),
            tekstur: f.text("tekstur").optional(),
            warna: f.text("warna").optional(),
            aroma: f.text("aroma").optional(),
            rasa: f.text("rasa").optional(),
            kebersihan_alat: f.boolean("kebersihanAlat").optional(),
            higiene_petugas: f.boolean("higienePetugas").optional(),
            status_mutu: f.choice("statusMutu").optional(),
            tindakan_koreksi: f.text("tindakanKoreksi").optional(),
            foto_evidence: f.list("fotoEvidence").optional(),
            petugas_kontrol: f.text("petugasKontrol").non_blank(MSG_PETUGAS).optional(),
        };
        f.finish(out)
    }

    /// The owning session is fixed once the check is recorded.
    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.waktu_kontrol { am.waktu_kontrol = Set(v); }
        if let Some(v) = self.tahap_pengolahan { am.tahap_pengolahan = Set(v); }
        if let Some(v) = self.suhu { am.suhu = Set(Some(v)); }
        if let Some(v) = self.tekstur { am.tekstur = Set(Some(v)); }
        if let Some(v) = self.warna { am.warna = Set(Some(v)); }
        if let Some(v) = self.aroma { am.aroma = Set(Some(v)); }
        if let Some(v) = self.rasa { am.rasa = Set(Some(v)); }
        if let Some(v) = self.kebersihan_alat { am.kebersihan_alat = Set(v); }
        if let Some(v) = self.higiene_petugas { am.higiene_petugas = Set(v); }
        if let Some(v) = self.status_mutu { am.status_mutu = Set(v); }
        if let Some(v) = self.tindakan_koreksi { am.tindakan_koreksi = Set(Some(v)); }
        if let Some(v) = self.foto_evidence { am.foto_evidence = Set(v.into()); }
        if let Some(v) = self.petugas_kontrol { am.petugas_kontrol = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
