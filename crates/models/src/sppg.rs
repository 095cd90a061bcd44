use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::StatusVerifikasi;
use crate::organisasi;
use crate::schema::{Fields, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sppg")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nama: String,
    #[sea_orm(column_type = "Text")]
    pub alamat: String,
    pub kontak: Option<String>,
    pub kapasitas_produksi: i32,
    pub status_verifikasi: StatusVerifikasi,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan_verifikasi: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organisasi_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Organisasi,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Organisasi => Entity::belongs_to(organisasi::Entity)
                .from(Column::OrganisasiId)
                .to(organisasi::Column::Id)
                .into(),
        }
    }
}

impl Related<organisasi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organisasi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_NAMA: &str = "Nama SPPG harus diisi";
const MSG_ALAMAT: &str = "Alamat harus diisi";
const MSG_KAPASITAS: &str = "Kapasitas produksi minimal 1 porsi";
const MSG_LONGITUDE: &str = "Longitude harus di antara -180 dan 180";
const MSG_LATITUDE: &str = "Latitude harus di antara -90 dan 90";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSppg {
    pub nama: String,
    pub alamat: String,
    pub kontak: Option<String>,
    pub kapasitas_produksi: i32,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organisasi_id: Uuid,
}

impl CreateSppg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama: f.text("nama").required(MSG_NAMA),
            alamat: f.text("alamat").required(MSG_ALAMAT),
            kontak: f.text("kontak").optional(),
            kapasitas_produksi: f.number("kapasitasProduksi").min(1.0, MSG_KAPASITAS).required_int(),
            longitude: f.number("longitude").min(-180.0, MSG_LONGITUDE).max(180.0, MSG_LONGITUDE).optional(),
            latitude: f.number("latitude").min(-90.0, MSG_LATITUDE).max(90.0, MSG_LATITUDE).optional(),
            organisasi_id: f.uuid("organisasiId").required("Organisasi harus dipilih"),
        };
        f.finish(out)
    }

    /// Every new unit starts as `DRAFT` regardless of what the caller sent.
    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            nama: Set(self.nama),
            alamat: Set(self.alamat),
            kontak: Set(self.kontak),
            kapasitas_produksi: Set(self.kapasitas_produksi),
            status_verifikasi: Set(StatusVerifikasi::Draft),
            catatan_verifikasi: Set(None),
            longitude: Set(self.longitude),
            latitude: Set(self.latitude),
            organisasi_id: Set(self.organisasi_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSppg {
    pub nama: Option<String>,
    pub alamat: Option<String>,
    pub kontak: Option<String>,
    pub kapasitas_produksi: Option<i32>,
    pub status_verifikasi: Option<StatusVerifikasi>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub organisasi_id: Option<Uuid>,
}

impl UpdateSppg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama: f.text("nama").non_blank(MSG_NAMA).optional(),
            alamat: f.text("alamat").non_blank(MSG_ALAMAT).optional(),
            kontak: f.text("kontak").optional(),
            kapasitas_produksi: f.number("kapasitasProduksi").min(1.0, MSG_KAPASITAS).optional_int(),
            status_verifikasi: f.choice("statusVerifikasi").optional(),
            longitude: f.number("longitude").min(-180.0, MSG_LONGITUDE).max(180.0, MSG_LONGITUDE).optional(),
            latitude: f.number("latitude").min(-90.0, MSG_LATITUDE).max(90.0, MSG_LATITUDE).optional(),
            organisasi_id: f.uuid("organisasiId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.nama { am.nama = Set(v); }
        if let Some(v) = self.alamat { am.alamat = Set(v); }
        if let Some(v) = self.kontak { am.kontak = Set(Some(v)); }
        if let Some(v) = self.kapasitas_produksi { am.kapasitas_produksi = Set(v); }
        if let Some(v) = self.status_verifikasi { am.status_verifikasi = Set(v); }
        if let Some(v) = self.longitude { am.longitude = Set(Some(v)); }
        if let Some(v) = self.latitude { am.latitude = Set(Some(v)); }
        if let Some(v) = self.organisasi_id { am.organisasi_id = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Reviewer verdict on a unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySppg {
    pub status_verifikasi: StatusVerifikasi,
    pub catatan_verifikasi: Option<String>,
}

impl VerifySppg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            status_verifikasi: f
                .choice("statusVerifikasi")
                .only(&StatusVerifikasi::VERDICTS)
                .required(),
            catatan_verifikasi: f.text("catatanVerifikasi").optional(),
        };
        f.finish(out)
    }

    /// Only the status (and the note, when given) change.
    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        am.status_verifikasi = Set(self.status_verifikasi);
        if let Some(v) = self.catatan_verifikasi { am.catatan_verifikasi = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
