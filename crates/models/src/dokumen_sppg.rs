use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{JenisDokumen, StatusDokumen};
use crate::schema::{Fields, ValidationErrors};
use crate::sppg;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dokumen_sppg")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub jenis_dokumen: JenisDokumen,
    pub nama_dokumen: String,
    pub nomor_dokumen: Option<String>,
    pub tanggal_terbit: Date,
    pub tanggal_expiry: Option<Date>,
    pub file_path: String,
    pub status_dokumen: StatusDokumen,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan_review: Option<String>,
    pub sppg_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sppg,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sppg => Entity::belongs_to(sppg::Entity)
                .from(Column::SppgId)
                .to(sppg::Column::Id)
                .into(),
        }
    }
}

impl Related<sppg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sppg.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_NAMA: &str = "Nama dokumen harus diisi";
const MSG_TERBIT: &str = "Tanggal terbit harus diisi";
const MSG_FILE: &str = "File harus diunggah";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDokumenSppg {
    pub jenis_dokumen: JenisDokumen,
    pub nama_dokumen: String,
    pub nomor_dokumen: Option<String>,
    pub tanggal_terbit: NaiveDate,
    pub tanggal_expiry: Option<NaiveDate>,
    pub file_path: String,
    pub sppg_id: Uuid,
}

impl CreateDokumenSppg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            jenis_dokumen: f.choice("jenisDokumen").required(),
            nama_dokumen: f.text("namaDokumen").required(MSG_NAMA),
            nomor_dokumen: f.text("nomorDokumen").optional(),
            tanggal_terbit: f.date("tanggalTerbit").required(MSG_TERBIT),
            tanggal_expiry: f.date("tanggalExpiry").optional(),
            file_path: f.text("filePath").required(MSG_FILE),
            sppg_id: f.uuid("sppgId").required("SPPG harus dipilih"),
        };
        f.finish(out)
    }

    /// Uploaded documents wait in `PENDING` for review.
    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            jenis_dokumen: Set(self.jenis_dokumen),
            nama_dokumen: Set(self.nama_dokumen),
            nomor_dokumen: Set(self.nomor_dokumen),
            tanggal_terbit: Set(self.tanggal_terbit),
            tanggal_expiry: Set(self.tanggal_expiry),
            file_path: Set(self.file_path),
            status_dokumen: Set(StatusDokumen::Pending),
            catatan_review: Set(None),
            sppg_id: Set(self.sppg_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDokumenSppg {
    pub jenis_dokumen: Option<JenisDokumen>,
    pub nama_dokumen: Option<String>,
    pub nomor_dokumen: Option<String>,
    pub tanggal_terbit: Option<NaiveDate>,
    pub tanggal_expiry: Option<NaiveDate>,
    pub file_path: Option<String>,
    pub status_dokumen: Option<StatusDokumen>,
    pub catatan_review: Option<String>,
    pub sppg_id: Option<Uuid>,
}

impl UpdateDokumenSppg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            jenis_dokumen: f.choice("jenisDokumen").optional(),
            nama_dokumen: f.text("namaDokumen").non_blank(MSG_NAMA).optional(),
            nomor_dokumen: f.text("nomorDokumen").optional(),
            tanggal_terbit: f.date("tanggalTerbit").optional(),
            tanggal_expiry: f.date("tanggalExpiry").optional(),
            file_path: f.text("filePath").non_blank(MSG_FILE).optional(),
            status_dokumen: f.choice("statusDokumen").optional(),
            catatan_review: f.text("catatanReview").optional(),
            sppg_id: f.uuid("sppgId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.jenis_dokumen { am.jenis_dokumen = Set(v); }
        if let Some(v) = self.nama_dokumen { am.nama_dokumen = Set(v); }
        if let Some(v) = self.nomor_dokumen { am.nomor_dokumen = Set(Some(v)); }
        if let Some(v) = self.tanggal_terbit { am.tanggal_terbit = Set(v); }
        if let Some(v) = self.tanggal_expiry { am.tanggal_expiry = Set(Some(v)); }
        if let Some(v) = self.file_path { am.file_path = Set(v); }
        if let Some(v) = self.status_dokumen { am.status_dokumen = Set(v); }
        if let Some(v) = self.catatan_review { am.catatan_review = Set(Some(v)); }
        if let Some(v) = self.sppg_id { am.sppg_id = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Reviewer verdict; a note is mandatory either way.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDokumen {
    pub status_dokumen: StatusDokumen,
    pub catatan_review: String,
}

impl ReviewDokumen {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            status_dokumen: f.choice("statusDokumen").only(&StatusDokumen::VERDICTS).required(),
            catatan_review: f.text("catatanReview").required("Catatan review harus diisi"),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        am.status_dokumen = Set(self.status_dokumen);
        am.catatan_review = Set(Some(self.catatan_review));
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
