use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::StatusChecklist;
use crate::json::StringList;
use crate::schema::{Fields, ValidationErrors};
use crate::sppg;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "checklist_harian")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tanggal: Date,
    pub kebersihan_sdm: bool,
    pub kebersihan_infrastruktur: bool,
    pub kondisi_peralatan: bool,
    pub suhu_penyimpanan: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub foto_evidence: StringList,
    pub skor_kepatuhan: Option<f64>,
    pub status: StatusChecklist,
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

const MSG_TANGGAL: &str = "Tanggal checklist harus diisi";
const MSG_SDM: &str = "Status kebersihan SDM harus diisi";
const MSG_INFRA: &str = "Status kebersihan infrastruktur harus diisi";
const MSG_PERALATAN: &str = "Status kondisi peralatan harus diisi";
const MSG_FOTO: &str = "Minimal 1 foto bukti harus diunggah";
const MSG_SKOR: &str = "Skor kepatuhan harus di antara 0 dan 100";

/// Share of passed checks as a 0..=100 score.
pub fn skor_kepatuhan(checks: &[bool]) -> f64 {
    if checks.is_empty() {
        return 0.0;
    }
    let passed = checks.iter().filter(|c| **c).count() as f64;
    (passed / checks.len() as f64 * 10000.0).round() / 100.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChecklistHarian {
    pub tanggal: NaiveDate,
    pub kebersihan_sdm: bool,
    pub kebersihan_infrastruktur: bool,
    pub kondisi_peralatan: bool,
    pub suhu_penyimpanan: Option<f64>,
    pub catatan: Option<String>,
    pub foto_evidence: Vec<String>,
    /// Falls back to the caller's own SPPG when omitted.
    pub sppg_id: Option<Uuid>,
}

impl CreateChecklistHarian {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").required(MSG_TANGGAL),
            kebersihan_sdm: f.boolean("kebersihanSdm").required(MSG_SDM),
            kebersihan_infrastruktur: f.boolean("kebersihanInfrastruktur").required(MSG_INFRA),
            kondisi_peralatan: f.boolean("kondisiPeralatan").required(MSG_PERALATAN),
            suhu_penyimpanan: f.number("suhuPenyimpanan").optional(),
            catatan: f.text("catatan").optional(),
            foto_evidence: f.list("fotoEvidence").min_items(1, MSG_FOTO).or_empty(),
            sppg_id: f.uuid("sppgId").optional(),
        };
        f.finish(out)
    }

    /// Starts as `DRAFT` with the score computed from the three checks.
    pub fn into_active_model(self, sppg_id: Uuid, created_by: Uuid) -> ActiveModel {
        let skor = skor_kepatuhan(&[
            self.kebersihan_sdm,
            self.kebersihan_infrastruktur,
            self.kondisi_peralatan,
        ]);
        ActiveModel {
            id: Set(Uuid::new_v4()),
            tanggal: Set(self.tanggal),
            kebersihan_sdm: Set(self.kebersihan_sdm),
            kebersihan_infrastruktur: Set(self.kebersihan_infrastruktur),
            kondisi_peralatan: Set(self.kondisi_peralatan),
            suhu_penyimpanan: Set(self.suhu_penyimpanan),
            catatan: Set(self.catatan),
            foto_evidence: Set(self.foto_evidence.into()),
            skor_kepatuhan: Set(Some(skor)),
            status: Set(StatusChecklist::Draft),
            sppg_id: Set(sppg_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklistHarian {
    pub tanggal: Option<NaiveDate>,
    pub kebersihan_sdm: Option<bool>,
    pub kebersihan_infrastruktur: Option<bool>,
    pub kondisi_peralatan: Option<bool>,
    pub suhu_penyimpanan: Option<f64>,
    pub catatan: Option<String>,
    pub foto_evidence: Option<Vec<String>>,
    pub status: Option<StatusChecklist>,
    pub sppg_id: Option<Uuid>,
}

impl UpdateChecklistHarian {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").optional(),
            kebersihan_sdm: f.boolean("kebersihanSdm").optional(),
            kebersihan_infrastruktur: f.boolean("kebersihanInfrastruktur").optional(),
            kondisi_peralatan: f.boolean("kondisiPeralatan").optional(),
            suhu_penyimpanan: f.number("suhuPenyimpanan").optional(),
            catatan: f.text("catatan").optional(),
            foto_evidence: f.list("fotoEvidence").min_items(1, MSG_FOTO).optional(),
            status: f.choice("status").optional(),
            sppg_id: f.uuid("sppgId").optional(),
        };
        f.finish(out)
    }

    /// Changing any check recomputes the score against the stored values.
    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let checks_changed = self.kebersihan_sdm.is_some()
            || self.kebersihan_infrastruktur.is_some()
            || self.kondisi_peralatan.is_some();
        let skor = skor_kepatuhan(&[
            self.kebersihan_sdm.unwrap_or(current.kebersihan_sdm),
            self.kebersihan_infrastruktur.unwrap_or(current.kebersihan_infrastruktur),
            self.kondisi_peralatan.unwrap_or(current.kondisi_peralatan),
        ]);
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.tanggal { am.tanggal = Set(v); }
        if let Some(v) = self.kebersihan_sdm { am.kebersihan_sdm = Set(v); }
        if let Some(v) = self.kebersihan_infrastruktur { am.kebersihan_infrastruktur = Set(v); }
        if let Some(v) = self.kondisi_peralatan { am.kondisi_peralatan = Set(v); }
        if let Some(v) = self.suhu_penyimpanan { am.suhu_penyimpanan = Set(Some(v)); }
        if let Some(v) = self.catatan { am.catatan = Set(Some(v)); }
        if let Some(v) = self.foto_evidence { am.foto_evidence = Set(v.into()); }
        if let Some(v) = self.status { am.status = Set(v); }
        if let Some(v) = self.sppg_id { am.sppg_id = Set(v); }
        if checks_changed {
            am.skor_kepatuhan = Set(Some(skor));
        }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Supervisor review overriding the computed score.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewChecklist {
    pub skor_kepatuhan: f64,
    pub catatan: Option<String>,
}

impl ReviewChecklist {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            skor_kepatuhan: f.number("skorKepatuhan").min(0.0, MSG_SKOR).max(100.0, MSG_SKOR).required(),
            catatan: f.text("catatan").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        am.skor_kepatuhan = Set(Some(self.skor_kepatuhan));
        am.status = Set(StatusChecklist::Reviewed);
        if let Some(v) = self.catatan { am.catatan = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
