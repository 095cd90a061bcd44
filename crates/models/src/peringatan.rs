use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{JenisPeringatan, StatusPeringatan, TingkatPrioritas};
use crate::schema::{Fields, ValidationErrors};
use crate::{organisasi, sppg};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "peringatan")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub judul: String,
    #[sea_orm(column_type = "Text")]
    pub deskripsi: String,
    pub jenis_peringatan: JenisPeringatan,
    pub tingkat_prioritas: TingkatPrioritas,
    pub status_peringatan: StatusPeringatan,
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
    pub sppg_id: Option<Uuid>,
    pub organisasi_id: Option<Uuid>,
    pub batas_waktu_tindakan: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tindakan_dilakukan: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hasil_tindakan: Option<String>,
    pub auto_resolve: bool,
    pub resolved_at: Option<DateTimeWithTimeZone>,
    pub resolved_by: Option<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sppg,
    Organisasi,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sppg => Entity::belongs_to(sppg::Entity)
                .from(Column::SppgId)
                .to(sppg::Column::Id)
                .into(),
            Relation::Organisasi => Entity::belongs_to(organisasi::Entity)
                .from(Column::OrganisasiId)
                .to(organisasi::Column::Id)
                .into(),
        }
    }
}

impl Related<sppg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sppg.def()
    }
}

impl Related<organisasi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organisasi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_JUDUL: &str = "Judul peringatan harus diisi";
const MSG_DESKRIPSI: &str = "Deskripsi peringatan harus diisi";
const MSG_PAGE: &str = "Halaman minimal 1";
const MSG_LIMIT: &str = "Batas data harus di antara 1 dan 100";

pub const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeringatan {
    pub judul: String,
    pub deskripsi: String,
    pub jenis_peringatan: JenisPeringatan,
    pub tingkat_prioritas: TingkatPrioritas,
    pub status_peringatan: StatusPeringatan,
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
    pub sppg_id: Option<Uuid>,
    pub organisasi_id: Option<Uuid>,
    pub batas_waktu_tindakan: Option<DateTime<FixedOffset>>,
    pub auto_resolve: bool,
}

impl CreatePeringatan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            judul: f.text("judul").required(MSG_JUDUL),
            deskripsi: f.text("deskripsi").required(MSG_DESKRIPSI),
            jenis_peringatan: f.choice("jenisPeringatan").required(),
            tingkat_prioritas: f.choice("tingkatPrioritas").required(),
            status_peringatan: f.choice("statusPeringatan").optional().unwrap_or_default(),
            entity_type: f.text("entityType").optional(),
            entity_id: f.uuid("entityId").optional(),
            sppg_id: f.uuid("sppgId").optional(),
            organisasi_id: f.uuid("organisasiId").optional(),
            batas_waktu_tindakan: f.datetime("batasWaktuTindakan").optional(),
            auto_resolve: f.boolean("autoResolve").optional().unwrap_or(false),
        };
        f.finish(out)
    }

    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            judul: Set(self.judul),
            deskripsi: Set(self.deskripsi),
            jenis_peringatan: Set(self.jenis_peringatan),
            tingkat_prioritas: Set(self.tingkat_prioritas),
            status_peringatan: Set(self.status_peringatan),
            entity_type: Set(self.entity_type),
            entity_id: Set(self.entity_id),
            sppg_id: Set(self.sppg_id),
            organisasi_id: Set(self.organisasi_id),
            batas_waktu_tindakan: Set(self.batas_waktu_tindakan),
            tindakan_dilakukan: Set(None),
            hasil_tindakan: Set(None),
            auto_resolve: Set(self.auto_resolve),
            resolved_at: Set(None),
            resolved_by: Set(None),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePeringatan {
    pub judul: Option<String>,
    pub deskripsi: Option<String>,
    pub jenis_peringatan: Option<JenisPeringatan>,
    pub tingkat_prioritas: Option<TingkatPrioritas>,
    pub status_peringatan: Option<StatusPeringatan>,
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
    pub sppg_id: Option<Uuid>,
    pub organisasi_id: Option<Uuid>,
    pub batas_waktu_tindakan: Option<DateTime<FixedOffset>>,
    pub tindakan_dilakukan: Option<String>,
    pub hasil_tindakan: Option<String>,
    pub auto_resolve: Option<bool>,
}

impl UpdatePeringatan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            judul: f.text("judul").non_blank(MSG_JUDUL).optional(),
            deskripsi: f.text("deskripsi").non_blank(MSG_DESKRIPSI).optional(),
            jenis_peringatan: f.choice("jenisPeringatan").optional(),
            tingkat_prioritas: f.choice("tingkatPrioritas").optional(),
            status_peringatan: f.choice("statusPeringatan").optional(),
            entity_type: f.text("entityType").optional(),
            entity_id: f.uuid("entityId").optional(),
            sppg_id: f.uuid("sppgId").optional(),
            organisasi_id: f.uuid("organisasiId").optional(),
            batas_waktu_tindakan: f.datetime("batasWaktuTindakan").optional(),
            tindakan_dilakukan: f.text("tindakanDilakukan").optional(),
            hasil_tindakan: f.text("hasilTindakan").optional(),
            auto_resolve: f.boolean("autoResolve").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.judul { am.judul = Set(v); }
        if let Some(v) = self.deskripsi { am.deskripsi = Set(v); }
        if let Some(v) = self.jenis_peringatan { am.jenis_peringatan = Set(v); }
        if let Some(v) = self.tingkat_prioritas { am.tingkat_prioritas = Set(v); }
        if let Some(v) = self.status_peringatan { am.status_peringatan = Set(v); }
        if let Some(v) = self.entity_type { am.entity_type = Set(Some(v)); }
        if let Some(v) = self.entity_id { am.entity_id = Set(Some(v)); }
        if let Some(v) = self.sppg_id { am.sppg_id = Set(Some(v)); }
        if let Some(v) = self.organisasi_id { am.organisasi_id = Set(Some(v)); }
        if let Some(v) = self.batas_waktu_tindakan { am.batas_waktu_tindakan = Set(Some(v)); }
        if let Some(v) = self.tindakan_dilakukan { am.tindakan_dilakukan = Set(Some(v)); }
        if let Some(v) = self.hasil_tindakan { am.hasil_tindakan = Set(Some(v)); }
        if let Some(v) = self.auto_resolve { am.auto_resolve = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Closes an alert as `SELESAI`, recording who did it and what was done.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvePeringatan {
    pub tindakan_dilakukan: Option<String>,
    pub hasil_tindakan: Option<String>,
}

impl ResolvePeringatan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tindakan_dilakukan: f.text("tindakanDilakukan").optional(),
            hasil_tindakan: f.text("hasilTindakan").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, resolved_by: Uuid) -> ActiveModel {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let mut am: ActiveModel = current.into();
        am.status_peringatan = Set(StatusPeringatan::Selesai);
        am.resolved_at = Set(Some(now));
        am.resolved_by = Set(Some(resolved_by));
        if let Some(v) = self.tindakan_dilakukan { am.tindakan_dilakukan = Set(Some(v)); }
        if let Some(v) = self.hasil_tindakan { am.hasil_tindakan = Set(Some(v)); }
        am.updated_by = Set(Some(resolved_by));
        am.updated_at = Set(Some(now));
        am
    }
}

/// Listing filters. Resolved, dismissed and expired alerts are hidden
/// unless `show_resolved` is set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPeringatan {
    pub page: u64,
    pub limit: u64,
    pub jenis_peringatan: Option<JenisPeringatan>,
    pub tingkat_prioritas: Option<TingkatPrioritas>,
    pub status_peringatan: Option<StatusPeringatan>,
    pub sppg_id: Option<Uuid>,
    pub organisasi_id: Option<Uuid>,
    pub search: Option<String>,
    pub date_from: Option<DateTime<FixedOffset>>,
    pub date_to: Option<DateTime<FixedOffset>>,
    pub show_resolved: bool,
}

impl Default for FilterPeringatan {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            jenis_peringatan: None,
            tingkat_prioritas: None,
            status_peringatan: None,
            sppg_id: None,
            organisasi_id: None,
            search: None,
            date_from: None,
            date_to: None,
            show_resolved: false,
        }
    }
}

impl FilterPeringatan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let page = f.number("page").min(1.0, MSG_PAGE).optional_int().unwrap_or(1);
        let limit = f
            .number("limit")
            .min(1.0, MSG_LIMIT)
            .max(100.0, MSG_LIMIT)
            .optional_int()
            .map_or(DEFAULT_PAGE_SIZE, |l| l as u64);
        let out = Self {
            page: page.max(1) as u64,
            limit,
            jenis_peringatan: f.choice("jenisPeringatan").optional(),
            tingkat_prioritas: f.choice("tingkatPrioritas").optional(),
            status_peringatan: f.choice("statusPeringatan").optional(),
            sppg_id: f.uuid("sppgId").optional(),
            organisasi_id: f.uuid("organisasiId").optional(),
            search: f.text("search").optional().filter(|s| !s.trim().is_empty()),
            date_from: f.datetime("dateFrom").optional(),
            date_to: f.datetime("dateTo").optional(),
            show_resolved: f.boolean("showResolved").optional().unwrap_or(false),
        };
        f.finish(out)
    }
}
