use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::StatusAktif;
use crate::schema::{Fields, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organisasi")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nama: String,
    pub singkatan: Option<String>,
    pub status: StatusAktif,
    pub tingkat: Option<i32>,
    pub induk_organisasi_id: Option<Uuid>,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Induk,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Induk => Entity::belongs_to(Entity)
                .from(Column::IndukOrganisasiId)
                .to(Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganisasi {
    pub nama: String,
    pub singkatan: Option<String>,
    pub tingkat: Option<i32>,
    pub induk_organisasi_id: Option<Uuid>,
}

impl CreateOrganisasi {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama: f.text("nama").required("Nama organisasi harus diisi"),
            singkatan: f.text("singkatan").optional(),
            tingkat: f.number("tingkat").optional_int(),
            induk_organisasi_id: f.uuid("indukOrganisasiId").optional(),
        };
        f.finish(out)
    }

    /// New organizations always start `AKTIF`.
    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            nama: Set(self.nama),
            singkatan: Set(self.singkatan),
            status: Set(StatusAktif::Aktif),
            tingkat: Set(self.tingkat),
            induk_organisasi_id: Set(self.induk_organisasi_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganisasi {
    pub nama: Option<String>,
    pub singkatan: Option<String>,
    pub status: Option<StatusAktif>,
    pub tingkat: Option<i32>,
    pub induk_organisasi_id: Option<Uuid>,
}

impl UpdateOrganisasi {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama: f.text("nama").non_blank("Nama organisasi harus diisi").optional(),
            singkatan: f.text("singkatan").optional(),
            status: f.choice("status").optional(),
            tingkat: f.number("tingkat").optional_int(),
            induk_organisasi_id: f.uuid("indukOrganisasiId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.nama { am.nama = Set(v); }
        if let Some(v) = self.singkatan { am.singkatan = Set(Some(v)); }
        if let Some(v) = self.status { am.status = Set(v); }
        if let Some(v) = self.tingkat { am.tingkat = Set(Some(v)); }
        if let Some(v) = self.induk_organisasi_id { am.induk_organisasi_id = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
