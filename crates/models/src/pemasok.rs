use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{JenisPemasok, StatusAktif};
use crate::json::StringList;
use crate::schema::{Fields, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pemasok")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nama: String,
    #[sea_orm(column_type = "Text")]
    pub alamat: String,
    pub kontak: Option<String>,
    pub jenis_pemasok: JenisPemasok,
    pub status_aktif: StatusAktif,
    #[sea_orm(column_type = "Json")]
    pub sertifikat: StringList,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_NAMA: &str = "Nama pemasok harus diisi";
const MSG_ALAMAT: &str = "Alamat harus diisi";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePemasok {
    pub nama: String,
    pub alamat: String,
    pub kontak: Option<String>,
    pub jenis_pemasok: JenisPemasok,
    pub sertifikat: Vec<String>,
}

impl CreatePemasok {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama: f.text("nama").required(MSG_NAMA),
            alamat: f.text("alamat").required(MSG_ALAMAT),
            kontak: f.text("kontak").optional(),
            jenis_pemasok: f.choice("jenisPemasok").required(),
            sertifikat: f.list("sertifikat").or_empty(),
        };
        f.finish(out)
    }

    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            nama: Set(self.nama),
            alamat: Set(self.alamat),
            kontak: Set(self.kontak),
            jenis_pemasok: Set(self.jenis_pemasok),
            status_aktif: Set(StatusAktif::Aktif),
            sertifikat: Set(self.sertifikat.into()),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePemasok {
    pub nama: Option<String>,
    pub alamat: Option<String>,
    pub kontak: Option<String>,
    pub jenis_pemasok: Option<JenisPemasok>,
    pub status_aktif: Option<StatusAktif>,
    pub sertifikat: Option<Vec<String>>,
}

impl UpdatePemasok {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama: f.text("nama").non_blank(MSG_NAMA).optional(),
            alamat: f.text("alamat").non_blank(MSG_ALAMAT).optional(),
            kontak: f.text("kontak").optional(),
            jenis_pemasok: f.choice("jenisPemasok").optional(),
            status_aktif: f.choice("statusAktif").optional(),
            sertifikat: f.list("sertifikat").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.nama { am.nama = Set(v); }
        if let Some(v) = self.alamat { am.alamat = Set(v); }
        if let Some(v) = self.kontak { am.kontak = Set(Some(v)); }
        if let Some(v) = self.jenis_pemasok { am.jenis_pemasok = Set(v); }
        if let Some(v) = self.status_aktif { am.status_aktif = Set(v); }
        if let Some(v) = self.sertifikat { am.sertifikat = Set(v.into()); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
