use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::menu_harian;
use crate::schema::{Fields, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "komponen_menu")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nama_bahan: String,
    pub jumlah: f64,
    pub satuan: String,
    #[serde(rename = "kaloriPer100g")]
    pub kalori_per_100g: Option<f64>,
    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: Option<f64>,
    #[serde(rename = "karbohidratPer100g")]
    pub karbohidrat_per_100g: Option<f64>,
    #[serde(rename = "lemakPer100g")]
    pub lemak_per_100g: Option<f64>,
    pub menu_harian_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MenuHarian,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MenuHarian => Entity::belongs_to(menu_harian::Entity)
                .from(Column::MenuHarianId)
                .to(menu_harian::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<menu_harian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuHarian.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub(crate) const MSG_NAMA_BAHAN: &str = "Nama bahan harus diisi";
pub(crate) const MSG_JUMLAH: &str = "Jumlah harus lebih dari 0";
pub(crate) const MSG_SATUAN: &str = "Satuan harus diisi";
const MSG_GIZI: &str = "Nilai gizi tidak boleh negatif";

/// Ingredient line without its menu reference; shared with menu-with-components input.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KomponenInput {
    pub nama_bahan: String,
    pub jumlah: f64,
    pub satuan: String,
    #[serde(rename = "kaloriPer100g")]
    pub kalori_per_100g: Option<f64>,
    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: Option<f64>,
    #[serde(rename = "karbohidratPer100g")]
    pub karbohidrat_per_100g: Option<f64>,
    #[serde(rename = "lemakPer100g")]
    pub lemak_per_100g: Option<f64>,
}

impl KomponenInput {
    pub(crate) fn read(f: &mut Fields<'_>) -> Self {
        Self {
            nama_bahan: f.text("namaBahan").required(MSG_NAMA_BAHAN),
            jumlah: f.number("jumlah").min(0.1, MSG_JUMLAH).required(),
            satuan: f.text("satuan").required(MSG_SATUAN),
            kalori_per_100g: f.number("kaloriPer100g").min(0.0, MSG_GIZI).optional(),
            protein_per_100g: f.number("proteinPer100g").min(0.0, MSG_GIZI).optional(),
            karbohidrat_per_100g: f.number("karbohidratPer100g").min(0.0, MSG_GIZI).optional(),
            lemak_per_100g: f.number("lemakPer100g").min(0.0, MSG_GIZI).optional(),
        }
    }

    pub fn into_active_model(self, menu_harian_id: Uuid, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            nama_bahan: Set(self.nama_bahan),
            jumlah: Set(self.jumlah),
            satuan: Set(self.satuan),
            kalori_per_100g: Set(self.kalori_per_100g),
            protein_per_100g: Set(self.protein_per_100g),
            karbohidrat_per_100g: Set(self.karbohidrat_per_100g),
            lemak_per_100g: Set(self.lemak_per_100g),
            menu_harian_id: Set(menu_harian_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKomponenMenu {
    #[serde(flatten)]
    pub komponen: KomponenInput,
    pub menu_harian_id: Uuid,
}

impl CreateKomponenMenu {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let komponen = KomponenInput::read(&mut f);
        let menu_harian_id = f.uuid("menuHarianId").required("Menu harus dipilih");
        f.finish(Self { komponen, menu_harian_id })
    }

    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        self.komponen.into_active_model(self.menu_harian_id, created_by)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKomponenMenu {
    pub nama_bahan: Option<String>,
    pub jumlah: Option<f64>,
    pub satuan: Option<String>,
    #[serde(rename = "kaloriPer100g")]
    pub kalori_per_100g: Option<f64>,
    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: Option<f64>,
    #[serde(rename = "karbohidratPer100g")]
    pub karbohidrat_per_100g: Option<f64>,
    #[serde(rename = "lemakPer100g")]
    pub lemak_per_100g: Option<f64>,
    pub menu_harian_id: Option<Uuid>,
}

impl UpdateKomponenMenu {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            nama_bahan: f.text("namaBahan").non_blank(MSG_NAMA_BAHAN).optional(),
            jumlah: f.number("jumlah").min(0.1, MSG_JUMLAH).optional(),
            satuan: f.text("satuan").non_blank(MSG_SATUAN).optional(),
            kalori_per_100g: f.number("kaloriPer100g").min(0.0, MSG_GIZI).optional(),
            protein_per_100g: f.number("proteinPer100g").min(0.0, MSG_GIZI).optional(),
            karbohidrat_per_100g: f.number("karbohidratPer100g").min(0.0, MSG_GIZI).optional(),
            lemak_per_100g: f.number("lemakPer100g").min(0.0, MSG_GIZI).optional(),
            menu_harian_id: f.uuid("menuHarianId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.nama_bahan { am.nama_bahan = Set(v); }
        if let Some(v) = self.jumlah { am.jumlah = Set(v); }
        if let Some(v) = self.satuan { am.satuan = Set(v); }
        if let Some(v) = self.kalori_per_100g { am.kalori_per_100g = Set(Some(v)); }
        if let Some(v) = self.protein_per_100g { am.protein_per_100g = Set(Some(v)); }
        if let Some(v) = self.karbohidrat_per_100g { am.karbohidrat_per_100g = Set(Some(v)); }
        if let Some(v) = self.lemak_per_100g { am.lemak_per_100g = Set(Some(v)); }
        if let Some(v) = self.menu_harian_id { am.menu_harian_id = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Grams represented by one unit of `satuan`, for units that convert to mass.
pub fn grams_per_unit(satuan: &str) -> Option<f64> {
    match satuan.trim().to_lowercase().as_str() {
        "g" | "gr" | "gram" => Some(1.0),
        "kg" | "kilogram" => Some(1000.0),
        "mg" | "miligram" => Some(0.001),
        "ons" => Some(100.0),
        _ => None,
    }
}
