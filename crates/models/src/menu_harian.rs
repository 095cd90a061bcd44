use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::StatusAkg;
use crate::json::StringList;
use crate::komponen_menu::{self, KomponenInput};
use crate::schema::{Fields, ValidationErrors};
use crate::sppg;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_harian")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tanggal: Date,
    pub nama_menu: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub deskripsi: Option<String>,
    pub porsi_target: i32,
    pub kalori_per_porsi: Option<f64>,
    pub protein_per_porsi: Option<f64>,
    pub karbohidrat_per_porsi: Option<f64>,
    pub lemak_per_porsi: Option<f64>,
    pub status_akg: StatusAkg,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan_gizi: Option<String>,
    pub biaya_per_porsi: Option<f64>,
    #[sea_orm(column_type = "Json")]
    pub foto_menu: StringList,
    pub sppg_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sppg,
    KomponenMenu,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sppg => Entity::belongs_to(sppg::Entity)
                .from(Column::SppgId)
                .to(sppg::Column::Id)
                .into(),
            Relation::KomponenMenu => Entity::has_many(komponen_menu::Entity).into(),
        }
    }
}

impl Related<sppg::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sppg.def()
    }
}

impl Related<komponen_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KomponenMenu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const MSG_TANGGAL: &str = "Tanggal menu harus diisi";
const MSG_NAMA_MENU: &str = "Nama menu harus diisi";
const MSG_PORSI: &str = "Porsi target minimal 1";
const MSG_NON_NEGATIVE: &str = "Nilai tidak boleh negatif";

/// Per-portion nutrition totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrisiPorsi {
    pub kalori: Option<f64>,
    pub protein: Option<f64>,
    pub karbohidrat: Option<f64>,
    pub lemak: Option<f64>,
}

impl NutrisiPorsi {
    /// Sum per-100 g values over components measured in a mass unit.
    /// Component amounts are per portion; lines in other units are skipped.
    pub fn from_komponen(items: &[KomponenInput]) -> Self {
        fn add(total: &mut Option<f64>, per_100g: Option<f64>, grams: f64) {
            if let Some(v) = per_100g {
                *total = Some(total.unwrap_or(0.0) + v * grams / 100.0);
            }
        }
        fn round2(v: Option<f64>) -> Option<f64> {
            v.map(|v| (v * 100.0).round() / 100.0)
        }

        let mut out = Self::default();
        for k in items {
            let Some(per_unit) = komponen_menu::grams_per_unit(&k.satuan) else { continue };
            let grams = k.jumlah * per_unit;
            add(&mut out.kalori, k.kalori_per_100g, grams);
            add(&mut out.protein, k.protein_per_100g, grams);
            add(&mut out.karbohidrat, k.karbohidrat_per_100g, grams);
            add(&mut out.lemak, k.lemak_per_100g, grams);
        }
        Self {
            kalori: round2(out.kalori),
            protein: round2(out.protein),
            karbohidrat: round2(out.karbohidrat),
            lemak: round2(out.lemak),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuHarian {
    pub tanggal: NaiveDate,
    pub nama_menu: String,
    pub deskripsi: Option<String>,
    pub porsi_target: i32,
    pub kalori_per_porsi: Option<f64>,
    pub protein_per_porsi: Option<f64>,
    pub karbohidrat_per_porsi: Option<f64>,
    pub lemak_per_porsi: Option<f64>,
    pub biaya_per_porsi: Option<f64>,
    pub foto_menu: Vec<String>,
    /// Falls back to the caller's own SPPG when omitted.
    pub sppg_id: Option<Uuid>,
}

impl CreateMenuHarian {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").required(MSG_TANGGAL),
            nama_menu: f.text("namaMenu").required(MSG_NAMA_MENU),
            deskripsi: f.text("deskripsi").optional(),
            porsi_target: f.number("porsiTarget").min(1.0, MSG_PORSI).required_int(),
            kalori_per_porsi: f.number("kaloriPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            protein_per_porsi: f.number("proteinPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            karbohidrat_per_porsi: f.number("karbohidratPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            lemak_per_porsi: f.number("lemakPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            biaya_per_porsi: f.number("biayaPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            foto_menu: f.list("fotoMenu").or_empty(),
            sppg_id: f.uuid("sppgId").optional(),
        };
        f.finish(out)
    }

    /// New menus start `BELUM_DIEVALUASI`.
    pub fn into_active_model(self, sppg_id: Uuid, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            tanggal: Set(self.tanggal),
            nama_menu: Set(self.nama_menu),
            deskripsi: Set(self.deskripsi),
            porsi_target: Set(self.porsi_target),
            kalori_per_porsi: Set(self.kalori_per_porsi),
            protein_per_porsi: Set(self.protein_per_porsi),
            karbohidrat_per_porsi: Set(self.karbohidrat_per_porsi),
            lemak_per_porsi: Set(self.lemak_per_porsi),
            status_akg: Set(StatusAkg::BelumDievaluasi),
            catatan_gizi: Set(None),
            biaya_per_porsi: Set(self.biaya_per_porsi),
            foto_menu: Set(self.foto_menu.into()),
            sppg_id: Set(sppg_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

/// A menu together with its ingredient lines; nutrition is derived, not accepted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuWithKomponen {
    pub tanggal: NaiveDate,
    pub nama_menu: String,
    pub deskripsi: Option<String>,
    pub porsi_target: i32,
    pub biaya_per_porsi: Option<f64>,
    pub foto_menu: Vec<String>,
    pub sppg_id: Option<Uuid>,
    pub komponen: Vec<KomponenInput>,
}

impl CreateMenuWithKomponen {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").required(MSG_TANGGAL),
            nama_menu: f.text("namaMenu").required(MSG_NAMA_MENU),
            deskripsi: f.text("deskripsi").optional(),
            porsi_target: f.number("porsiTarget").min(1.0, MSG_PORSI).required_int(),
            biaya_per_porsi: f.number("biayaPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            foto_menu: f.list("fotoMenu").or_empty(),
            sppg_id: f.uuid("sppgId").optional(),
            komponen: f.objects("komponen", 1, "Minimal 1 komponen menu harus diisi", KomponenInput::read),
        };
        f.finish(out)
    }

    /// Split into the menu row (with derived nutrition) and the component lines.
    pub fn into_parts(self, sppg_id: Uuid, created_by: Uuid) -> (ActiveModel, Vec<KomponenInput>) {
        let gizi = NutrisiPorsi::from_komponen(&self.komponen);
        let menu = CreateMenuHarian {
            tanggal: self.tanggal,
            nama_menu: self.nama_menu,
            deskripsi: self.deskripsi,
            porsi_target: self.porsi_target,
            kalori_per_porsi: gizi.kalori,
            protein_per_porsi: gizi.protein,
            karbohidrat_per_porsi: gizi.karbohidrat,
            lemak_per_porsi: gizi.lemak,
            biaya_per_porsi: self.biaya_per_porsi,
            foto_menu: self.foto_menu,
            sppg_id: Some(sppg_id),
        };
        (menu.into_active_model(sppg_id, created_by), self.komponen)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuHarian {
    pub tanggal: Option<NaiveDate>,
    pub nama_menu: Option<String>,
    pub deskripsi: Option<String>,
    pub porsi_target: Option<i32>,
    pub kalori_per_porsi: Option<f64>,
    pub protein_per_porsi: Option<f64>,
    pub karbohidrat_per_porsi: Option<f64>,
    pub lemak_per_porsi: Option<f64>,
    pub status_akg: Option<StatusAkg>,
    pub catatan_gizi: Option<String>,
    pub biaya_per_porsi: Option<f64>,
    pub foto_menu: Option<Vec<String>>,
    pub sppg_id: Option<Uuid>,
}

impl UpdateMenuHarian {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal: f.date("tanggal").optional(),
            nama_menu: f.text("namaMenu").non_blank(MSG_NAMA_MENU).optional(),
            deskripsi: f.text("deskripsi").optional(),
            porsi_target: f.number("porsiTarget").min(1.0, MSG_PORSI).optional_int(),
            kalori_per_porsi: f.number("kaloriPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            protein_per_porsi: f.number("proteinPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            karbohidrat_per_porsi: f.number("karbohidratPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            lemak_per_porsi: f.number("lemakPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            status_akg: f.choice("statusAkg").optional(),
            catatan_gizi: f.text("catatanGizi").optional(),
            biaya_per_porsi: f.number("biayaPerPorsi").min(0.0, MSG_NON_NEGATIVE).optional(),
            foto_menu: f.list("fotoMenu").optional(),
            sppg_id: f.uuid("sppgId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.tanggal { am.tanggal = Set(v); }
        if let Some(v) = self.nama_menu { am.nama_menu = Set(v); }
        if let Some(v) = self.deskripsi { am.deskripsi = Set(Some(v)); }
        if let Some(v) = self.porsi_target { am.porsi_target = Set(v); }
        if let Some(v) = self.kalori_per_porsi { am.kalori_per_porsi = Set(Some(v)); }
        if let Some(v) = self.protein_per_porsi { am.protein_per_porsi = Set(Some(v)); }
        if let Some(v) = self.karbohidrat_per_porsi { am.karbohidrat_per_porsi = Set(Some(v)); }
        if let Some(v) = self.lemak_per_porsi { am.lemak_per_porsi = Set(Some(v)); }
        if let Some(v) = self.status_akg { am.status_akg = Set(v); }
        if let Some(v) = self.catatan_gizi { am.catatan_gizi = Set(Some(v)); }
        if let Some(v) = self.biaya_per_porsi { am.biaya_per_porsi = Set(Some(v)); }
        if let Some(v) = self.foto_menu { am.foto_menu = Set(v.into()); }
        if let Some(v) = self.sppg_id { am.sppg_id = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Nutritionist verdict on a menu.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAkgMenu {
    pub status_akg: StatusAkg,
    pub catatan_gizi: Option<String>,
}

impl EvaluateAkgMenu {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            status_akg: f.choice("statusAkg").only(&StatusAkg::EVALUATED).required(),
            catatan_gizi: f.text("catatanGizi").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        am.status_akg = Set(self.status_akg);
        if let Some(v) = self.catatan_gizi { am.catatan_gizi = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
