//! Nutrition adequacy (AKG) reference values per age group, and the check of
//! one portion against them.
use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{StatusAkg, StatusAktif};
use crate::schema::{Fields, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "standar_akg")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kelompok_usia: String,
    pub min_kalori: f64,
    pub max_kalori: Option<f64>,
    pub min_protein: f64,
    pub min_karbohidrat: f64,
    pub min_lemak: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub deskripsi: Option<String>,
    pub status_aktif: StatusAktif,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

const MSG_KELOMPOK: &str = "Kelompok usia harus diisi";
const MSG_MIN_KALORI: &str = "Minimum kalori harus lebih dari 0";
const MSG_MAX_KALORI: &str = "Maksimum kalori harus lebih dari 0";
const MSG_PROTEIN: &str = "Minimum protein tidak boleh negatif";
const MSG_KARBOHIDRAT: &str = "Minimum karbohidrat tidak boleh negatif";
const MSG_LEMAK: &str = "Minimum lemak tidak boleh negatif";

/// Share of a threshold still counted as "almost" meeting it.
const NEAR_MISS: f64 = 0.1;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStandarAkg {
    pub kelompok_usia: String,
    pub min_kalori: f64,
    pub max_kalori: Option<f64>,
    pub min_protein: f64,
    pub min_karbohidrat: f64,
    pub min_lemak: f64,
    pub deskripsi: Option<String>,
}

impl CreateStandarAkg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            kelompok_usia: f.text("kelompokUsia").required(MSG_KELOMPOK),
            min_kalori: f.number("minKalori").min(1.0, MSG_MIN_KALORI).required(),
            max_kalori: f.number("maxKalori").min(1.0, MSG_MAX_KALORI).optional(),
            min_protein: f.number("minProtein").min(0.0, MSG_PROTEIN).required(),
            min_karbohidrat: f.number("minKarbohidrat").min(0.0, MSG_KARBOHIDRAT).required(),
            min_lemak: f.number("minLemak").min(0.0, MSG_LEMAK).required(),
            deskripsi: f.text("deskripsi").optional(),
        };
        f.finish(out)
    }

    /// New standards are `AKTIF`.
    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            kelompok_usia: Set(self.kelompok_usia),
            min_kalori: Set(self.min_kalori),
            max_kalori: Set(self.max_kalori),
            min_protein: Set(self.min_protein),
            min_karbohidrat: Set(self.min_karbohidrat),
            min_lemak: Set(self.min_lemak),
            deskripsi: Set(self.deskripsi),
            status_aktif: Set(StatusAktif::Aktif),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStandarAkg {
    pub kelompok_usia: Option<String>,
    pub min_kalori: Option<f64>,
    pub max_kalori: Option<f64>,
    pub min_protein: Option<f64>,
    pub min_karbohidrat: Option<f64>,
    pub min_lemak: Option<f64>,
    pub deskripsi: Option<String>,
    pub status_aktif: Option<StatusAktif>,
}

impl UpdateStandarAkg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            kelompok_usia: f.text("kelompokUsia").non_blank(MSG_KELOMPOK).optional(),
            min_kalori: f.number("minKalori").min(1.0, MSG_MIN_KALORI).optional(),
            max_kalori: f.number("maxKalori").min(1.0, MSG_MAX_KALORI).optional(),
            min_protein: f.number("minProtein").min(0.0, MSG_PROTEIN).optional(),
            min_karbohidrat: f.number("minKarbohidrat").min(0.0, MSG_KARBOHIDRAT).optional(),
            min_lemak: f.number("minLemak").min(0.0, MSG_LEMAK).optional(),
            deskripsi: f.text("deskripsi").optional(),
            status_aktif: f.choice("statusAktif").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.kelompok_usia { am.kelompok_usia = Set(v); }
        if let Some(v) = self.min_kalori { am.min_kalori = Set(v); }
        if let Some(v) = self.max_kalori { am.max_kalori = Set(Some(v)); }
        if let Some(v) = self.min_protein { am.min_protein = Set(v); }
        if let Some(v) = self.min_karbohidrat { am.min_karbohidrat = Set(v); }
        if let Some(v) = self.min_lemak { am.min_lemak = Set(v); }
        if let Some(v) = self.deskripsi { am.deskripsi = Set(Some(v)); }
        if let Some(v) = self.status_aktif { am.status_aktif = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// One portion's nutrient amounts, checked against the standard of an age group.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAkg {
    pub kelompok_usia: String,
    pub kalori: f64,
    pub protein: f64,
    pub karbohidrat: f64,
    pub lemak: f64,
}

impl ValidateAkg {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            kelompok_usia: f.text("kelompokUsia").required(MSG_KELOMPOK),
            kalori: f.number("kalori").required(),
            protein: f.number("protein").required(),
            karbohidrat: f.number("karbohidrat").required(),
            lemak: f.number("lemak").required(),
        };
        f.finish(out)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AkgEvaluation {
    pub status_akg: StatusAkg,
    /// Nutrients outside their range, by field name.
    pub tidak_terpenuhi: Vec<String>,
    pub standar: Model,
}

impl Model {
    /// `MEMENUHI` when every nutrient is within range, `HAMPIR_MEMENUHI` when
    /// each miss stays within 10% of its bound, `TIDAK_MEMENUHI` otherwise.
    pub fn evaluate(&self, portion: &ValidateAkg) -> AkgEvaluation {
        let mut misses: Vec<(&str, f64)> = Vec::new();
        let mut below = |name: &'static str, value: f64, min: f64| {
            if value < min {
                misses.push((name, (min - value) / min.max(f64::EPSILON)));
            }
        };
        below("kalori", portion.kalori, self.min_kalori);
        below("protein", portion.protein, self.min_protein);
        below("karbohidrat", portion.karbohidrat, self.min_karbohidrat);
        below("lemak", portion.lemak, self.min_lemak);
        if let Some(max) = self.max_kalori {
            if portion.kalori > max {
                misses.push(("kalori", (portion.kalori - max) / max));
            }
        }

        let status_akg = if misses.is_empty() {
            StatusAkg::Memenuhi
        } else if misses.iter().all(|(_, gap)| *gap <= NEAR_MISS) {
            StatusAkg::HampirMemenuhi
        } else {
            StatusAkg::TidakMemenuhi
        };
        AkgEvaluation {
            status_akg,
            tidak_terpenuhi: misses.into_iter().map(|(name, _)| name.to_string()).collect(),
            standar: self.clone(),
        }
    }
}
