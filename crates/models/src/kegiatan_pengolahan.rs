use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{JenisPengolahan, StatusKegiatan};
use crate::json::StringList;
use crate::schema::{Fields, ValidationErrors};
use crate::{menu_harian, sppg};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kegiatan_pengolahan")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tanggal_pengolahan: Date,
    pub jam_mulai: DateTimeWithTimeZone,
    pub jam_selesai: Option<DateTimeWithTimeZone>,
    pub jenis_pengolahan: JenisPengolahan,
    pub target_porsi: i32,
    pub porsi_terealisasi: Option<i32>,
    pub suhu_pengolahan: Option<f64>,
    pub metode_pengolahan: String,
    pub penanggung_jawab: String,
    pub status_kegiatan: StatusKegiatan,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan_proses: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub catatan_mutu: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub foto_proses: StringList,
    pub sppg_id: Uuid,
    pub menu_harian_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Sppg,
    MenuHarian,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sppg => Entity::belongs_to(sppg::Entity)
                .from(Column::SppgId)
                .to(sppg::Column::Id)
                .into(),
            Relation::MenuHarian => Entity::belongs_to(menu_harian::Entity)
                .from(Column::MenuHarianId)
                .to(menu_harian::Column::Id)
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

const MSG_TANGGAL: &str = "Tanggal pengolahan harus diisi";
const MSG_JAM_MULAI: &str = "Jam mulai harus diisi";
const MSG_TARGET: &str = "Target porsi minimal 1";
const MSG_REALISASI: &str = "Porsi terealisasi tidak boleh negatif";
const MSG_SUHU: &str = "Suhu pengolahan harus di antara -50 dan 200 °C";
const MSG_METODE: &str = "Metode pengolahan harus diisi";
const MSG_PJ: &str = "Penanggung jawab harus diisi";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKegiatanPengolahan {
    pub tanggal_pengolahan: NaiveDate,
    pub jam_mulai: DateTimeWithTimeZone,
    pub jam_selesai: Option<DateTimeWithTimeZone>,
    pub jenis_pengolahan: JenisPengolahan,
    pub target_porsi: i32,
    pub porsi_terealisasi: Option<i32>,
    pub suhu_pengolahan: Option<f64>,
    pub metode_pengolahan: String,
    pub penanggung_jawab: String,
    pub catatan_proses: Option<String>,
    pub catatan_mutu: Option<String>,
    pub foto_proses: Vec<String>,
    pub sppg_id: Uuid,
    pub menu_harian_id: Uuid,
}

impl CreateKegiatanPengolahan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal_pengolahan: f.date("tanggalPengolahan").required(MSG_TANGGAL),
            jam_mulai: f.datetime("jamMulai").required(MSG_JAM_MULAI),
            jam_selesai: f.datetime("jamSelesai").optional(),
            jenis_pengolahan: f.choice("jenisPengolahan").required(),
            target_porsi: f.number("targetPorsi").min(1.0, MSG_TARGET).required_int(),
            porsi_terealisasi: f.number("porsiTerealisasi").min(0.0, MSG_REALISASI).optional_int(),
            suhu_pengolahan: f.number("suhuPengolahan").min(-50.0, MSG_SUHU).max(200.0, MSG_SUHU).optional(),
            metode_pengolahan: f.text("metodePengolahan").required(MSG_METODE),
            penanggung_jawab: f.text("penanggungJawab").required(MSG_PJ),
            catatan_proses: f.text("catatanProses").optional(),
            catatan_mutu: f.text("catatanMutu").optional(),
            foto_proses: f.list("fotoProses").or_empty(),
            sppg_id: f.uuid("sppgId").required("SPPG harus dipilih"),
            menu_harian_id: f.uuid("menuHarianId").required("Menu harus dipilih"),
        };
        f.finish(out)
    }

    /// Sessions start in `PERSIAPAN`.
    pub fn into_active_model(self, created_by: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            tanggal_pengolahan: Set(self.tanggal_pengolahan),
            jam_mulai: Set(self.jam_mulai),
            jam_selesai: Set(self.jam_selesai),
            jenis_pengolahan: Set(self.jenis_pengolahan),
            target_porsi: Set(self.target_porsi),
            porsi_terealisasi: Set(self.porsi_terealisasi),
            suhu_pengolahan: Set(self.suhu_pengolahan),
            metode_pengolahan: Set(self.metode_pengolahan),
            penanggung_jawab: Set(self.penanggung_jawab),
            status_kegiatan: Set(StatusKegiatan::Persiapan),
            catatan_proses: Set(self.catatan_proses),
            catatan_mutu: Set(self.catatan_mutu),
            foto_proses: Set(self.foto_proses.into()),
            sppg_id: Set(self.sppg_id),
            menu_harian_id: Set(self.menu_harian_id),
            created_by: Set(created_by),
            created_at: Set(Utc::now().into()),
            updated_by: Set(None),
            updated_at: Set(None),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKegiatanPengolahan {
    pub tanggal_pengolahan: Option<NaiveDate>,
    pub jam_mulai: Option<DateTimeWithTimeZone>,
    pub jam_selesai: Option<DateTimeWithTimeZone>,
    pub jenis_pengolahan: Option<JenisPengolahan>,
    pub target_porsi: Option<i32>,
    pub porsi_terealisasi: Option<i32>,
    pub suhu_pengolahan: Option<f64>,
    pub metode_pengolahan: Option<String>,
    pub penanggung_jawab: Option<String>,
    pub status_kegiatan: Option<StatusKegiatan>,
    pub catatan_proses: Option<String>,
    pub catatan_mutu: Option<String>,
    pub foto_proses: Option<Vec<String>>,
    pub sppg_id: Option<Uuid>,
    pub menu_harian_id: Option<Uuid>,
}

impl UpdateKegiatanPengolahan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            tanggal_pengolahan: f.date("tanggalPengolahan").optional(),
            jam_mulai: f.datetime("jamMulai").optional(),
            jam_selesai: f.datetime("jamSelesai").optional(),
            jenis_pengolahan: f.choice("jenisPengolahan").optional(),
            target_porsi: f.number("targetPorsi").min(1.0, MSG_TARGET).optional_int(),
            porsi_terealisasi: f.number("porsiTerealisasi").min(0.0, MSG_REALISASI).optional_int(),
            suhu_pengolahan: f.number("suhuPengolahan").min(-50.0, MSG_SUHU).max(200.0, MSG_SUHU).optional(),
            metode_pengolahan: f.text("metodePengolahan").non_blank(MSG_METODE).optional(),
            penanggung_jawab: f.text("penanggungJawab").non_blank(MSG_PJ).optional(),
            status_kegiatan: f.choice("statusKegiatan").optional(),
            catatan_proses: f.text("catatanProses").optional(),
            catatan_mutu: f.text("catatanMutu").optional(),
            foto_proses: f.list("fotoProses").optional(),
            sppg_id: f.uuid("sppgId").optional(),
            menu_harian_id: f.uuid("menuHarianId").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        if let Some(v) = self.tanggal_pengolahan { am.tanggal_pengolahan = Set(v); }
        if let Some(v) = self.jam_mulai { am.jam_mulai = Set(v); }
        if let Some(v) = self.jam_selesai { am.jam_selesai = Set(Some(v)); }
        if let Some(v) = self.jenis_pengolahan { am.jenis_pengolahan = Set(v); }
        if let Some(v) = self.target_porsi { am.target_porsi = Set(v); }
        if let Some(v) = self.porsi_terealisasi { am.porsi_terealisasi = Set(Some(v)); }
        if let Some(v) = self.suhu_pengolahan { am.suhu_pengolahan = Set(Some(v)); }
        if let Some(v) = self.metode_pengolahan { am.metode_pengolahan = Set(v); }
        if let Some(v) = self.penanggung_jawab { am.penanggung_jawab = Set(v); }
        if let Some(v) = self.status_kegiatan { am.status_kegiatan = Set(v); }
        if let Some(v) = self.catatan_proses { am.catatan_proses = Set(Some(v)); }
        if let Some(v) = self.catatan_mutu { am.catatan_mutu = Set(Some(v)); }
        if let Some(v) = self.foto_proses { am.foto_proses = Set(v.into()); }
        if let Some(v) = self.sppg_id { am.sppg_id = Set(v); }
        if let Some(v) = self.menu_harian_id { am.menu_harian_id = Set(v); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

/// Closing a session with its realized portions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteKegiatan {
    pub jam_selesai: DateTimeWithTimeZone,
    pub porsi_terealisasi: i32,
    pub status_kegiatan: StatusKegiatan,
    pub catatan_proses: Option<String>,
    pub catatan_mutu: Option<String>,
}

impl CompleteKegiatan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            jam_selesai: f.datetime("jamSelesai").required("Jam selesai harus diisi"),
            porsi_terealisasi: f.number("porsiTerealisasi").min(0.0, MSG_REALISASI).required_int(),
            status_kegiatan: f.choice("statusKegiatan").only(&StatusKegiatan::FINISHED).required(),
            catatan_proses: f.text("catatanProses").optional(),
            catatan_mutu: f.text("catatanMutu").optional(),
        };
        f.finish(out)
    }

    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        am.jam_selesai = Set(Some(self.jam_selesai));
        am.porsi_terealisasi = Set(Some(self.porsi_terealisasi));
        am.status_kegiatan = Set(self.status_kegiatan);
        if let Some(v) = self.catatan_proses { am.catatan_proses = Set(Some(v)); }
        if let Some(v) = self.catatan_mutu { am.catatan_mutu = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusKegiatan {
    pub status_kegiatan: StatusKegiatan,
    pub catatan: Option<String>,
}

impl UpdateStatusKegiatan {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            status_kegiatan: f.choice("statusKegiatan").required(),
            catatan: f.text("catatan").optional(),
        };
        f.finish(out)
    }

    /// The free-text note lands in `catatan_proses`.
    pub fn apply(self, current: Model, updated_by: Uuid) -> ActiveModel {
        let mut am: ActiveModel = current.into();
        am.status_kegiatan = Set(self.status_kegiatan);
        if let Some(v) = self.catatan { am.catatan_proses = Set(Some(v)); }
        am.updated_by = Set(Some(updated_by));
        am.updated_at = Set(Some(Utc::now().into()));
        am
    }
}
