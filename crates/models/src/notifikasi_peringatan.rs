//! Per-user delivery of an alert: read and dismissed flags for one recipient.
use chrono::{DateTime, FixedOffset};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{Fields, ValidationErrors};
use crate::{pengguna, peringatan};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifikasi_peringatan")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub peringatan_id: Uuid,
    pub user_id: Uuid,
    pub dibaca: bool,
    pub dibaca_at: Option<DateTimeWithTimeZone>,
    pub dismiss: bool,
    pub dismiss_at: Option<DateTimeWithTimeZone>,
    pub channel_email: bool,
    pub channel_in_app: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Peringatan,
    Pengguna,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Peringatan => Entity::belongs_to(peringatan::Entity)
                .from(Column::PeringatanId)
                .to(peringatan::Column::Id)
                .into(),
            Relation::Pengguna => Entity::belongs_to(pengguna::Entity)
                .from(Column::UserId)
                .to(pengguna::Column::Id)
                .into(),
        }
    }
}

impl Related<peringatan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Peringatan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub const DEFAULT_LIMIT: u64 = 20;

const MSG_IDS: &str = "Minimal satu notifikasi harus dipilih";
const MSG_ID: &str = "ID notifikasi tidak valid";
const MSG_ACTION: &str = "Nilai harus salah satu dari: read, dismiss, undismiss";
const MSG_LIMIT: &str = "Batas data harus di antara 1 dan 100";

/// Unread, not dismissed, delivered in-app and by email.
pub fn new_for(peringatan_id: Uuid, user_id: Uuid, now: DateTime<FixedOffset>) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        peringatan_id: Set(peringatan_id),
        user_id: Set(user_id),
        dibaca: Set(false),
        dibaca_at: Set(None),
        dismiss: Set(false),
        dismiss_at: Set(None),
        channel_email: Set(true),
        channel_in_app: Set(true),
        created_at: Set(now),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AksiNotifikasi {
    Read,
    Dismiss,
    Undismiss,
}

impl AksiNotifikasi {
    fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "read" => Some(Self::Read),
            "dismiss" => Some(Self::Dismiss),
            "undismiss" => Some(Self::Undismiss),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkNotifikasi {
    pub notifikasi_ids: Vec<Uuid>,
    pub action: AksiNotifikasi,
}

impl MarkNotifikasi {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let labels = f.list("notifikasiIds").min_items(1, MSG_IDS).or_empty();
        let notifikasi_ids: Vec<Uuid> = labels.iter().filter_map(|s| Uuid::parse_str(s.trim()).ok()).collect();
        if notifikasi_ids.len() != labels.len() {
            f.fail("notifikasiIds", MSG_ID);
        }
        let action = match f.text("action").optional().as_deref().and_then(AksiNotifikasi::from_label) {
            Some(a) => a,
            None => {
                f.fail("action", MSG_ACTION);
                AksiNotifikasi::Read
            }
        };
        f.finish(Self { notifikasi_ids, action })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterNotifikasi {
    pub limit: u64,
    pub unread_only: bool,
}

impl Default for FilterNotifikasi {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT, unread_only: false }
    }
}

impl FilterNotifikasi {
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut f = Fields::new(raw);
        let out = Self {
            limit: f
                .number("limit")
                .min(1.0, MSG_LIMIT)
                .max(100.0, MSG_LIMIT)
                .optional_int()
                .map_or(DEFAULT_LIMIT, |l| l as u64),
            unread_only: f.boolean("unreadOnly").optional().unwrap_or(false),
        };
        f.finish(out)
    }
}
