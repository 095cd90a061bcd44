use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use models::notifikasi_peringatan::{FilterNotifikasi, MarkNotifikasi};

use crate::action::{run, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::notifikasi_peringatan as svc;
use crate::services::notifikasi_peringatan::NotifikasiWithPeringatan;

const SCOPE: &str = "notifikasi_peringatan";

/// `raw` holds the query parameters (`limit`, `unreadOnly`).
pub async fn list(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<Vec<NotifikasiWithPeringatan>> {
    run(SCOPE, Operation::List, async { svc::list_for_user(db, actor, &FilterNotifikasi::parse(raw)?).await }).await
}

/// Number of notifications changed.
pub async fn mark(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<u64> {
    run(SCOPE, Operation::Update, async { svc::mark(db, actor, MarkNotifikasi::parse(raw)?, Utc::now()).await }).await
}
