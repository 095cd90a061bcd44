use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::komponen_menu::{self, CreateKomponenMenu, UpdateKomponenMenu};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::komponen_menu as svc;

const SCOPE: &str = "komponen_menu";

pub async fn list(db: &DatabaseConnection, menu_harian_id: Option<Uuid>) -> ActionResponse<Vec<komponen_menu::Model>> {
    match menu_harian_id {
        Some(menu) => run(SCOPE, Operation::List, svc::list_by_menu(db, menu)).await,
        None => run(SCOPE, Operation::List, svc::list(db)).await,
    }
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<komponen_menu::Model> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<komponen_menu::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateKomponenMenu::parse(raw)?).await }).await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<komponen_menu::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateKomponenMenu::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
