use sea_orm::DatabaseConnection;
use serde_json::Value;
use uuid::Uuid;

use models::menu_harian::{self, CreateMenuHarian, CreateMenuWithKomponen, EvaluateAkgMenu, UpdateMenuHarian};

use crate::action::{run, run_found, ActionResponse, Operation};
use crate::actor::Actor;
use crate::services::menu_harian as svc;
use crate::services::menu_harian::MenuWithKomponen;

const SCOPE: &str = "menu_harian";

pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> ActionResponse<Vec<menu_harian::Model>> {
    run(SCOPE, Operation::List, svc::list(db, sppg_id)).await
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> ActionResponse<menu_harian::Model> {
    run_found(SCOPE, Operation::Get, svc::get_by_id(db, id)).await
}

pub async fn create(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<menu_harian::Model> {
    run(SCOPE, Operation::Create, async { svc::create(db, actor, CreateMenuHarian::parse(raw)?).await }).await
}

pub async fn create_with_komponen(db: &DatabaseConnection, actor: &Actor, raw: &Value) -> ActionResponse<MenuWithKomponen> {
    run(SCOPE, Operation::Create, async {
        svc::create_with_komponen(db, actor, CreateMenuWithKomponen::parse(raw)?).await
    })
    .await
}

pub async fn update(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<menu_harian::Model> {
    run(SCOPE, Operation::Update, async { svc::update(db, actor, id, UpdateMenuHarian::parse(raw)?).await }).await
}

pub async fn evaluate_akg(db: &DatabaseConnection, actor: &Actor, id: Uuid, raw: &Value) -> ActionResponse<menu_harian::Model> {
    run(SCOPE, Operation::Evaluate, async { svc::evaluate_akg(db, actor, id, EvaluateAkgMenu::parse(raw)?).await }).await
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ActionResponse<()> {
    run(SCOPE, Operation::Delete, svc::delete(db, id)).await
}
