use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::komponen_menu;
use models::menu_harian::{self, CreateMenuHarian, CreateMenuWithKomponen, EvaluateAkgMenu, UpdateMenuHarian};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "menu_harian";

/// A menu stored together with its ingredient lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuWithKomponen {
    #[serde(flatten)]
    pub menu: menu_harian::Model,
    pub komponen: Vec<komponen_menu::Model>,
}

/// Newest menu date first.
pub async fn list(db: &DatabaseConnection, sppg_id: Option<Uuid>) -> Result<Vec<menu_harian::Model>, ServiceError> {
    let mut q = menu_harian::Entity::find();
    if let Some(sppg) = sppg_id {
        q = q.filter(menu_harian::Column::SppgId.eq(sppg));
    }
    Ok(q.order_by_desc(menu_harian::Column::Tanggal)
        .order_by_desc(menu_harian::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<menu_harian::Model>, ServiceError> {
    Ok(menu_harian::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreateMenuHarian) -> Result<menu_harian::Model, ServiceError> {
    let sppg_id = actor.resolve_sppg(input.sppg_id)?;
    Ok(input.into_active_model(sppg_id, actor.user_id).insert(db).await?)
}

/// Menu and components commit together; nutrition per portion is derived
/// from the components.
#[instrument(skip(db, input), fields(user = %actor.user_id, komponen = input.komponen.len()))]
pub async fn create_with_komponen(
    db: &DatabaseConnection,
    actor: &Actor,
    input: CreateMenuWithKomponen,
) -> Result<MenuWithKomponen, ServiceError> {
    let sppg_id = actor.resolve_sppg(input.sppg_id)?;
    let (menu_am, items) = input.into_parts(sppg_id, actor.user_id);

    let txn = db.begin().await?;
    let menu = menu_am.insert(&txn).await?;
    let mut komponen = Vec::with_capacity(items.len());
    for item in items {
        komponen.push(item.into_active_model(menu.id, actor.user_id).insert(&txn).await?);
    }
    txn.commit().await?;

    info!(menu_id = %menu.id, komponen = komponen.len(), "menu stored with components");
    Ok(MenuWithKomponen { menu, komponen })
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateMenuHarian,
) -> Result<menu_harian::Model, ServiceError> {
    let current = find_existing::<menu_harian::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, status = ?input.status_akg))]
pub async fn evaluate_akg(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: EvaluateAkgMenu,
) -> Result<menu_harian::Model, ServiceError> {
    let current = find_existing::<menu_harian::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

/// Components are removed with the menu.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<menu_harian::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_menu, seed_organisasi, seed_sppg};
    use models::enums::StatusAkg;
    use sea_orm::PaginatorTrait;
    use serde_json::json;

    #[tokio::test]
    async fn sppg_comes_from_session_when_omitted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let input = CreateMenuHarian::parse(&json!({ "tanggal": "2024-03-01", "namaMenu": "Nasi Ikan", "porsiTarget": 200 }))?;

        let menu = create(&db, &operator().with_sppg(unit.id), input.clone()).await?;
        assert_eq!(menu.sppg_id, unit.id);
        assert_eq!(menu.status_akg, StatusAkg::BelumDievaluasi);

        let err = create(&db, &operator(), input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        Ok(())
    }

    #[tokio::test]
    async fn with_komponen_derives_nutrition() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let input = CreateMenuWithKomponen::parse(&json!({
            "tanggal": "2024-03-02",
            "namaMenu": "Nasi Ayam",
            "porsiTarget": 150,
            "sppgId": unit.id.to_string(),
            "komponen": [
                { "namaBahan": "Nasi", "jumlah": 150, "satuan": "gram", "kaloriPer100g": 130, "proteinPer100g": 2.7 },
                { "namaBahan": "Ayam", "jumlah": 0.05, "satuan": "kg", "kaloriPer100g": 155, "proteinPer100g": 27 },
                { "namaBahan": "Jeruk", "jumlah": 1, "satuan": "buah", "kaloriPer100g": 47 },
            ],
        }))?;

        let out = create_with_komponen(&db, &operator(), input).await?;
        assert_eq!(out.komponen.len(), 3);
        assert!(out.komponen.iter().all(|k| k.menu_harian_id == out.menu.id));
        assert_eq!(out.menu.kalori_per_porsi, Some(272.5));
        assert_eq!(out.menu.protein_per_porsi, Some(17.55));
        assert_eq!(out.menu.lemak_per_porsi, None);

        let stored = komponen_menu::Entity::find()
            .filter(komponen_menu::Column::MenuHarianId.eq(out.menu.id))
            .count(&db)
            .await?;
        assert_eq!(stored, 3);
        Ok(())
    }

    #[tokio::test]
    async fn failed_component_rolls_back_menu() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = CreateMenuWithKomponen::parse(&json!({
            "tanggal": "2024-03-02",
            "namaMenu": "Menu Yatim",
            "porsiTarget": 10,
            "sppgId": Uuid::new_v4().to_string(),
            "komponen": [{ "namaBahan": "Nasi", "jumlah": 100, "satuan": "g" }],
        }))?;

        let err = create_with_komponen(&db, &operator(), input).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        assert_eq!(menu_harian::Entity::find().count(&db).await?, 0);
        assert_eq!(komponen_menu::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn evaluate_and_list_newest_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let older = seed_menu(&db, unit.id, "2024-03-01").await?;
        let newer = seed_menu(&db, unit.id, "2024-03-05").await?;

        let ids: Vec<Uuid> = list(&db, Some(unit.id)).await?.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
        assert!(list(&db, Some(Uuid::new_v4())).await?.is_empty());

        let verdict = EvaluateAkgMenu::parse(&json!({ "statusAkg": "HAMPIR_MEMENUHI", "catatanGizi": "Kurang sayur" }))?;
        let evaluated = evaluate_akg(&db, &operator(), older.id, verdict).await?;
        assert_eq!(evaluated.status_akg, StatusAkg::HampirMemenuhi);
        assert_eq!(evaluated.catatan_gizi.as_deref(), Some("Kurang sayur"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_components() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let input = CreateMenuWithKomponen::parse(&json!({
            "tanggal": "2024-03-02",
            "namaMenu": "Sup",
            "porsiTarget": 10,
            "sppgId": unit.id.to_string(),
            "komponen": [{ "namaBahan": "Wortel", "jumlah": 50, "satuan": "g" }],
        }))?;
        let out = create_with_komponen(&db, &operator(), input).await?;

        delete(&db, out.menu.id).await?;
        assert_eq!(komponen_menu::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let actor = operator().with_sppg(unit.id);
        let input = CreateMenuHarian::parse(&json!({
            "tanggal": "2024-03-04",
            "namaMenu": "Nasi Ikan",
            "deskripsi": "Ikan kembung bakar",
            "porsiTarget": 200,
            "biayaPerPorsi": 12000,
        }))?;
        let created = create(&db, &actor, input).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(&db, &actor, created.id, UpdateMenuHarian::parse(&json!({ "porsiTarget": 180 }))?).await?;
        assert_eq!(updated.porsi_target, 180);
        assert_eq!(updated.nama_menu, "Nasi Ikan");
        assert_eq!(updated.deskripsi.as_deref(), Some("Ikan kembung bakar"));
        assert_eq!(updated.tanggal, created.tanggal);
        assert_eq!(updated.biaya_per_porsi, Some(12000.0));
        assert_eq!(updated.status_akg, StatusAkg::BelumDievaluasi);
        assert_eq!(updated.sppg_id, unit.id);

        delete(&db, created.id).await?;
        assert!(get_by_id(&db, created.id).await?.is_none());
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }
}
