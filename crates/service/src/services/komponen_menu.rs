use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::komponen_menu::{self, CreateKomponenMenu, UpdateKomponenMenu};

use super::{delete_existing, find_existing};
use crate::actor::Actor;
use crate::errors::ServiceError;

const ENTITY: &str = "komponen_menu";

pub async fn list(db: &DatabaseConnection) -> Result<Vec<komponen_menu::Model>, ServiceError> {
    Ok(komponen_menu::Entity::find()
        .order_by_desc(komponen_menu::Column::CreatedAt)
        .all(db)
        .await?)
}

/// Lines of one menu in entry order.
pub async fn list_by_menu(db: &DatabaseConnection, menu_harian_id: Uuid) -> Result<Vec<komponen_menu::Model>, ServiceError> {
    Ok(komponen_menu::Entity::find()
        .filter(komponen_menu::Column::MenuHarianId.eq(menu_harian_id))
        .order_by_asc(komponen_menu::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<komponen_menu::Model>, ServiceError> {
    Ok(komponen_menu::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id, menu = %input.menu_harian_id))]
pub async fn create(db: &DatabaseConnection, actor: &Actor, input: CreateKomponenMenu) -> Result<komponen_menu::Model, ServiceError> {
    Ok(input.into_active_model(actor.user_id).insert(db).await?)
}

#[instrument(skip(db, input), fields(user = %actor.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    actor: &Actor,
    id: Uuid,
    input: UpdateKomponenMenu,
) -> Result<komponen_menu::Model, ServiceError> {
    let current = find_existing::<komponen_menu::Entity, _>(db, id, ENTITY).await?;
    Ok(input.apply(current, actor.user_id).update(db).await?)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    delete_existing::<komponen_menu::Entity, _>(db, id, ENTITY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::test_support::{get_db, operator, seed_menu, seed_organisasi, seed_sppg};
    use serde_json::json;

    #[tokio::test]
    async fn lines_belong_to_their_menu() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        let other = seed_menu(&db, unit.id, "2024-03-02").await?;
        let actor = operator();

        for (menu_id, nama) in [(menu.id, "Nasi"), (menu.id, "Tempe"), (other.id, "Roti")] {
            let input = CreateKomponenMenu::parse(&json!({
                "namaBahan": nama,
                "jumlah": 100,
                "satuan": "g",
                "menuHarianId": menu_id.to_string(),
            }))?;
            create(&db, &actor, input).await?;
        }

        let lines = list_by_menu(&db, menu.id).await?;
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|k| k.menu_harian_id == menu.id));
        assert_eq!(list(&db).await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_amount_and_reject_unknown_menu() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        let actor = operator();
        let line = create(
            &db,
            &actor,
            CreateKomponenMenu::parse(&json!({ "namaBahan": "Bayam", "jumlah": 40, "satuan": "g", "menuHarianId": menu.id.to_string() }))?,
        )
        .await?;

        let updated = update(&db, &actor, line.id, UpdateKomponenMenu::parse(&json!({ "jumlah": "55.5" }))?).await?;
        assert_eq!(updated.jumlah, 55.5);
        assert_eq!(updated.nama_bahan, "Bayam");

        let orphan = CreateKomponenMenu::parse(&json!({
            "namaBahan": "Bayam",
            "jumlah": 40,
            "satuan": "g",
            "menuHarianId": Uuid::new_v4().to_string(),
        }))?;
        let err = create(&db, &actor, orphan).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        Ok(())
    }

    #[tokio::test]
    async fn round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let org = seed_organisasi(&db, "Dinkes").await?;
        let unit = seed_sppg(&db, org.id, "SPPG A").await?;
        let menu = seed_menu(&db, unit.id, "2024-03-01").await?;
        let actor = operator();
        let input = CreateKomponenMenu::parse(&json!({
            "namaBahan": "Tempe",
            "jumlah": 50,
            "satuan": "g",
            "kaloriPer100g": 193,
            "proteinPer100g": 19,
            "menuHarianId": menu.id.to_string(),
        }))?;
        let created = create(&db, &actor, input).await?;
        assert_eq!(get_by_id(&db, created.id).await?, Some(created.clone()));

        let updated = update(&db, &actor, created.id, UpdateKomponenMenu::parse(&json!({ "lemakPer100g": 11 }))?).await?;
        assert_eq!(updated.lemak_per_100g, Some(11.0));
        assert_eq!(updated.nama_bahan, "Tempe");
        assert_eq!(updated.jumlah, 50.0);
        assert_eq!(updated.satuan, "g");
        assert_eq!(updated.kalori_per_100g, Some(193.0));
        assert_eq!(updated.protein_per_100g, Some(19.0));
        assert_eq!(updated.menu_harian_id, menu.id);

        delete(&db, created.id).await?;
        assert!(get_by_id(&db, created.id).await?.is_none());
        assert_eq!(delete(&db, created.id).await.unwrap_err().kind(), ErrorKind::NotFound);
        Ok(())
    }
}
