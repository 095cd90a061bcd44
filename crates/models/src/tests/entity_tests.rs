use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;

use crate::enums::StatusVerifikasi;
use crate::errors::ModelError;
use crate::{organisasi, pengguna, sppg};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn sppg_round_trip_keeps_enum_and_audit() -> Result<()> {
    let db = setup_test_db().await?;
    let actor = Uuid::new_v4();

    let org = organisasi::CreateOrganisasi::parse(&json!({ "nama": "Dinas Kesehatan Bogor" }))?
        .into_active_model(actor)
        .insert(&db)
        .await?;
    let created = sppg::CreateSppg::parse(&json!({
        "nama": "SPPG Cibinong",
        "alamat": "Jl. Raya Cibinong 1",
        "kapasitasProduksi": 500,
        "organisasiId": org.id.to_string(),
    }))?
    .into_active_model(actor)
    .insert(&db)
    .await?;

    let found = sppg::Entity::find_by_id(created.id).one(&db).await?.expect("stored");
    assert_eq!(found.status_verifikasi, StatusVerifikasi::Draft);
    assert_eq!(found.created_by, actor);
    assert!(found.updated_at.is_none());

    let editor = Uuid::new_v4();
    let updated = sppg::UpdateSppg::parse(&json!({ "kapasitasProduksi": 750 }))?
        .apply(found, editor)
        .update(&db)
        .await?;
    assert_eq!(updated.kapasitas_produksi, 750);
    assert_eq!(updated.nama, "SPPG Cibinong");
    assert_eq!(updated.updated_by, Some(editor));
    Ok(())
}

#[tokio::test]
async fn dangling_reference_is_rejected_by_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    let res = sppg::CreateSppg::parse(&json!({
        "nama": "SPPG Yatim",
        "alamat": "Jl. Kosong",
        "kapasitasProduksi": 10,
        "organisasiId": Uuid::new_v4().to_string(),
    }))?
    .into_active_model(Uuid::new_v4())
    .insert(&db)
    .await;
    assert!(res.is_err());
    Ok(())
}

#[tokio::test]
async fn pengguna_email_is_normalized_and_unique() -> Result<()> {
    let db = setup_test_db().await?;
    let u = pengguna::create(&db, " Sari@Example.com ", "Sari", "hash".into(), "argon2", None).await?;
    assert_eq!(u.email, "sari@example.com");

    let found = pengguna::find_by_email(&db, "SARI@example.com").await?;
    assert_eq!(found.map(|p| p.id), Some(u.id));

    let dup = pengguna::create(&db, "sari@example.com", "Sari 2", "hash".into(), "argon2", None).await;
    assert!(matches!(dup, Err(ModelError::Db(_))));

    let bad = pengguna::create(&db, "bukan-email", "X", "hash".into(), "argon2", None).await;
    assert!(matches!(bad, Err(ModelError::Validation(_))));
    Ok(())
}
