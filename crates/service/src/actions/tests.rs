use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::errors::ErrorKind;
use crate::test_support::{get_db, operator, seed_organisasi, seed_sppg};

#[tokio::test]
async fn invalid_payload_reports_every_field() -> anyhow::Result<()> {
    let db = get_db().await?;
    let res = sppg::create(&db, &operator(), &json!({ "nama": "", "kapasitasProduksi": 0, "latitude": 120 })).await;
    assert!(!res.success);
    assert_eq!(res.kind, Some(ErrorKind::ValidationFailed));
    assert_eq!(res.error.as_deref(), Some("Gagal menambah data"));
    let fields: Vec<_> = res.fields.iter().map(|f| f.field.as_str()).collect();
    for expected in ["nama", "alamat", "kapasitasProduksi", "latitude", "organisasiId"] {
        assert!(fields.contains(&expected), "missing {expected} in {fields:?}");
    }
    Ok(())
}

#[tokio::test]
async fn missing_rows_are_not_found() -> anyhow::Result<()> {
    let db = get_db().await?;
    let id = Uuid::new_v4();
    let got = pemasok::get(&db, id).await;
    assert_eq!(got.kind, Some(ErrorKind::NotFound));
    assert_eq!(got.error.as_deref(), Some("Data tidak ditemukan"));

    let updated = pemasok::update(&db, &operator(), id, &json!({ "nama": "Baru" })).await;
    assert_eq!(updated.kind, Some(ErrorKind::NotFound));

    let deleted = menu_harian::delete(&db, id).await;
    assert_eq!(deleted.kind, Some(ErrorKind::NotFound));
    Ok(())
}

#[tokio::test]
async fn referenced_delete_is_a_constraint_violation() -> anyhow::Result<()> {
    let db = get_db().await?;
    let org = seed_organisasi(&db, "Dinkes").await?;
    seed_sppg(&db, org.id, "SPPG A").await?;

    let res = organisasi::delete(&db, org.id).await;
    assert_eq!(res.kind, Some(ErrorKind::ConstraintViolation));
    assert_eq!(res.error.as_deref(), Some("Gagal menghapus data"));
    assert!(organisasi::get(&db, org.id).await.success);
    Ok(())
}

#[tokio::test]
async fn session_sppg_fills_missing_reference() -> anyhow::Result<()> {
    let db = get_db().await?;
    let org = seed_organisasi(&db, "Dinkes").await?;
    let unit = seed_sppg(&db, org.id, "SPPG A").await?;
    let body = json!({ "tanggal": "2024-03-01", "namaMenu": "Nasi Ikan", "porsiTarget": "150" });

    let without = menu_harian::create(&db, &operator(), &body).await;
    assert_eq!(without.kind, Some(ErrorKind::ValidationFailed));
    assert_eq!(without.fields[0].field, "sppgId");

    let with = menu_harian::create(&db, &operator().with_sppg(unit.id), &body).await;
    assert!(with.success, "{:?}", with.error);
    let menu = with.data.expect("menu");
    assert_eq!(menu.sppg_id, unit.id);
    assert_eq!(menu.porsi_target, 150);
    Ok(())
}

#[tokio::test]
async fn alert_listing_accepts_query_strings() -> anyhow::Result<()> {
    let db = get_db().await?;
    let actor = operator();
    for i in 0..3 {
        let res = peringatan::create(
            &db,
            &actor,
            &json!({
                "judul": format!("Peringatan {i}"),
                "deskripsi": "Cek dapur",
                "jenisPeringatan": "KEPATUHAN_OPERASIONAL",
                "tingkatPrioritas": "SEDANG",
            }),
        )
        .await;
        assert!(res.success);
    }

    let page = peringatan::list(&db, &json!({ "page": "2", "limit": "2" })).await;
    let page = page.data.expect("page");
    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.data.len(), 1);

    let bad = peringatan::list(&db, &json!({ "limit": 500 })).await;
    assert_eq!(bad.kind, Some(ErrorKind::ValidationFailed));

    let generated = peringatan::generate(&db).await;
    assert_eq!(generated.data, Some(0));
    Ok(())
}
