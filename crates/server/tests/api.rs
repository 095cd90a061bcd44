mod support;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use support::{app, app_with, config, send, session, CRON_SECRET};

async fn seed_unit(app: &axum::Router, token: &str) -> anyhow::Result<(String, String)> {
    let (status, org) = send(app, Method::POST, "/api/organisasi", Some(token), Some(json!({ "nama": "Kab. Bogor" }))).await?;
    assert_eq!(status, StatusCode::OK, "{org}");
    let org_id = org["data"]["id"].as_str().unwrap_or_default().to_string();
    let (status, unit) = send(
        app,
        Method::POST,
        "/api/sppg",
        Some(token),
        Some(json!({
            "nama": "SPPG Cibinong",
            "alamat": "Jl. Raya 1",
            "kapasitasProduksi": "500",
            "latitude": -6.48,
            "longitude": 106.84,
            "organisasiId": org_id,
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "{unit}");
    Ok((org_id, unit["data"]["id"].as_str().unwrap_or_default().to_string()))
}

#[tokio::test]
async fn health_and_metrics_are_public() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": "up" }));

    let req = axum::http::Request::builder().uri("/metrics").body(axum::body::Body::empty())?;
    let resp = tower::ServiceExt::oneshot(app.clone(), req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn envelope_status_follows_error_kind() -> anyhow::Result<()> {
    let app = app().await?;
    let token = session(&app, "crud@sppg.id").await?;
    let (org_id, unit_id) = seed_unit(&app, &token).await?;

    let (status, body) = send(&app, Method::GET, &format!("/api/sppg/{unit_id}"), Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["statusVerifikasi"], "DRAFT");
    assert_eq!(body["data"]["kapasitasProduksi"], 500);
    assert_eq!(body["data"]["organisasi"]["nama"], "Kab. Bogor");

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send(&app, Method::GET, &format!("/api/sppg/{missing}"), Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NOT_FOUND");
    assert_eq!(body["error"], "Data tidak ditemukan");

    let (status, body) = send(&app, Method::POST, "/api/pemasok", Some(&token), Some(json!({ "nama": " " }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert!(body["fields"].as_array().map_or(0, Vec::len) >= 2);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/organisasi/{org_id}"), Some(&token), None).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Gagal menghapus data");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/sppg/{unit_id}"), Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/organisasi/{org_id}"), Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn map_feed_reflects_verification() -> anyhow::Result<()> {
    let app = app().await?;
    let token = session(&app, "peta@sppg.id").await?;
    let (_, unit_id) = seed_unit(&app, &token).await?;

    let (status, feed) = send(&app, Method::GET, "/api/sppg/peta", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(feed["data"][0]["status"], "TIDAK_AKTIF");
    assert_eq!(feed["data"][0]["kabupaten"], "Kab. Bogor");
    assert_eq!(feed["data"][0]["provinsi"], "Indonesia");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/sppg/{unit_id}/verify"),
        Some(&token),
        Some(json!({ "statusVerifikasi": "DRAFT" })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/sppg/{unit_id}/verify"),
        Some(&token),
        Some(json!({ "statusVerifikasi": "APPROVED", "catatanVerifikasi": "Lengkap" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, feed) = send(&app, Method::GET, "/api/sppg/peta", None, None).await?;
    assert_eq!(feed["data"][0]["status"], "AKTIF");
    Ok(())
}

#[tokio::test]
async fn generate_alerts_verb_policy() -> anyhow::Result<()> {
    let app = app().await?;
    let token = session(&app, "cron@sppg.id").await?;
    let (_, unit_id) = seed_unit(&app, &token).await?;
    send(
        &app,
        Method::POST,
        &format!("/api/sppg/{unit_id}/verify"),
        Some(&token),
        Some(json!({ "statusVerifikasi": "APPROVED" })),
    )
    .await?;

    let uri = "/api/peringatan/generate-alerts";
    let (status, _) = send(&app, Method::GET, uri, None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::GET, uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, uri, Some(CRON_SECRET), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], 1);

    let (status, _) = send(&app, Method::POST, uri, Some(CRON_SECRET), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, body) = send(&app, Method::POST, uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], 0);

    let (status, page) = send(&app, Method::GET, "/api/peringatan?page=1&limit=10", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["data"]["totalCount"], 1);
    let alert: &Value = &page["data"]["data"][0];
    assert_eq!(alert["jenisPeringatan"], "KEPATUHAN_OPERASIONAL");
    assert_eq!(alert["sppg"]["nama"], "SPPG Cibinong");

    let id = alert["id"].as_str().unwrap_or_default();
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/peringatan/{id}/resolve"),
        Some(&token),
        Some(json!({ "tindakanDilakukan": "Checklist diisi" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, hidden) = send(&app, Method::GET, "/api/peringatan", Some(&token), None).await?;
    assert_eq!(hidden["data"]["totalCount"], 0);
    let (_, shown) = send(&app, Method::GET, "/api/peringatan?showResolved=true", Some(&token), None).await?;
    assert_eq!(shown["data"]["totalCount"], 1);
    Ok(())
}

#[tokio::test]
async fn scheduler_route_closed_without_secret() -> anyhow::Result<()> {
    let app = app_with(config(None)).await?;
    let (status, _) = send(&app, Method::GET, "/api/peringatan/generate-alerts", Some("anything"), None).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn mapkit_token_without_configuration_fails() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send(&app, Method::GET, "/api/mapkit/token", None, None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate MapKit token");
    Ok(())
}

#[tokio::test]
async fn menu_with_components_and_checklist_flow() -> anyhow::Result<()> {
    let app = app().await?;
    let token = session(&app, "dapur@sppg.id").await?;
    let (_, unit_id) = seed_unit(&app, &token).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/menu-harian/with-komponen",
        Some(&token),
        Some(json!({
            "tanggal": "2024-03-01",
            "namaMenu": "Nasi Ayam",
            "porsiTarget": 100,
            "sppgId": unit_id,
            "komponen": [
                { "namaBahan": "Beras", "jumlah": 10, "satuan": "kg", "kaloriPer100g": 130 },
                { "namaBahan": "Ayam", "jumlah": 5, "satuan": "kg", "proteinPer100g": 27 },
            ],
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    let menu_id = body["data"]["id"].as_str().unwrap_or_default().to_string();
    assert_eq!(body["data"]["komponen"].as_array().map_or(0, Vec::len), 2);

    let (_, komponen) = send(&app, Method::GET, &format!("/api/menu-harian/{menu_id}/komponen"), Some(&token), None).await?;
    let names: Vec<&str> = komponen["data"]
        .as_array()
        .map(|items| items.iter().filter_map(|k| k["namaBahan"].as_str()).collect())
        .unwrap_or_default();
    assert!(names.contains(&"Beras") && names.contains(&"Ayam"), "{names:?}");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checklist-harian",
        Some(&token),
        Some(json!({
            "tanggal": "2024-03-01",
            "kebersihanSdm": true,
            "kebersihanInfrastruktur": true,
            "kondisiPeralatan": true,
            "fotoEvidence": [],
            "sppgId": unit_id,
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    let fields = body["fields"].as_array().cloned().unwrap_or_default();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["field"], "fotoEvidence");
    Ok(())
}

#[tokio::test]
async fn unit_account_sees_alerts_for_its_sppg() -> anyhow::Result<()> {
    let app = app().await?;
    let admin = session(&app, "admin@sppg.id").await?;
    let (_, unit_id) = seed_unit(&app, &admin).await?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({ "email": "dapur@sppg.id", "nama": "Dapur", "password": "rahasia123", "sppgId": unit_id })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let (_, login) = send(&app, Method::POST, "/auth/login", None, Some(json!({ "email": "dapur@sppg.id", "password": "rahasia123" }))).await?;
    let dapur = login["token"].as_str().unwrap_or_default().to_string();

    let alert = json!({
        "judul": "Suhu kulkas tinggi",
        "deskripsi": "12 derajat",
        "jenisPeringatan": "KEAMANAN_PANGAN",
        "tingkatPrioritas": "TINGGI",
        "sppgId": unit_id,
    });
    let (status, body) = send(&app, Method::POST, "/api/peringatan", Some(&admin), Some(alert)).await?;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, inbox) = send(&app, Method::GET, "/api/notifikasi?unreadOnly=true", Some(&dapur), None).await?;
    assert_eq!(status, StatusCode::OK, "{inbox}");
    assert_eq!(inbox["data"][0]["peringatan"]["judul"], "Suhu kulkas tinggi");
    let id = inbox["data"][0]["id"].as_str().unwrap_or_default().to_string();

    let (_, admin_inbox) = send(&app, Method::GET, "/api/notifikasi", Some(&admin), None).await?;
    assert_eq!(admin_inbox["data"].as_array().map_or(1, Vec::len), 0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/notifikasi/mark",
        Some(&dapur),
        Some(json!({ "notifikasiIds": [id], "action": "archive" })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");

    let (status, body) =
        send(&app, Method::POST, "/api/notifikasi/mark", Some(&dapur), Some(json!({ "notifikasiIds": [id], "action": "read" }))).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"], 1);
    let (_, inbox) = send(&app, Method::GET, "/api/notifikasi?unreadOnly=true", Some(&dapur), None).await?;
    assert_eq!(inbox["data"].as_array().map_or(1, Vec::len), 0);
    Ok(())
}

#[tokio::test]
async fn dashboard_and_akg_endpoints() -> anyhow::Result<()> {
    let app = app().await?;
    let token = session(&app, "gizi@sppg.id").await?;
    seed_unit(&app, &token).await?;

    let (status, body) = send(&app, Method::GET, "/api/dashboard/overview", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["totalSppg"], 1);
    assert_eq!(body["data"]["verificationStatus"][0]["color"], "#94a3b8");
    for page in ["operational", "nutrition", "supply-chain", "geographic"] {
        let (status, body) = send(&app, Method::GET, &format!("/api/dashboard/{page}"), Some(&token), None).await?;
        assert_eq!(status, StatusCode::OK, "{page}: {body}");
    }
    let (status, _) = send(&app, Method::GET, "/api/dashboard/overview", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let portion = json!({ "kelompokUsia": "SD 7-9 tahun", "kalori": 500, "protein": 12, "karbohidrat": 70, "lemak": 15 });
    let (status, _) = send(&app, Method::POST, "/api/standar-akg/validate", Some(&token), Some(portion.clone())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let standar = json!({
        "kelompokUsia": "SD 7-9 tahun",
        "minKalori": 495,
        "minProtein": 12,
        "minKarbohidrat": 68,
        "minLemak": 15,
    });
    let (status, body) = send(&app, Method::POST, "/api/standar-akg", Some(&token), Some(standar)).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    let (status, body) = send(&app, Method::POST, "/api/standar-akg/validate", Some(&token), Some(portion)).await?;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["statusAkg"], "MEMENUHI");

    let (_, listed) = send(&app, Method::GET, "/api/standar-akg?activeOnly=true", Some(&token), None).await?;
    assert_eq!(listed["data"].as_array().map_or(0, Vec::len), 1);
    Ok(())
}
