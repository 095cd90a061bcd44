use serde_json::json;
use uuid::Uuid;

use crate::checklist_harian::skor_kepatuhan;
use crate::komponen_menu::grams_per_unit;
use crate::enums::{StatusAkg, StatusAktif};
use crate::menu_harian::{CreateMenuWithKomponen, NutrisiPorsi};
use crate::standar_akg::{self, ValidateAkg};

#[test]
fn compliance_score_is_share_of_passed_checks() {
    assert_eq!(skor_kepatuhan(&[true, true, true]), 100.0);
    assert_eq!(skor_kepatuhan(&[true, false, false]), 33.33);
    assert_eq!(skor_kepatuhan(&[true, true, false]), 66.67);
    assert_eq!(skor_kepatuhan(&[]), 0.0);
}

#[test]
fn mass_units_convert_to_grams() {
    assert_eq!(grams_per_unit("kg"), Some(1000.0));
    assert_eq!(grams_per_unit(" Gram "), Some(1.0));
    assert_eq!(grams_per_unit("ons"), Some(100.0));
    assert_eq!(grams_per_unit("butir"), None);
}

#[test]
fn menu_nutrition_is_derived_from_components() {
    let raw = json!({
        "tanggal": "2024-05-01",
        "namaMenu": "Nasi Telur",
        "porsiTarget": 50,
        "kaloriPerPorsi": 9999,
        "komponen": [
            { "namaBahan": "Nasi", "jumlah": 150, "satuan": "g", "kaloriPer100g": 130, "karbohidratPer100g": 28 },
            { "namaBahan": "Telur", "jumlah": 0.05, "satuan": "kg", "kaloriPer100g": 155, "proteinPer100g": 13 },
            { "namaBahan": "Garam", "jumlah": 1, "satuan": "sdt", "kaloriPer100g": 500 },
        ],
    });
    let input = CreateMenuWithKomponen::parse(&raw).unwrap();
    let gizi = NutrisiPorsi::from_komponen(&input.komponen);
    assert_eq!(gizi.kalori, Some(272.5));
    assert_eq!(gizi.protein, Some(6.5));
    assert_eq!(gizi.karbohidrat, Some(42.0));
    assert_eq!(gizi.lemak, None);

    let (menu, komponen) = input.into_parts(Uuid::new_v4(), Uuid::nil());
    assert_eq!(komponen.len(), 3);
    assert_eq!(menu.kalori_per_porsi.unwrap(), Some(272.5));
}

fn sekolah_dasar() -> standar_akg::Model {
    standar_akg::Model {
        id: Uuid::new_v4(),
        kelompok_usia: "Anak 7-9 tahun".into(),
        min_kalori: 500.0,
        max_kalori: Some(700.0),
        min_protein: 15.0,
        min_karbohidrat: 70.0,
        min_lemak: 10.0,
        deskripsi: None,
        status_aktif: StatusAktif::Aktif,
        created_by: Uuid::nil(),
        created_at: chrono::Utc::now().into(),
        updated_by: None,
        updated_at: None,
    }
}

fn porsi(kalori: f64, protein: f64) -> ValidateAkg {
    ValidateAkg {
        kelompok_usia: "Anak 7-9 tahun".into(),
        kalori,
        protein,
        karbohidrat: 80.0,
        lemak: 12.0,
    }
}

#[test]
fn portion_is_graded_against_the_standard() {
    let standar = sekolah_dasar();

    let ok = standar.evaluate(&porsi(600.0, 20.0));
    assert_eq!(ok.status_akg, StatusAkg::Memenuhi);
    assert!(ok.tidak_terpenuhi.is_empty());

    let near = standar.evaluate(&porsi(460.0, 14.0));
    assert_eq!(near.status_akg, StatusAkg::HampirMemenuhi);
    assert_eq!(near.tidak_terpenuhi, vec!["kalori", "protein"]);

    let far = standar.evaluate(&porsi(600.0, 5.0));
    assert_eq!(far.status_akg, StatusAkg::TidakMemenuhi);
    assert_eq!(far.tidak_terpenuhi, vec!["protein"]);

    let over = standar.evaluate(&porsi(900.0, 20.0));
    assert_eq!(over.status_akg, StatusAkg::TidakMemenuhi);
    assert_eq!(over.tidak_terpenuhi, vec!["kalori"]);
}
