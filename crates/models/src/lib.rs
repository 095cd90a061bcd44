pub mod errors;
pub mod db;
pub mod schema;
pub mod enums;
pub mod json;

pub mod organisasi;
pub mod sppg;
pub mod pemasok;
pub mod menu_harian;
pub mod komponen_menu;
pub mod kegiatan_pengolahan;
pub mod laporan_bahan_baku;
pub mod dokumen_sppg;
pub mod checklist_harian;
pub mod peringatan;
pub mod pengguna;
pub mod standar_akg;
pub mod kontrol_mutu_pengolahan;
pub mod penggunaan_bahan_baku;
pub mod notifikasi_peringatan;

pub use schema::{FieldError, ValidationErrors};

#[cfg(test)]
mod tests;
