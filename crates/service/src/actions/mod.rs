//! Dashboard entry points: raw input in, [`ActionResponse`] out.
//!
//! Each function parses its payload with the entity's schema shape and runs
//! the matching service call through [`crate::action::run`], so a
//! validation failure and a store failure come back the same way.
//!
//! [`ActionResponse`]: crate::action::ActionResponse

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
pub mod standar_akg;
pub mod kontrol_mutu_pengolahan;
pub mod penggunaan_bahan_baku;
pub mod notifikasi_peringatan;
pub mod dashboard;

#[cfg(test)]
mod tests;
