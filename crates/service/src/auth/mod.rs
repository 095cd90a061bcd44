//! Dashboard accounts: registration, login and session tokens.
//!
//! Layered as domain types, a repository trait (sea-orm backed in
//! production, in-memory for tests) and the framework-free service.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{AuthConfig, AuthService};
