//! Business layer of the JAGA GIZI dashboard.
//!
//! - `services`: one function per entity operation over a `DatabaseConnection`.
//! - `action` / `actions`: the envelope every dashboard call is wrapped in.
//! - `auth`, `alerts`, `peta`, `mapkit`: accounts, generated alerts, the
//!   public map feed and map tokens.

pub mod errors;
pub mod actor;
pub mod action;
pub mod actions;
pub mod services;
pub mod auth;
pub mod alerts;
pub mod peta;
pub mod mapkit;
#[cfg(test)]
pub mod test_support;

pub use action::{ActionResponse, Operation};
pub use actor::{Actor, SYSTEM_ACTOR};
pub use errors::{ErrorKind, ServiceError};
