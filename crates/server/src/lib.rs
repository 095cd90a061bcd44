//! HTTP surface of the JAGA GIZI backend.

pub mod envelope;
pub mod errors;
pub mod middlewares;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use routes::build_router;
pub use startup::run;
pub use state::AppState;
