pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok", database: "up" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn metrics_encode_contains_action_counter() {
        metrics::ACTIONS_TOTAL.with_label_values(&["sppg.list", "success"]).inc();
        let (status, body) = metrics::encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("jaga_gizi_actions_total"));
    }
}
