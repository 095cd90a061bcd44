use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

/// Outcome of every action call, labelled by `scope.operation` and `success|failure`.
pub static ACTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "jaga_gizi_actions_total",
        "Total dashboard actions by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("register actions_total")
});

pub static ALERTS_GENERATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "jaga_gizi_alerts_generated_total",
        "Total alerts created by the automatic generator"
    )
    .expect("register alerts_generated_total")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
