//! Prometheus metrics
//!
//! Two histograms: HTTP request duration, labelled by method, route and
//! outcome, and store call duration, labelled by store and action. The
//! recorder is global; nothing is recorded until one is installed.

use std::future::Future;
use std::time::{Duration, Instant};

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

/// Duration of HTTP requests, in seconds
pub const HTTP_REQUEST_DURATION: &str = "timble_http_request_duration_seconds";

/// Duration of calls to Postgres and Redis, in seconds
pub const STORE_CALL_DURATION: &str = "timble_store_call_duration_seconds";

/// `status` label for a successful request or call
pub const STATUS_OK: &str = "ok";

/// `status` label for a failed request or call
pub const STATUS_FAIL: &str = "fail";

const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

/// Metrics setup errors
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to install Prometheus recorder: {0}")]
    Install(#[from] BuildError),
}

/// Exporter with histogram buckets for every duration metric
pub fn prometheus_builder() -> Result<PrometheusBuilder, MetricsError> {
    let builder = PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Suffix("_duration_seconds".to_string()),
        DURATION_BUCKETS,
    )?;
    Ok(builder)
}

/// Install the global recorder and return the handle `/metrics` renders
///
/// Fails if a recorder is already installed.
pub fn install_prometheus_recorder() -> Result<PrometheusHandle, MetricsError> {
    Ok(prometheus_builder()?.install_recorder()?)
}

/// Record one store call
pub fn record_store_call(store: &'static str, action: &'static str, ok: bool, elapsed: Duration) {
    let status = if ok { STATUS_OK } else { STATUS_FAIL };
    metrics::histogram!(
        STORE_CALL_DURATION,
        "store" => store,
        "action" => action,
        "status" => status,
    )
    .record(elapsed.as_secs_f64());
}

/// Time a store call and record its outcome
pub async fn track_store_call<T, E, F>(
    store: &'static str,
    action: &'static str,
    call: F,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let result = call.await;
    record_store_call(store, action, result.is_ok(), start.elapsed());
    result
}
