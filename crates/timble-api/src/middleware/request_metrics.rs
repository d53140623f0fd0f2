//! Request duration histogram

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use timble_common::telemetry::metrics_setup::{HTTP_REQUEST_DURATION, STATUS_FAIL, STATUS_OK};

/// `route` label for requests no route matched
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Record one observation per request, labelled by route template rather
/// than raw path so ids in the URL do not create new series
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |path| path.as_str().to_string());

    let response = next.run(request).await;

    let http_status = response.status();
    let status = if http_status.is_client_error() || http_status.is_server_error() {
        STATUS_FAIL
    } else {
        STATUS_OK
    };

    metrics::histogram!(
        HTTP_REQUEST_DURATION,
        "method" => method,
        "route" => route,
        "status" => status,
        "http_status" => http_status.as_u16().to_string(),
    )
    .record(start.elapsed().as_secs_f64());

    response
}
