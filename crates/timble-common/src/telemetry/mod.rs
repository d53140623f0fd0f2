//! Telemetry: tracing and metrics setup

pub mod metrics_setup;
mod tracing_setup;

pub use metrics_setup::{install_prometheus_recorder, track_store_call, MetricsError};
pub use tracing_setup::{try_init_tracing_with_config, TracingConfig, TracingError};
