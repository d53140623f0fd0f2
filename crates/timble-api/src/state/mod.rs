//! Application state
//!
//! Holds the shared state for the Axum application: the service context plus
//! the raw pools the readiness probe pings.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use timble_cache::RedisPool;
use timble_common::{AppConfig, JwtService};
use timble_db::PgPool;
use timble_service::ServiceContext;

/// Connection pools checked by `/health/ready`
#[derive(Clone, Debug)]
pub struct Backends {
    pub database: PgPool,
    pub cache: RedisPool,
    pub counter: RedisPool,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    backends: Backends,
    /// Renders `/metrics`; absent when no recorder is installed
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, backends: Backends) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            backends,
            metrics: None,
        }
    }

    /// Attach the handle of the installed Prometheus recorder
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    pub fn backends(&self) -> &Backends {
        &self.backends
    }

    pub fn metrics_handle(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
