//! # timble-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, JwtService, UserToken,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, EntitlementConfig,
    Environment, JwtConfig, RedisConfig, ServerConfig,
};
pub use error::{domain_status_code, AppError, AppResult, ErrorResponse};
pub use telemetry::{
    install_prometheus_recorder, track_store_call, try_init_tracing_with_config, MetricsError,
    TracingConfig, TracingError,
};
