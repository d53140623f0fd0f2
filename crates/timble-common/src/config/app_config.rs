//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub entitlement: EntitlementConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration. The entitlement cache and the counter store may live
/// on different instances; both default to `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub cache_url: String,
    pub counter_url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// Tunables of the premium entitlement and the daily reaction quota
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementConfig {
    #[serde(default = "default_daily_reaction_limit")]
    pub daily_reaction_limit: u32,
    #[serde(default = "default_ttl_secs")]
    pub premium_cache_ttl_secs: u64,
    #[serde(default = "default_ttl_secs")]
    pub reaction_counter_ttl_secs: u64,
    /// Hours east of UTC used to derive the counter's calendar day
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    #[serde(default)]
    pub require_premium_eligibility: bool,
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            daily_reaction_limit: default_daily_reaction_limit(),
            premium_cache_ttl_secs: default_ttl_secs(),
            reaction_counter_ttl_secs: default_ttl_secs(),
            utc_offset_hours: default_utc_offset_hours(),
            require_premium_eligibility: false,
        }
    }
}

impl EntitlementConfig {
    #[must_use]
    pub fn premium_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.premium_cache_ttl_secs)
    }

    #[must_use]
    pub fn reaction_counter_ttl(&self) -> Duration {
        Duration::from_secs(self.reaction_counter_ttl_secs)
    }

    /// Fixed offset the daily quota rolls over in. Falls back to UTC if the
    /// offset is out of range; `validate` rejects such values up front.
    #[must_use]
    pub fn time_zone(&self) -> FixedOffset {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }

    /// Reject values the stores cannot honour
    ///
    /// Redis refuses a zero expiry, so a zero TTL would leave counters that
    /// never roll over and cache writes that always fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.premium_cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue("PREMIUM_CACHE_TTL_SECS", "0".to_string()));
        }
        if self.reaction_counter_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "REACTION_COUNTER_TTL_SECS",
                "0".to_string(),
            ));
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidValue(
                "REACTION_UTC_OFFSET_HOURS",
                self.utc_offset_hours.to_string(),
            ));
        }
        Ok(())
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "timble".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_daily_reaction_limit() -> u32 {
    10
}

fn default_ttl_secs() -> u64 {
    86_400 // 24 hours
}

fn default_utc_offset_hours() -> i32 {
    7
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let redis_url = require_var("REDIS_URL")?;

        let entitlement = EntitlementConfig {
            daily_reaction_limit: parse_var("REACTION_DAILY_LIMIT")?
                .unwrap_or_else(default_daily_reaction_limit),
            premium_cache_ttl_secs: parse_var("PREMIUM_CACHE_TTL_SECS")?
                .unwrap_or_else(default_ttl_secs),
            reaction_counter_ttl_secs: parse_var("REACTION_COUNTER_TTL_SECS")?
                .unwrap_or_else(default_ttl_secs),
            utc_offset_hours: parse_var("REACTION_UTC_OFFSET_HOURS")?
                .unwrap_or_else(default_utc_offset_hours),
            require_premium_eligibility: parse_var("REQUIRE_PREMIUM_ELIGIBILITY")?
                .unwrap_or(false),
        };
        entitlement.validate()?;

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: parse_var("APP_ENV")?.unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: require_var("DATABASE_URL")?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            redis: RedisConfig {
                cache_url: env::var("REDIS_CACHE_URL").unwrap_or_else(|_| redis_url.clone()),
                counter_url: env::var("REDIS_COUNTER_URL").unwrap_or_else(|_| redis_url.clone()),
                url: redis_url,
                max_connections: parse_var("REDIS_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_redis_max_connections),
            },
            jwt: JwtConfig {
                secret: require_var("JWT_SECRET")?,
                token_expiry: parse_var("JWT_TOKEN_EXPIRY")?.unwrap_or_else(default_token_expiry),
            },
            entitlement,
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
