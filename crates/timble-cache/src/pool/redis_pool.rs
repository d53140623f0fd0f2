//! Redis connection pool using deadpool-redis.
//!
//! Provides a managed pool of Redis connections for efficient resource usage.

use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;
use timble_common::track_store_call;

/// Redis pool configuration
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    /// Redis connection URL (e.g., `redis://localhost:6379`)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: usize,
    /// `store` label on call metrics
    pub name: &'static str,
}

impl Default for RedisPoolConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            max_connections: 16,
            name: "redis",
        }
    }
}

impl RedisPoolConfig {
    /// Pool for the entitlement cache instance
    #[must_use]
    pub fn cache(config: &timble_common::RedisConfig) -> Self {
        Self {
            url: config.cache_url.clone(),
            max_connections: config.max_connections as usize,
            name: "redis_cache",
        }
    }

    /// Pool for the counter store instance
    #[must_use]
    pub fn counter(config: &timble_common::RedisConfig) -> Self {
        Self {
            url: config.counter_url.clone(),
            max_connections: config.max_connections as usize,
            name: "redis_counter",
        }
    }
}

/// Error type for Redis pool operations
#[derive(Debug, thiserror::Error)]
pub enum RedisPoolError {
    #[error("Failed to create Redis pool: {0}")]
    CreatePool(String),

    #[error("Failed to get connection from pool: {0}")]
    GetConnection(#[from] deadpool_redis::PoolError),

    #[error("Redis command error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("TTL out of range: {0:?}")]
    InvalidTtl(Duration),
}

/// Result type for Redis pool operations
pub type RedisResult<T> = Result<T, RedisPoolError>;

/// Managed Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    pool: Pool,
    name: &'static str,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("name", &self.name)
            .field("status", &self.pool.status())
            .finish()
    }
}

/// Whole seconds for EX/EXPIRE; Redis rejects zero
fn ttl_secs(ttl: Duration) -> RedisResult<u64> {
    match ttl.as_secs() {
        0 => Err(RedisPoolError::InvalidTtl(ttl)),
        secs if i64::try_from(secs).is_err() => Err(RedisPoolError::InvalidTtl(ttl)),
        secs => Ok(secs),
    }
}

impl RedisPool {
    /// Create a new Redis pool with the given configuration
    pub fn new(config: RedisPoolConfig) -> RedisResult<Self> {
        let cfg = Config::from_url(&config.url);
        let pool = cfg
            .builder()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RedisPoolError::CreatePool(e.to_string()))?;

        // Redact credentials from URL for logging
        let safe_url = config.url.split('@').next_back().unwrap_or(&config.url);
        tracing::info!(
            name = config.name,
            url = %safe_url,
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self {
            pool,
            name: config.name,
        })
    }

    /// Get a connection from the pool
    pub async fn get(&self) -> RedisResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(RedisPoolError::GetConnection)
    }

    /// Get the current pool status
    #[must_use]
    pub fn status(&self) -> deadpool_redis::Status {
        self.pool.status()
    }

    /// Check if the pool is healthy by pinging Redis
    pub async fn health_check(&self) -> RedisResult<()> {
        let mut conn = self.get().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await?;
        Ok(())
    }

    /// Get raw bytes by key
    pub async fn get_bytes(&self, key: &str) -> RedisResult<Option<Vec<u8>>> {
        track_store_call(self.name, "get", async {
            let mut conn = self.get().await?;
            let value: Option<Vec<u8>> = conn.get(key).await?;
            Ok::<_, RedisPoolError>(value)
        })
        .await
    }

    /// Get a string value by key
    pub async fn get_string(&self, key: &str) -> RedisResult<Option<String>> {
        track_store_call(self.name, "get", async {
            let mut conn = self.get().await?;
            let value: Option<String> = conn.get(key).await?;
            Ok::<_, RedisPoolError>(value)
        })
        .await
    }

    /// Set raw bytes with a TTL (`SET key value EX ttl`)
    pub async fn set_bytes(&self, key: &str, value: &[u8], ttl: Duration) -> RedisResult<()> {
        let secs = ttl_secs(ttl)?;
        track_store_call(self.name, "set", async {
            let mut conn = self.get().await?;
            conn.set_ex::<_, _, ()>(key, value, secs).await?;
            Ok::<_, RedisPoolError>(())
        })
        .await
    }

    /// Atomically increment a counter, returning the new value
    pub async fn incr(&self, key: &str) -> RedisResult<i64> {
        track_store_call(self.name, "incr", async {
            let mut conn = self.get().await?;
            let value: i64 = conn.incr(key, 1_i64).await?;
            Ok::<_, RedisPoolError>(value)
        })
        .await
    }

    /// Set TTL for an existing key
    pub async fn expire(&self, key: &str, ttl: Duration) -> RedisResult<bool> {
        let secs = ttl_secs(ttl)? as i64;
        track_store_call(self.name, "expire", async {
            let mut conn = self.get().await?;
            let result: bool = conn.expire(key, secs).await?;
            Ok::<_, RedisPoolError>(result)
        })
        .await
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> RedisResult<bool> {
        track_store_call(self.name, "delete", async {
            let mut conn = self.get().await?;
            let deleted: i32 = conn.del(key).await?;
            Ok::<_, RedisPoolError>(deleted > 0)
        })
        .await
    }

    /// Get remaining TTL for a key
    pub async fn ttl(&self, key: &str) -> RedisResult<Option<i64>> {
        let ttl = track_store_call(self.name, "ttl", async {
            let mut conn = self.get().await?;
            let ttl: i64 = conn.ttl(key).await?;
            Ok::<_, RedisPoolError>(ttl)
        })
        .await?;

        // Redis returns -2 if key doesn't exist, -1 if no TTL
        if ttl == -2 {
            Ok(None)
        } else {
            Ok(Some(ttl))
        }
    }
}
