//! Entitlement cache on Redis

use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

use timble_core::traits::{CacheStore, RepoResult};

use super::cache_error;
use crate::pool::RedisPool;

/// Byte cache over a Redis pool
#[derive(Clone, Debug)]
pub struct RedisCacheStore {
    pool: RedisPool,
}

impl RedisCacheStore {
    /// Create a new cache store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        self.pool
            .get_bytes(key)
            .await
            .map_err(cache_error("cache get"))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> RepoResult<()> {
        self.pool
            .set_bytes(key, value, ttl)
            .await
            .map_err(cache_error("cache set"))
    }
}
