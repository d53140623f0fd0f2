//! Counter store on Redis

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

use timble_core::traits::{CounterStore, RepoResult};

use super::cache_error;
use crate::pool::RedisPool;

/// Atomic counters and flags over a Redis pool
#[derive(Clone, Debug)]
pub struct RedisCounterStore {
    pool: RedisPool,
}

impl RedisCounterStore {
    /// Create a new counter store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    #[instrument(skip(self))]
    async fn incr(&self, key: &str) -> RepoResult<i64> {
        let value = self
            .pool
            .incr(key)
            .await
            .map_err(cache_error("counter incr"))?;
        debug!(key, value, "Counter incremented");
        Ok(value)
    }

    #[instrument(skip(self))]
    async fn expire(&self, key: &str, ttl: Duration) -> RepoResult<()> {
        self.pool
            .expire(key, ttl)
            .await
            .map(|_| ())
            .map_err(cache_error("counter expire"))
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.pool
            .get_string(key)
            .await
            .map_err(cache_error("counter get"))
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> RepoResult<()> {
        self.pool
            .delete(key)
            .await
            .map(|_| ())
            .map_err(cache_error("counter delete"))
    }
}
