//! Key-value store traits backing the entitlement cache and the rate limiter

use async_trait::async_trait;
use std::time::Duration;

use super::repositories::RepoResult;

/// Byte-oriented cache. A miss is `Ok(None)`, never an error.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> RepoResult<()>;
}

/// Store with atomic integer counters
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment and return the post-increment value
    async fn incr(&self, key: &str) -> RepoResult<i64>;

    async fn expire(&self, key: &str, ttl: Duration) -> RepoResult<()>;

    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    async fn delete(&self, key: &str) -> RepoResult<()>;
}
