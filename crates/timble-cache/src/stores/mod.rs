//! Redis-backed implementations of the core store traits

mod cache_store;
mod counter_store;

pub use cache_store::RedisCacheStore;
pub use counter_store::RedisCounterStore;

use timble_core::DomainError;

use crate::pool::RedisPoolError;

/// Wrap a pool error with the failing operation
fn cache_error(context: &'static str) -> impl FnOnce(RedisPoolError) -> DomainError {
    move |e| DomainError::CacheError(format!("{context}: {e}"))
}
