//! # timble-cache
//!
//! Redis layer backing the premium entitlement cache and the daily reaction counters.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Keys**: Key layout shared by every writer and reader
//! - **Stores**: `CacheStore` / `CounterStore` implementations
//!
//! ## Example
//!
//! ```ignore
//! use timble_cache::{KeyFormatter, RedisCacheStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = RedisCacheStore::new(pool);
//! cache.set(&KeyFormatter::premium(user_id), b"true", ttl).await?;
//! ```

pub mod keys;
pub mod pool;
pub mod stores;

pub use keys::KeyFormatter;
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use stores::{RedisCacheStore, RedisCounterStore};
