//! Traits (ports) implemented by the infrastructure crates

mod repositories;
mod stores;

pub use repositories::{ReactionRepository, RepoResult, UserRepository};
pub use stores::{CacheStore, CounterStore};
