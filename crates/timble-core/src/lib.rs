//! # timble-core
//!
//! Domain layer containing entities, value objects, and the store traits the
//! services are written against.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewUser, Reaction, ReactionRequest, ReactionType, User};
pub use error::DomainError;
pub use traits::{CacheStore, CounterStore, ReactionRepository, RepoResult, UserRepository};
pub use value_objects::{UserId, UserIdParseError};
