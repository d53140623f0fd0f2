//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in timble-core.

mod error;
mod reaction;
mod user;

/// `store` label on call metrics
const STORE: &str = "postgres";

pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
