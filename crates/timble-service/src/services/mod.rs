//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of a request.

pub mod auth;
pub mod context;
pub mod entitlement;
pub mod error;
pub mod premium;
pub mod rate_limit;
pub mod reaction;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use entitlement::{Entitlement, EntitlementResolver, EntitlementSource};
pub use error::{ServiceError, ServiceResult};
pub use premium::PremiumService;
pub use rate_limit::RateLimiter;
pub use reaction::ReactionService;
pub use user::UserService;
