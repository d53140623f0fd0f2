//! # timble-service
//!
//! Application layer: premium entitlement, the daily reaction quota, and
//! account use cases, written against the store traits of `timble-core`.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, Entitlement, EntitlementResolver, EntitlementSource, PremiumService,
    RateLimiter, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
