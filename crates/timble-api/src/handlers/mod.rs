//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod observability;
pub mod premium;
pub mod reactions;
pub mod users;
