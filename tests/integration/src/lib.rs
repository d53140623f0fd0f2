//! Integration test utilities for the Timble API
//!
//! This crate provides helpers for running end-to-end tests against the REST
//! API backed by real PostgreSQL and Redis instances.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
