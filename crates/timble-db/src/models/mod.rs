//! Database models - SQLx-compatible structs for PostgreSQL tables

mod reaction;
mod user;

pub use reaction::ReactionModel;
pub use user::UserModel;
