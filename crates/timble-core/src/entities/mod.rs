//! Domain entities - core business objects

mod reaction;
mod user;

pub use reaction::{Reaction, ReactionRequest, ReactionType};
pub use user::{NewUser, User};
