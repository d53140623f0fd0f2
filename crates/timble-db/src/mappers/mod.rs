//! Entity to model mappers
//!
//! - `From<Model> for Entity` (or `TryFrom` where a column is narrower than its domain type)
//! - `*Insert` / `*Upsert` structs: entity data laid out as bind parameters

mod reaction;
mod user;

pub use reaction::ReactionUpsert;
pub use user::UserInsert;
