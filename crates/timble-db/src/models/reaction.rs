//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: i64,
    pub target_id: i64,
    #[sqlx(rename = "type")]
    pub reaction_type: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
