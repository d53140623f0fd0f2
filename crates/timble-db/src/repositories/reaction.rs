//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use timble_common::track_store_call;
use timble_core::entities::Reaction;
use timble_core::traits::{ReactionRepository, RepoResult};
use timble_core::value_objects::UserId;

use crate::mappers::ReactionUpsert;
use crate::models::ReactionModel;

use super::error::map_db_error;
use super::STORE;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction), fields(user_id = %reaction.user_id, target_id = %reaction.target_id))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        let upsert = ReactionUpsert::new(reaction)?;

        let query = sqlx::query(
            r"
            INSERT INTO user_reactions (user_id, target_id, type)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, target_id)
            DO UPDATE SET type = EXCLUDED.type, updated_at = NOW()
            ",
        )
        .bind(upsert.user_id)
        .bind(upsert.target_id)
        .bind(upsert.reaction_type)
        .execute(&self.pool);

        track_store_call(STORE, "upsert_reaction", query)
            .await
            .map_err(map_db_error("upsert reaction"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId, target_id: UserId) -> RepoResult<Option<Reaction>> {
        // No row can hold an id outside BIGINT
        let (Some(user_id), Some(target_id)) = (user_id.as_i64(), target_id.as_i64()) else {
            return Ok(None);
        };

        let query = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT user_id, target_id, type, created_at, updated_at
            FROM user_reactions
            WHERE user_id = $1 AND target_id = $2
            ",
        )
        .bind(user_id)
        .bind(target_id)
        .fetch_optional(&self.pool);

        let result = track_store_call(STORE, "find_reaction", query)
            .await
            .map_err(map_db_error("find reaction"))?;

        result.map(Reaction::try_from).transpose()
    }
}
