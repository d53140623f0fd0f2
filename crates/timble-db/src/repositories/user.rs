//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use timble_common::track_store_call;
use timble_core::entities::{NewUser, User};
use timble_core::traits::{RepoResult, UserRepository};
use timble_core::value_objects::UserId;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_user_unique_violation, user_not_found};
use super::STORE;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let Some(raw_id) = id.as_i64() else {
            return Ok(None);
        };

        let query = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, password_hash, premium, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(raw_id)
        .fetch_optional(&self.pool);

        let result = track_store_call(STORE, "find_user_by_id", query)
            .await
            .map_err(map_db_error("find user by id"))?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let query = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, password_hash, premium, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool);

        let result = track_store_call(STORE, "find_user_by_username", query)
            .await
            .map_err(map_db_error("find user by username"))?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let insert = UserInsert::new(user);

        let query = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, premium, created_at, updated_at
            ",
        )
        .bind(insert.username)
        .bind(insert.email)
        .bind(insert.password_hash)
        .fetch_one(&self.pool);

        let model = track_store_call(STORE, "create_user", query)
            .await
            .map_err(map_user_unique_violation)?;

        info!(user_id = model.id, "User row inserted");

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn update_premium(&self, id: UserId, premium: bool) -> RepoResult<()> {
        let raw_id = id.as_i64().ok_or_else(|| user_not_found(id))?;

        let query = sqlx::query(
            r"
            UPDATE users
            SET premium = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(raw_id)
        .bind(premium)
        .execute(&self.pool);

        let result = track_store_call(STORE, "update_premium", query)
            .await
            .map_err(map_db_error("update premium"))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}
