//! Relational schema and its idempotent bootstrap

use sqlx::PgPool;
use tracing::info;

/// Tables backing accounts and reactions. Safe to apply repeatedly.
pub const SCHEMA_V1: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id            BIGSERIAL PRIMARY KEY,
    username      TEXT NOT NULL,
    email         TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    premium       BOOLEAN NOT NULL DEFAULT FALSE,
    created_at    TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at    TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT users_username_key UNIQUE (username),
    CONSTRAINT users_email_key UNIQUE (email)
);

CREATE TABLE IF NOT EXISTS user_reactions (
    user_id    BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    target_id  BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    type       SMALLINT NOT NULL CHECK (type IN (0, 1, 2)),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT user_reactions_user_target_key UNIQUE (user_id, target_id),
    CONSTRAINT user_reactions_no_self CHECK (user_id <> target_id)
);

CREATE INDEX IF NOT EXISTS idx_user_reactions_target ON user_reactions(target_id);
";

/// Unique constraint names the repositories map to field-level conflicts
pub const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Advisory lock key serializing concurrent bootstraps
const MIGRATION_LOCK_KEY: i64 = 0x7469_6d62_6c65;

/// Apply the schema to the connected database
///
/// `IF NOT EXISTS` is not race-free; the DDL runs in one transaction holding
/// an advisory lock so concurrent bootstraps apply it one at a time.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::raw_sql(SCHEMA_V1).execute(&mut *tx).await?;
    tx.commit().await?;
    info!("Database schema is up to date");
    Ok(())
}
