//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, health_check, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
