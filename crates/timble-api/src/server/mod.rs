//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use timble_cache::{RedisCacheStore, RedisCounterStore, RedisPool, RedisPoolConfig};
use timble_common::{install_prometheus_recorder, AppConfig, AppError, JwtService};
use timble_db::{create_pool, run_migrations, PgReactionRepository, PgUserRepository};
use timble_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::{AppState, Backends};

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&timble_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Pools connect lazily; readiness reports whether they are reachable
    let cache_pool = RedisPool::new(RedisPoolConfig::cache(&config.redis))
        .map_err(|e| AppError::Cache(e.to_string()))?;
    let counter_pool = RedisPool::new(RedisPoolConfig::counter(&config.redis))
        .map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis pools created");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .cache_store(Arc::new(RedisCacheStore::new(cache_pool.clone())))
        .counter_store(Arc::new(RedisCounterStore::new(counter_pool.clone())))
        .jwt_service(jwt_service)
        .entitlement(config.entitlement.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let backends = Backends {
        database: pool,
        cache: cache_pool,
        counter: counter_pool,
    };

    Ok(AppState::new(service_context, config, backends))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Installed first so startup store calls are recorded too
    let metrics = install_prometheus_recorder().map_err(|e| AppError::Config(e.to_string()))?;
    info!("Prometheus recorder installed");

    let state = create_app_state(config).await?.with_metrics(metrics);
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
