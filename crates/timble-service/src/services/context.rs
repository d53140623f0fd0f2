//! Service context - dependency container for services
//!
//! Holds the store handles, the JWT service, and the entitlement tunables.

use std::sync::Arc;

use timble_common::auth::JwtService;
use timble_common::EntitlementConfig;
use timble_core::traits::{CacheStore, CounterStore, ReactionRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Every collaborator is a trait object, so tests swap in in-memory stores.
/// Configuration is carried here rather than in globals.
#[derive(Clone)]
pub struct ServiceContext {
    // Relational store
    user_repo: Arc<dyn UserRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Key-value stores
    cache_store: Arc<dyn CacheStore>,
    counter_store: Arc<dyn CounterStore>,

    jwt_service: Arc<JwtService>,
    entitlement: EntitlementConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        cache_store: Arc<dyn CacheStore>,
        counter_store: Arc<dyn CounterStore>,
        jwt_service: Arc<JwtService>,
        entitlement: EntitlementConfig,
    ) -> Self {
        Self {
            user_repo,
            reaction_repo,
            cache_store,
            counter_store,
            jwt_service,
            entitlement,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Stores ===

    /// Get the entitlement cache
    pub fn cache_store(&self) -> &dyn CacheStore {
        self.cache_store.as_ref()
    }

    /// Get the counter store
    pub fn counter_store(&self) -> &dyn CounterStore {
        self.counter_store.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the entitlement and quota settings
    pub fn entitlement(&self) -> &EntitlementConfig {
        &self.entitlement
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("stores", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("entitlement", &self.entitlement)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    cache_store: Option<Arc<dyn CacheStore>>,
    counter_store: Option<Arc<dyn CounterStore>>,
    jwt_service: Option<Arc<JwtService>>,
    entitlement: Option<EntitlementConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn cache_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.cache_store = Some(store);
        self
    }

    pub fn counter_store(mut self, store: Arc<dyn CounterStore>) -> Self {
        self.counter_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Defaults to `EntitlementConfig::default()` when not set
    pub fn entitlement(mut self, config: EntitlementConfig) -> Self {
        self.entitlement = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.cache_store
                .ok_or_else(|| ServiceError::validation("cache_store is required"))?,
            self.counter_store
                .ok_or_else(|| ServiceError::validation("counter_store is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.entitlement.unwrap_or_default(),
        ))
    }
}
