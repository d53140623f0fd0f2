//! In-memory store doubles for service tests
//!
//! Every double counts its calls and can be told to fail, so tests can assert
//! both outcomes and which stores were touched.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use timble_common::{hash_password, EntitlementConfig, JwtService};
use timble_core::traits::{CacheStore, CounterStore, ReactionRepository, RepoResult, UserRepository};
use timble_core::{DomainError, NewUser, Reaction, User, UserId};
use timble_service::{RateLimiter, ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "service-test-secret-with-enough-bytes";
pub const TEST_PASSWORD: &str = "correct horse battery";

fn injected(flag: &AtomicBool, make: impl FnOnce() -> DomainError) -> RepoResult<()> {
    if flag.load(Ordering::SeqCst) {
        Err(make())
    } else {
        Ok(())
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<HashMap<UserId, User>>,
    next_id: AtomicU64,
    pub calls: AtomicUsize,
    pub fail_find: AtomicBool,
    pub fail_update: AtomicBool,
}

impl MemoryUsers {
    pub fn insert(&self, username: &str, premium: bool) -> UserId {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut user = User::new(
            id,
            username.to_string(),
            format!("{username}@example.com"),
            String::new(),
        );
        user.premium = premium;
        self.rows.lock().insert(id, user);
        id
    }

    pub fn set_password(&self, id: UserId, password: &str) {
        let hash = hash_password(password).unwrap();
        if let Some(user) = self.rows.lock().get_mut(&id) {
            user.password_hash = hash;
        }
    }

    pub fn premium(&self, id: UserId) -> Option<bool> {
        self.rows.lock().get(&id).map(|u| u.premium)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    fn db_failure(op: &str) -> DomainError {
        DomainError::DatabaseError(format!("{op}: injected failure"))
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_find, || Self::db_failure("find user"))?;
        Ok(self.rows.lock().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_find, || Self::db_failure("find user by username"))?;
        Ok(self
            .rows
            .lock()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock();
        if rows.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::DuplicateUser { field: "username" });
        }
        if rows.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::DuplicateUser { field: "email" });
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let user = User::new(
            id,
            new_user.username.clone(),
            new_user.email.clone(),
            new_user.password_hash.clone(),
        );
        rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update_premium(&self, id: UserId, premium: bool) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_update, || Self::db_failure("update premium"))?;
        let mut rows = self.rows.lock();
        let user = rows.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.set_premium(premium);
        Ok(())
    }
}

// ============================================================================
// Reactions
// ============================================================================

#[derive(Default)]
pub struct MemoryReactions {
    rows: Mutex<HashMap<(UserId, UserId), Reaction>>,
    pub calls: AtomicUsize,
    pub fail_upsert: AtomicBool,
}

impl MemoryReactions {
    pub fn get(&self, user_id: UserId, target_id: UserId) -> Option<Reaction> {
        self.rows.lock().get(&(user_id, target_id)).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactions {
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_upsert, || {
            DomainError::DatabaseError("upsert reaction: injected failure".to_string())
        })?;

        let mut rows = self.rows.lock();
        rows.entry((reaction.user_id, reaction.target_id))
            .and_modify(|existing| {
                existing.reaction_type = reaction.reaction_type;
                existing.updated_at = reaction.updated_at;
            })
            .or_insert_with(|| reaction.clone());
        Ok(())
    }

    async fn find(&self, user_id: UserId, target_id: UserId) -> RepoResult<Option<Reaction>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(user_id, target_id))
    }
}

// ============================================================================
// Entitlement cache
// ============================================================================

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (Vec<u8>, Duration)>>,
    pub calls: AtomicUsize,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
}

impl MemoryCache {
    pub fn put(&self, key: &str, value: &[u8]) {
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_vec(), Duration::from_secs(86_400)));
    }

    pub fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().get(key).map(|(v, _)| v.clone())
    }

    pub fn ttl(&self, key: &str) -> Option<Duration> {
        self.entries.lock().get(key).map(|(_, ttl)| *ttl)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_get, || {
            DomainError::CacheError("cache get: injected failure".to_string())
        })?;
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_set, || {
            DomainError::CacheError("cache set: injected failure".to_string())
        })?;
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_vec(), ttl));
        Ok(())
    }
}

// ============================================================================
// Counter store
// ============================================================================

#[derive(Default)]
pub struct MemoryCounter {
    values: Mutex<HashMap<String, String>>,
    expiries: Mutex<HashMap<String, Duration>>,
    pub calls: AtomicUsize,
    pub incr_calls: AtomicUsize,
    pub expire_calls: AtomicUsize,
    pub fail_get: AtomicBool,
    pub fail_incr: AtomicBool,
    pub fail_expire: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl MemoryCounter {
    pub fn put(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    pub fn count(&self, key: &str) -> i64 {
        self.value(key).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    pub fn expiry(&self, key: &str) -> Option<Duration> {
        self.expiries.lock().get(key).copied()
    }

    fn failure(op: &str) -> DomainError {
        DomainError::CacheError(format!("{op}: injected failure"))
    }
}

#[async_trait]
impl CounterStore for MemoryCounter {
    async fn incr(&self, key: &str) -> RepoResult<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.incr_calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_incr, || Self::failure("counter incr"))?;

        let mut values = self.values.lock();
        let current = match values.get(key) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| Self::failure("counter incr: value is not an integer"))?,
            None => 0,
        };
        let next = current + 1;
        values.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.expire_calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_expire, || Self::failure("counter expire"))?;
        if self.values.lock().contains_key(key) {
            self.expiries.lock().insert(key.to_string(), ttl);
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_get, || Self::failure("counter get"))?;
        Ok(self.value(key))
    }

    async fn delete(&self, key: &str) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        injected(&self.fail_delete, || Self::failure("counter delete"))?;
        self.values.lock().remove(key);
        self.expiries.lock().remove(key);
        Ok(())
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub ctx: ServiceContext,
    pub users: Arc<MemoryUsers>,
    pub reactions: Arc<MemoryReactions>,
    pub cache: Arc<MemoryCache>,
    pub counter: Arc<MemoryCounter>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(EntitlementConfig::default())
    }

    pub fn with_config(config: EntitlementConfig) -> Self {
        let users = Arc::new(MemoryUsers::default());
        let reactions = Arc::new(MemoryReactions::default());
        let cache = Arc::new(MemoryCache::default());
        let counter = Arc::new(MemoryCounter::default());

        let ctx = ServiceContextBuilder::new()
            .user_repo(users.clone())
            .reaction_repo(reactions.clone())
            .cache_store(cache.clone())
            .counter_store(counter.clone())
            .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
            .entitlement(config)
            .build()
            .expect("all dependencies provided");

        Self {
            ctx,
            users,
            reactions,
            cache,
            counter,
        }
    }

    /// Today's counter key for a user
    pub fn daily_key(&self, user_id: UserId) -> String {
        RateLimiter::new(&self.ctx).daily_key(user_id)
    }

    /// Total calls across every store
    pub fn store_calls(&self) -> usize {
        self.users.calls.load(Ordering::SeqCst)
            + self.reactions.calls.load(Ordering::SeqCst)
            + self.cache.calls.load(Ordering::SeqCst)
            + self.counter.calls.load(Ordering::SeqCst)
    }
}

pub fn fail(flag: &AtomicBool) {
    flag.store(true, Ordering::SeqCst);
}

pub fn recover(flag: &AtomicBool) {
    flag.store(false, Ordering::SeqCst);
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
