//! Daily reaction quota
//!
//! One counter per user per calendar day (in the configured time zone).
//! The counter is only ever changed with INCR; its expiry is attached on the
//! 0 to 1 transition, so no reset job is needed.

use chrono::Utc;
use tracing::{debug, instrument};

use timble_cache::KeyFormatter;
use timble_core::{DomainError, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Counter-backed limiter for non-premium users
pub struct RateLimiter<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RateLimiter<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Today's counter key for a user
    pub fn daily_key(&self, user_id: UserId) -> String {
        KeyFormatter::reaction_counter(user_id, Utc::now(), self.ctx.entitlement().time_zone())
    }

    /// Read path. Fails with `ReactionLimitExceeded` once today's count has
    /// reached the limit. A missing or unparseable counter counts as zero;
    /// a counter store failure propagates.
    #[instrument(skip(self))]
    pub async fn check(&self, user_id: UserId) -> ServiceResult<i64> {
        let key = self.daily_key(user_id);
        let limit = self.ctx.entitlement().daily_reaction_limit;

        let count = self
            .ctx
            .counter_store()
            .get(&key)
            .await?
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);

        if count >= i64::from(limit) {
            debug!(%key, count, limit, "Daily reaction limit reached");
            return Err(DomainError::ReactionLimitExceeded { limit }.into());
        }

        Ok(count)
    }

    /// Write path. Increments today's counter and, on the first increment,
    /// sets the counter's expiry. Returns the post-increment count.
    #[instrument(skip(self))]
    pub async fn consume(&self, user_id: UserId) -> ServiceResult<i64> {
        let key = self.daily_key(user_id);
        let store = self.ctx.counter_store();

        let count = store.incr(&key).await?;
        if count == 1 {
            store
                .expire(&key, self.ctx.entitlement().reaction_counter_ttl())
                .await?;
        }

        Ok(count)
    }
}
