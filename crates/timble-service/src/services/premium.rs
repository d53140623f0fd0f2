//! Premium service
//!
//! Grants and revokes the premium entitlement. The relational store is written
//! first; the entitlement cache is refreshed afterwards on a best-effort basis.

use tracing::{info, instrument, warn};

use timble_cache::KeyFormatter;
use timble_core::{DomainError, UserId};

use crate::dto::MessageResponse;

use super::context::ServiceContext;
use super::entitlement::{PREMIUM_FALSE, PREMIUM_TRUE};
use super::error::ServiceResult;

const ELIGIBLE: &str = "true";

/// Premium state manager
pub struct PremiumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PremiumService<'a> {
    /// Create a new PremiumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Grant premium to a user
    ///
    /// With the eligibility gate enabled, the user's eligibility flag must be
    /// `"true"`; otherwise nothing is mutated.
    #[instrument(skip(self))]
    pub async fn grant(&self, user_id: UserId) -> ServiceResult<MessageResponse> {
        let gated = self.ctx.entitlement().require_premium_eligibility;
        let eligibility_key = KeyFormatter::premium_eligibility(user_id);

        if gated {
            let flag = self.ctx.counter_store().get(&eligibility_key).await?;
            if flag.as_deref() != Some(ELIGIBLE) {
                warn!(user_id = %user_id, "Premium grant rejected: not eligible");
                return Err(DomainError::NotEligibleForPremium.into());
            }
        }

        self.set_premium(user_id, true).await?;

        if gated {
            if let Err(e) = self.ctx.counter_store().delete(&eligibility_key).await {
                warn!(user_id = %user_id, error = %e, "Failed to clear premium eligibility flag");
            }
        }

        info!(user_id = %user_id, "Premium granted");
        Ok(MessageResponse::new("Premium granted"))
    }

    /// Revoke premium from a user
    #[instrument(skip(self))]
    pub async fn revoke(&self, user_id: UserId) -> ServiceResult<MessageResponse> {
        self.set_premium(user_id, false).await?;

        info!(user_id = %user_id, "Premium revoked");
        Ok(MessageResponse::new("Unsubscribed from premium"))
    }

    /// Write the flag to the store, then mirror it into the cache
    async fn set_premium(&self, user_id: UserId, premium: bool) -> ServiceResult<()> {
        self.ctx.user_repo().update_premium(user_id, premium).await?;

        let key = KeyFormatter::premium(user_id);
        let value = if premium { PREMIUM_TRUE } else { PREMIUM_FALSE };
        if let Err(e) = self
            .ctx
            .cache_store()
            .set(&key, value, self.ctx.entitlement().premium_cache_ttl())
            .await
        {
            warn!(%key, error = %e, "Failed to refresh entitlement cache");
        }

        Ok(())
    }
}
