//! Reaction service
//!
//! Records a like/pass/undecided from one user towards another, enforcing the
//! daily quota for non-premium users.

use tracing::{debug, error, info, instrument};

use timble_core::{DomainError, Reaction, ReactionRequest};

use super::context::ServiceContext;
use super::entitlement::EntitlementResolver;
use super::error::ServiceResult;
use super::rate_limit::RateLimiter;

/// Reaction engine
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a reaction
    ///
    /// Quota is consumed only after the reaction has been persisted, and only
    /// for non-premium users reacting with pass or like.
    #[instrument(skip(self), fields(user_id = %request.user_id, target_id = %request.target_id))]
    pub async fn react(&self, request: ReactionRequest) -> ServiceResult<()> {
        request.validate()?;

        let entitlement = EntitlementResolver::new(self.ctx)
            .is_premium(request.user_id)
            .await?;
        let limited = !entitlement.premium;

        let limiter = RateLimiter::new(self.ctx);
        if limited {
            limiter.check(request.user_id).await?;
        }

        self.ctx
            .user_repo()
            .find_by_id(request.target_id)
            .await?
            .ok_or(DomainError::UserNotFound(request.target_id))?;

        let reaction = Reaction::from(request);
        self.ctx.reaction_repo().upsert(&reaction).await?;

        info!(
            reaction_type = reaction.reaction_type.as_i16(),
            premium = entitlement.premium,
            "Reaction recorded"
        );

        if limited && reaction.reaction_type.is_consequential() {
            match limiter.consume(reaction.user_id).await {
                Ok(count) => debug!(count, "Daily reaction counter advanced"),
                Err(e) => error!(error = %e, "Failed to advance daily reaction counter"),
            }
        }

        Ok(())
    }
}
