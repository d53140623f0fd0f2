//! Premium entitlement lookup
//!
//! Cache-aside: the cache answers when it can, the relational store is
//! authoritative otherwise. Reads never populate the cache; only
//! `PremiumService` writes it.

use tracing::{debug, instrument, warn};

use timble_cache::KeyFormatter;
use timble_core::{DomainError, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Cached value meaning "premium"
pub(crate) const PREMIUM_TRUE: &[u8] = b"true";
/// Cached value meaning "not premium"
pub(crate) const PREMIUM_FALSE: &[u8] = b"false";

/// Where an entitlement answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitlementSource {
    Cache,
    Store,
}

/// Resolved premium status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    pub premium: bool,
    pub source: EntitlementSource,
}

/// Resolves whether a user is premium
pub struct EntitlementResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EntitlementResolver<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cache first; on a miss, an empty value, or a cache failure, read the
    /// user row. A store failure propagates. A missing user is `UserNotFound`.
    #[instrument(skip(self))]
    pub async fn is_premium(&self, user_id: UserId) -> ServiceResult<Entitlement> {
        let key = KeyFormatter::premium(user_id);

        match self.ctx.cache_store().get(&key).await {
            Ok(Some(value)) if !value.is_empty() => {
                return Ok(Entitlement {
                    premium: value == PREMIUM_TRUE,
                    source: EntitlementSource::Cache,
                });
            }
            Ok(_) => debug!(%key, "Entitlement cache miss"),
            Err(e) => warn!(%key, error = %e, "Entitlement cache read failed, using store"),
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(Entitlement {
            premium: user.premium,
            source: EntitlementSource::Store,
        })
    }
}
