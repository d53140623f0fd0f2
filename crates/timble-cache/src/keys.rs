//! Key layout for the entitlement cache and the counter store.
//!
//! Pure functions; the clock and time zone are passed in.

use chrono::{DateTime, FixedOffset, Utc};
use timble_core::UserId;

/// Key prefix for cached premium flags
pub const PREMIUM_PREFIX: &str = "premium:";

/// Key prefix for daily reaction counters
pub const REACTION_COUNTER_PREFIX: &str = "reaction:";

/// Key prefix for one-time premium eligibility flags
pub const PREMIUM_ELIGIBILITY_PREFIX: &str = "premium_eligibility:";

/// Builds cache and counter keys
pub struct KeyFormatter;

impl KeyFormatter {
    /// `premium:<user_id>`
    #[must_use]
    pub fn premium(user_id: UserId) -> String {
        format!("{PREMIUM_PREFIX}{user_id}")
    }

    /// `reaction:<YYYY-MM-DD>:<user_id>`, the date taken in `tz`
    #[must_use]
    pub fn reaction_counter(user_id: UserId, now: DateTime<Utc>, tz: FixedOffset) -> String {
        let day = now.with_timezone(&tz).format("%Y-%m-%d");
        format!("{REACTION_COUNTER_PREFIX}{day}:{user_id}")
    }

    /// `premium_eligibility:<user_id>`
    #[must_use]
    pub fn premium_eligibility(user_id: UserId) -> String {
        format!("{PREMIUM_ELIGIBILITY_PREFIX}{user_id}")
    }
}
