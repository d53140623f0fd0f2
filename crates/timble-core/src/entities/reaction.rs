//! Reaction entity - one user's verdict on another user's profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Kind of reaction, stored as a SMALLINT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i16)]
pub enum ReactionType {
    Undecided = 0,
    Pass = 1,
    Like = 2,
}

impl ReactionType {
    /// Numeric value as persisted
    #[inline]
    pub const fn as_i16(self) -> i16 {
        self as i16
    }

    /// Pass and like count against the daily quota; undecided does not
    #[inline]
    pub const fn is_consequential(self) -> bool {
        matches!(self, Self::Pass | Self::Like)
    }
}

impl TryFrom<i32> for ReactionType {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Undecided),
            1 => Ok(Self::Pass),
            2 => Ok(Self::Like),
            other => Err(DomainError::invalid_field(
                "type",
                format!("unknown reaction type {other}"),
            )),
        }
    }
}

impl TryFrom<i16> for ReactionType {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::try_from(i32::from(value))
    }
}

impl From<ReactionType> for i32 {
    fn from(value: ReactionType) -> Self {
        i32::from(value.as_i16())
    }
}

/// A reaction the acting user wants to record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionRequest {
    pub user_id: UserId,
    pub target_id: UserId,
    pub reaction_type: ReactionType,
}

impl ReactionRequest {
    /// Build a request from raw input, rejecting unknown reaction types
    pub fn new(user_id: UserId, target_id: UserId, raw_type: i32) -> Result<Self, DomainError> {
        let request = Self {
            user_id,
            target_id,
            reaction_type: ReactionType::try_from(raw_type)?,
        };
        request.validate()?;
        Ok(request)
    }

    /// Structural checks that need no store access
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.target_id.is_zero() {
            return Err(DomainError::invalid_field(
                "target_id",
                "target_id is required",
            ));
        }
        if self.target_id.as_i64().is_none() {
            return Err(DomainError::invalid_field(
                "target_id",
                "target_id is out of range",
            ));
        }
        if self.target_id == self.user_id {
            return Err(DomainError::invalid_field(
                "target_id",
                "cannot react to yourself",
            ));
        }
        Ok(())
    }
}

/// Persisted reaction, unique per (user_id, target_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: UserId,
    pub target_id: UserId,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction stamped with the current time
    pub fn new(user_id: UserId, target_id: UserId, reaction_type: ReactionType) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            target_id,
            reaction_type,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ReactionRequest> for Reaction {
    fn from(request: ReactionRequest) -> Self {
        Self::new(request.user_id, request.target_id, request.reaction_type)
    }
}
