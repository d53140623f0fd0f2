//! Reaction entity <-> model mapper

use timble_core::entities::{Reaction, ReactionType};
use timble_core::error::DomainError;
use timble_core::value_objects::UserId;

use crate::models::ReactionModel;

/// Rows carry a SMALLINT type; anything outside the enum is a corrupt row
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let reaction_type = ReactionType::try_from(model.reaction_type).map_err(|_| {
            DomainError::DatabaseError(format!(
                "find reaction: unexpected type {} in user_reactions",
                model.reaction_type
            ))
        })?;

        Ok(Reaction {
            user_id: UserId::from(model.user_id),
            target_id: UserId::from(model.target_id),
            reaction_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Bind values for the reaction upsert
#[derive(Debug)]
pub struct ReactionUpsert {
    pub user_id: i64,
    pub target_id: i64,
    pub reaction_type: i16,
}

impl ReactionUpsert {
    pub fn new(reaction: &Reaction) -> Result<Self, DomainError> {
        let column = |id: UserId, field: &'static str| {
            id.as_i64()
                .ok_or_else(|| DomainError::invalid_field(field, "id is out of range"))
        };

        Ok(Self {
            user_id: column(reaction.user_id, "user_id")?,
            target_id: column(reaction.target_id, "target_id")?,
            reaction_type: reaction.reaction_type.as_i16(),
        })
    }
}
