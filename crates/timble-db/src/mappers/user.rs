//! User entity <-> model mapper

use timble_core::entities::{NewUser, User};
use timble_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from(model.id),
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            premium: model.premium,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Bind values for inserting a user
pub struct UserInsert<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            password_hash: &user.password_hash,
        }
    }
}
