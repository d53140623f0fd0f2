//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, UserToken};
pub use password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_EXCLUSIVE,
};
