//! Authentication utilities

mod jwt;
mod password;
mod refresh;

pub use jwt::{AccessClaims, TokenIssuer};
pub use password::{
    generate_hash, generate_salt, validate_password_strength, verify_password, PasswordHasher,
};
pub use refresh::{generate_refresh_token_value, REFRESH_TOKEN_BYTES};
