//! Password hashing and verification utilities
//!
//! Uses Argon2id (OWASP recommended) with the salt stored alongside the
//! hash. The salt is generated separately so the credential store can keep
//! hash and salt in distinct columns; hashing is deterministic for a given
//! (password, salt) pair, which is what verification relies on.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Generate a fresh random salt, B64-encoded
///
/// 16 bytes from the OS CSPRNG, the fixed length the credential store
/// expects.
#[must_use]
pub fn generate_salt() -> String {
    SaltString::generate(&mut OsRng).as_str().to_string()
}

/// Hash a password with the given salt using Argon2id
///
/// Returns the full PHC string. Deterministic: the same (password, salt)
/// always produces the same output.
///
/// # Errors
/// Returns an error if the salt is not valid B64 or hashing fails
pub fn generate_hash(password: &str, salt: &str) -> Result<String, AppError> {
    let salt = SaltString::from_b64(salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password salt: {e}")))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a candidate password against a stored hash and salt
///
/// Recomputes the hash for (candidate, salt) and compares digests; the
/// comparison goes through `password_hash::Output`, which is constant time.
///
/// # Errors
/// Returns an error if the stored hash or salt is malformed
pub fn verify_password(candidate: &str, stored_hash: &str, stored_salt: &str) -> Result<bool, AppError> {
    let recomputed = generate_hash(candidate, stored_salt)?;

    let stored = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;
    let recomputed = PasswordHash::new(&recomputed)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))?;

    match (stored.hash, recomputed.hash) {
        (Some(expected), Some(actual)) => Ok(expected == actual),
        _ => Ok(false),
    }
}

/// Password hasher for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh salt
    #[must_use]
    pub fn salt(&self) -> String {
        generate_salt()
    }

    /// Hash a password with a salt
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str, salt: &str) -> Result<String, AppError> {
        generate_hash(password, salt)
    }

    /// Verify a password against a stored hash and salt
    ///
    /// # Errors
    /// Returns an error if the stored values are malformed
    pub fn verify(&self, candidate: &str, hash: &str, salt: &str) -> Result<bool, AppError> {
        verify_password(candidate, hash, salt)
    }
}

/// Validate password strength
///
/// Returns `Ok(())` if the password meets requirements:
/// - At least 8 characters
/// - Contains at least one uppercase letter
/// - Contains at least one lowercase letter
/// - Contains at least one digit
///
/// # Errors
/// Returns a validation error if the password doesn't meet requirements
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    if !password.chars().any(char::is_uppercase) {
        return Err(AppError::Validation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }

    if !password.chars().any(char::is_lowercase) {
        return Err(AppError::Validation(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }

    Ok(())
}
