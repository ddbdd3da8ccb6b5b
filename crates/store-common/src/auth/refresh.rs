//! Opaque refresh token value generation
//!
//! Refresh tokens carry no claims; they are random byte strings whose only
//! meaning is the row they match in the refresh token store.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Entropy of a refresh token value
pub const REFRESH_TOKEN_BYTES: usize = 64;

/// Generate an unguessable opaque token value
///
/// 64 bytes from the OS CSPRNG, standard base64.
#[must_use]
pub fn generate_refresh_token_value() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}
