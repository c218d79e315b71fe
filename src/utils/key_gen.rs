//! Short key generation and validation utilities.
//!
//! Provides cryptographically secure random key generation and validation
//! for custom user-provided keys.

use crate::error::AppError;
use serde_json::json;

/// Alphabet short keys are drawn from.
pub const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Exact length of every short key, generated or custom.
pub const KEY_LENGTH: usize = 6;

// Largest multiple of the alphabet size that fits in a byte; bytes at or
// above this are rejected so `byte % 62` stays uniform.
const REJECTION_LIMIT: u8 = (u8::MAX / KEY_ALPHABET.len() as u8) * KEY_ALPHABET.len() as u8;

/// Generates a random short key of [`KEY_LENGTH`] characters.
///
/// Uses the OS CSPRNG via `getrandom` and rejection sampling, so every
/// character is drawn uniformly from [`KEY_ALPHABET`]. Uniqueness against the
/// store is the caller's responsibility.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn random_key() -> String {
    let mut key = String::with_capacity(KEY_LENGTH);
    let mut buffer = [0u8; 16];

    while key.len() < KEY_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if byte < REJECTION_LIMIT {
                key.push(KEY_ALPHABET[(byte % KEY_ALPHABET.len() as u8) as usize] as char);
                if key.len() == KEY_LENGTH {
                    break;
                }
            }
        }
    }

    key
}

/// Validates a user-provided custom short key.
///
/// # Rules
///
/// - Exactly [`KEY_LENGTH`] characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any validation rule is violated.
pub fn validate_custom_key(key: &str) -> Result<(), AppError> {
    if key.len() != KEY_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom key must be exactly {} characters", KEY_LENGTH),
            json!({ "provided_length": key.len() }),
        ));
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom key can only contain letters and digits",
            json!({ "key": key }),
        ));
    }

    Ok(())
}
