//! Collision-checked short key allocation.

use std::sync::Arc;

use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::key_gen::random_key;
use serde_json::json;

/// Maximum candidate keys tried before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Allocates short keys that are unused at generation time.
///
/// Each candidate is checked against the store, including inactive and
/// expired records, since a key is never reused. The check is a fast-fail
/// optimization only; the storage-layer uniqueness constraint remains the
/// correctness guarantee at insert time.
pub struct KeyGenerator {
    short_urls: Arc<dyn ShortUrlRepository>,
}

impl KeyGenerator {
    /// Creates a new key generator backed by the given store.
    pub fn new(short_urls: Arc<dyn ShortUrlRepository>) -> Self {
        Self { short_urls }
    }

    /// Generates a short key not currently present in the store.
    ///
    /// Attempts up to 10 candidates before failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyGenerationExhausted`] when every candidate
    /// collided. Fatal to the calling creation attempt; not retried here.
    pub async fn generate(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let key = random_key();

            if !self.short_urls.exists_by_key(&key).await? {
                return Ok(key);
            }
        }

        Err(AppError::key_generation_exhausted(
            "Failed to generate a unique short key",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
