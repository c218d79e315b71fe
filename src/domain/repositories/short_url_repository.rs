//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for short URL storage.
///
/// All read-then-write operations are atomic at the storage layer: `insert`
/// relies on a uniqueness constraint on `short_key` (never on a prior
/// existence check), and `set_active` is a single compare-and-set mutation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Persists a new short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_key` already exists, including
    /// when a concurrent insert wins the race.
    /// Returns [`AppError::Unavailable`] / [`AppError::Internal`] on store errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a short URL by key, regardless of active or expiry state.
    async fn find_by_key(&self, short_key: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a short URL by key that is active and unexpired at `now`.
    async fn find_resolvable(
        &self,
        short_key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Returns true if any record, in any state, holds `short_key`.
    async fn exists_by_key(&self, short_key: &str) -> Result<bool, AppError>;

    /// Atomically sets `is_active` on one record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(updated))` if the record existed and transitioned
    /// - `Ok(None)` if no row changed: the record is absent or already in the
    ///   requested state (e.g. the loser of a concurrent deactivation)
    async fn set_active(&self, id: i64, active: bool) -> Result<Option<ShortUrl>, AppError>;

    /// Lists short URLs ordered by `created_at` descending.
    ///
    /// `active` filters explicitly: `Some(true)` for active records,
    /// `Some(false)` for deactivated ones, `None` for everything.
    async fn list(
        &self,
        active: Option<bool>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts short URLs under the same `active` filter as [`Self::list`].
    async fn count(&self, active: Option<bool>) -> Result<i64, AppError>;
}
