//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short URL successfully serves a redirect.
///
/// Click records are append-only: created exactly once per successful
/// resolution, never mutated or deleted individually.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub short_url_id: i64,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(id: i64, short_url_id: i64, clicked_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_url_id,
            clicked_at,
        }
    }
}

/// Input data for recording a new click event.
///
/// `clicked_at` is the resolution time, captured when the redirect was
/// served, not when the record reaches the store.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub short_url_id: i64,
    pub clicked_at: DateTime<Utc>,
}
