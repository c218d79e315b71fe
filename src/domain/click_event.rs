//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

/// An in-memory click event awaiting persistence.
///
/// Passed from the redirect path to the background worker over a bounded
/// channel, decoupling the HTTP response from the store write. The timestamp
/// is captured at resolution time so queueing delay never skews the click
/// history.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub short_url_id: i64,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a new click event for a resolved short URL.
    pub fn new(short_url_id: i64, clicked_at: DateTime<Utc>) -> Self {
        Self {
            short_url_id,
            clicked_at,
        }
    }
}
