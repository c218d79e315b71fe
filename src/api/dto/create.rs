//! Request DTO for short URL creation.

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /short-urls`.
///
/// Validation here is the fast-fail pass; the service re-validates and owns
/// the authoritative rules (URL shape, key format, expiry bounds).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    #[validate(length(min = 1, max = 2048), url)]
    pub original_url: String,

    /// Caller-chosen short key; same alphabet and length as generated keys.
    #[serde(default)]
    pub custom_key: Option<String>,

    /// Expiry window in days, 1..=365. Defaults to 1 day.
    #[serde(default)]
    #[validate(range(min = 1, max = 365))]
    pub expires_days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_is_valid() {
        let request: CreateShortUrlRequest =
            serde_json::from_str(r#"{"original_url": "https://example.com"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.custom_key.is_none());
        assert!(request.expires_days.is_none());
    }

    #[test]
    fn test_full_request_is_valid() {
        let request: CreateShortUrlRequest = serde_json::from_str(
            r#"{"original_url": "https://example.com", "custom_key": "abc123", "expires_days": 7}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.custom_key.as_deref(), Some("abc123"));
        assert_eq!(request.expires_days, Some(7));
    }

    #[test]
    fn test_rejects_bad_url() {
        let request: CreateShortUrlRequest =
            serde_json::from_str(r#"{"original_url": "not a url"}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_expiry() {
        let request: CreateShortUrlRequest =
            serde_json::from_str(r#"{"original_url": "https://example.com", "expires_days": 0}"#)
                .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_url_fails_deserialization() {
        assert!(serde_json::from_str::<CreateShortUrlRequest>(r#"{}"#).is_err());
    }
}
