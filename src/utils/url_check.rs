//! Original-URL validation.
//!
//! Stored URLs are kept verbatim; this module only rejects input that can
//! never serve as a redirect target.

use url::Url;

/// Maximum accepted length of an original URL, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur while validating an original URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Original URL is required")]
    Empty,

    #[error("Original URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates that `input` is an absolute http(s) URL within the length bound.
///
/// # Security
///
/// Rejects potentially dangerous protocols like `javascript:`, `data:`,
/// `file:`, etc.
///
/// # Errors
///
/// Returns the specific [`UrlCheckError`] for empty input, over-long input,
/// malformed URLs, and non-HTTP(S) schemes.
pub fn validate_original_url(input: &str) -> Result<(), UrlCheckError> {
    if input.is_empty() {
        return Err(UrlCheckError::Empty);
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlCheckError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlCheckError::InvalidFormat("URL has no host".to_string()));
    }

    Ok(())
}
