//! Response DTO for short URL deactivation.

use serde::Serialize;

/// Body of a successful `PATCH /short-urls/{short_key}/deactivate`.
#[derive(Debug, Serialize)]
pub struct DeactivateResponse {
    pub status: &'static str,
}

impl DeactivateResponse {
    /// The only success payload this endpoint produces.
    pub fn deactivated() -> Self {
        Self {
            status: "deactivated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_expected_shape() {
        let json = serde_json::to_string(&DeactivateResponse::deactivated()).unwrap();
        assert_eq!(json, r#"{"status":"deactivated"}"#);
    }
}
