//! Pagination and filtering query parameters.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 1000
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for store queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(25);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=1000).contains(&page_size) {
            return Err("Page size must be between 1 and 1000".to_string());
        }

        let offset = ((page - 1) * page_size) as i64;
        let limit = page_size as i64;

        Ok((offset, limit))
    }
}

/// Pagination metadata included in list responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// Query parameters for `GET /short-urls`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Explicit active filter: `true`, `false`, or absent for all records.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let (offset, limit) = params(None, None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 0);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_page_2_with_default_size() {
        let (offset, limit) = params(Some(2), None).validate_and_get_offset_limit().unwrap();
        assert_eq!(offset, 25);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_custom_page_and_size() {
        let (offset, limit) = params(Some(3), Some(50))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(offset, 100);
        assert_eq!(limit, 50);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_page_size_zero_is_error() {
        assert!(params(None, Some(0)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_page_size_above_maximum_is_error() {
        assert!(params(None, Some(1001)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_list_params_parse_active_filter() {
        let params: ListQueryParams =
            serde_json::from_str(r#"{"active": "true", "page": "2"}"#).unwrap();
        assert_eq!(params.active, Some(true));
        assert_eq!(params.pagination.page, Some(2));
    }

    #[test]
    fn test_list_params_default_to_no_filter() {
        let params: ListQueryParams = serde_json::from_str("{}").unwrap();
        assert!(params.active.is_none());
    }
}
