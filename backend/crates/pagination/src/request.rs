//! Page requests derived from `page` and `limit` query parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lenient::parse_leading_integer;

/// Page used when the client omits `page` or sends an unusable value.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the client omits `limit` or sends an unusable value.
pub const DEFAULT_LIMIT: u32 = 25;
/// Upper bound applied to client-supplied page sizes.
pub const MAX_LIMIT: u32 = 100;

/// Errors raised when constructing a [`PageRequest`] from typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Pages are 1-based.
    #[error("page must be at least 1")]
    InvalidPage,
    /// The limit is zero or exceeds [`MAX_LIMIT`].
    #[error("limit {limit} must be between 1 and {max}")]
    InvalidLimit { limit: u32, max: u32 },
}

/// Validated 1-based page window.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= limit <= MAX_LIMIT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a request from typed values, rejecting out-of-range input.
    ///
    /// # Errors
    /// Returns [`PaginationError`] when `page` is zero or `limit` falls
    /// outside `1..=MAX_LIMIT`.
    pub const fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(PaginationError::InvalidLimit {
                limit,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { page, limit })
    }

    /// Build a request from raw query-string values.
    ///
    /// Values are parsed leniently. A missing or unparseable page becomes
    /// [`DEFAULT_PAGE`], pages below 1 clamp to 1, unusable limits become
    /// [`DEFAULT_LIMIT`] and oversized limits clamp to [`MAX_LIMIT`].
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::from_raw(Some("3"), Some("50"));
    /// assert_eq!((request.page(), request.limit()), (3, 50));
    ///
    /// let fallback = PageRequest::from_raw(Some("abc"), None);
    /// assert_eq!((fallback.page(), fallback.limit()), (1, 25));
    /// ```
    #[must_use]
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(parse_leading_integer)
            .map_or(DEFAULT_PAGE, |value| {
                u32::try_from(value.max(1)).unwrap_or(u32::MAX)
            });
        let limit = limit
            .and_then(parse_leading_integer)
            .filter(|value| *value >= 1)
            .map_or(DEFAULT_LIMIT, |value| {
                u32::try_from(value.min(i64::from(MAX_LIMIT))).unwrap_or(MAX_LIMIT)
            });
        Self { page, limit }
    }

    /// 1-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip before this page starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}
