//! Paginated response envelope and derived page metadata.

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Page metadata derived from a request and the total match count.
///
/// Serialised in camelCase:
/// `{"page":1,"limit":25,"totalCount":0,"totalPages":0,"hasNextPage":false,"hasPreviousPage":false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// 1-based page index echoed from the request.
    pub page: u32,
    /// Page size echoed from the request.
    pub limit: u32,
    /// Number of matches across all pages.
    pub total_count: u64,
    /// `ceil(total_count / limit)`.
    pub total_pages: u64,
    /// Whether a page after this one exists.
    pub has_next_page: bool,
    /// Whether a page before this one exists.
    pub has_previous_page: bool,
}

impl PaginationInfo {
    /// Derive metadata for `request` given the total number of matches.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PaginationInfo};
    ///
    /// let request = PageRequest::new(2, 25).expect("valid request");
    /// let info = PaginationInfo::new(request, 60);
    /// assert_eq!(info.total_pages, 3);
    /// assert!(info.has_next_page);
    /// assert!(info.has_previous_page);
    /// ```
    #[must_use]
    pub fn new(request: PageRequest, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(u64::from(request.limit()));
        Self {
            page: request.page(),
            limit: request.limit(),
            total_count,
            total_pages,
            has_next_page: u64::from(request.page()) < total_pages,
            has_previous_page: request.page() > 1,
        }
    }

    /// Metadata for a request that matched nothing.
    ///
    /// Both navigation flags are `false` regardless of the requested page.
    #[must_use]
    pub const fn empty(request: PageRequest) -> Self {
        Self {
            page: request.page(),
            limit: request.limit(),
            total_count: 0,
            total_pages: 0,
            has_next_page: false,
            has_previous_page: false,
        }
    }
}

/// `{data, pagination}` envelope returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on the current page.
    pub data: Vec<T>,
    /// Metadata describing the page.
    pub pagination: PaginationInfo,
}

impl<T> Paginated<T> {
    /// Wrap a page of items.
    #[must_use]
    pub const fn new(data: Vec<T>, pagination: PaginationInfo) -> Self {
        Self { data, pagination }
    }

    /// Zero-result envelope for `request`.
    #[must_use]
    pub const fn empty(request: PageRequest) -> Self {
        Self {
            data: Vec::new(),
            pagination: PaginationInfo::empty(request),
        }
    }

    /// Convert every item while keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
