//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

/// Page used when none is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Requested page window and the base path used for navigation links.
///
/// A zero `page`/`per_page` or an empty `path` means "not set"; unset fields
/// are filled from defaults before the config is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page number (1-indexed).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default)]
    pub per_page: u32,
    /// Base path for page links.
    #[serde(default)]
    pub path: String,
}

impl PaginationConfig {
    /// Creates a config from its three fields.
    #[must_use]
    pub fn new(page: u32, per_page: u32, path: impl Into<String>) -> Self {
        Self {
            page,
            per_page,
            path: path.into(),
        }
    }

    /// Fills every unset field from `fallback`.
    ///
    /// Fields that are set on `self` always win; this is a per-field merge,
    /// not a choice between the two configs.
    #[must_use]
    pub fn merged_with(mut self, fallback: &Self) -> Self {
        if self.page == 0 {
            self.page = fallback.page;
        }
        if self.per_page == 0 {
            self.per_page = fallback.per_page;
        }
        if self.path.is_empty() {
            self.path.clone_from(&fallback.path);
        }
        self
    }

    /// Replaces a zero page or page size with the built-in defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.page == 0 {
            self.page = DEFAULT_PAGE;
        }
        if self.per_page == 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
        self
    }
}

/// One materialized page of records together with its navigation metadata.
///
/// Link fields are `None` when the target page does not exist or is the
/// current page, and are left out of the serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Current page number.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Next page, wrapping to 1 after the last page.
    pub next_page: u64,
    /// Previous page, wrapping to the last page before page 1.
    pub previous_page: u64,
    /// Highest valid page; 0 when there are no records.
    pub last_page: u64,
    /// Total number of matching records across all pages.
    pub total: u64,
    /// Link to page 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_page_url: Option<String>,
    /// Link to the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page_url: Option<String>,
    /// Link to the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    /// Link to the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page_url: Option<String>,
    /// 1-based index of the first record on this page.
    pub from: u64,
    /// 1-based index of the last record on this page.
    pub to: u64,
    /// Base path the links were built from.
    pub path: String,
    /// Records on this page.
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page_url.is_some()
    }

    /// Returns `true` if an earlier page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous_page_url.is_some()
    }

    /// Converts every item, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            page: self.page,
            per_page: self.per_page,
            next_page: self.next_page,
            previous_page: self.previous_page,
            last_page: self.last_page,
            total: self.total,
            first_page_url: self.first_page_url,
            last_page_url: self.last_page_url,
            next_page_url: self.next_page_url,
            previous_page_url: self.previous_page_url,
            from: self.from,
            to: self.to,
            path: self.path,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
