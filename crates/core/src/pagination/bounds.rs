//! Page boundary math.
//!
//! Everything here is a pure function of `(page, per_page, total)` plus the
//! base path used for links.

use pageturn_shared::PageResult;

use super::error::PaginationError;

/// Navigation and offset fields for one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Requested page (1-indexed).
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total number of matching records.
    pub total: u64,
    /// Highest valid page; 0 when `total` is 0.
    pub last_page: u64,
    /// Page after this one, wrapping to 1.
    pub next_page: u64,
    /// Page before this one, wrapping to `last_page`.
    pub previous_page: u64,
    /// 1-based index of the first record on the page.
    pub from: u64,
    /// 1-based index of the last record on the page.
    pub to: u64,
}

/// Navigation links for a page. A link is `None` when it would point at the
/// current page or outside `1..=last_page`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// Link to page 1.
    pub first: Option<String>,
    /// Link to the last page.
    pub last: Option<String>,
    /// Link to the next page.
    pub next: Option<String>,
    /// Link to the previous page.
    pub previous: Option<String>,
}

impl PageBounds {
    /// Derives every pagination field for `page`.
    ///
    /// An empty result set has `last_page == 0` but page 1 is still served.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::InvalidConfiguration` if `page` or `per_page` is 0.
    /// Returns `PaginationError::PageOutOfBounds` if `page` lies past the last page.
    pub fn calculate(page: u64, per_page: u64, total: u64) -> Result<Self, PaginationError> {
        if page == 0 || per_page == 0 {
            return Err(PaginationError::invalid_configuration(format!(
                "page ({page}) and per_page ({per_page}) must both be at least 1"
            )));
        }

        let last_page = total.div_ceil(per_page);
        if page > last_page.max(1) {
            return Err(PaginationError::PageOutOfBounds { page, last_page });
        }

        let next_page = match page.saturating_add(1) {
            next if next > last_page => 1,
            next => next,
        };
        let previous_page = if page <= 1 { last_page } else { page - 1 };

        let from = 1 + (page - 1) * per_page;
        let to = if page >= last_page {
            total
        } else {
            page * per_page
        };

        Ok(Self {
            page,
            per_page,
            total,
            last_page,
            next_page,
            previous_page,
            from,
            to,
        })
    }

    /// Zero-based offset of the page's first record.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.from - 1
    }

    /// Maximum number of records to fetch for the page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Builds the links that exist for this page under `path`.
    #[must_use]
    pub fn links(&self, path: &str) -> PageLinks {
        let url = |page: u64| format!("{path}?page={page}&per_page={}", self.per_page);

        PageLinks {
            first: (self.page != 1).then(|| url(1)),
            last: (self.last_page > 0 && self.page != self.last_page).then(|| url(self.last_page)),
            next: (self.page < self.last_page).then(|| url(self.page + 1)),
            previous: (self.page > 1).then(|| url(self.page - 1)),
        }
    }

    /// Assembles the page result for `items` fetched within these bounds.
    #[must_use]
    pub fn into_page<T>(self, path: String, items: Vec<T>) -> PageResult<T> {
        let links = self.links(&path);

        PageResult {
            page: self.page,
            per_page: self.per_page,
            next_page: self.next_page,
            previous_page: self.previous_page,
            last_page: self.last_page,
            total: self.total,
            first_page_url: links.first,
            last_page_url: links.last,
            next_page_url: links.next,
            previous_page_url: links.previous,
            from: self.from,
            to: self.to,
            path,
            items,
        }
    }
}
