//! Pagination error types.

use pageturn_shared::AppError;
use thiserror::Error;

/// Boxed error reported by a data source.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Pagination errors.
///
/// No page is produced when any of these is returned.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// Neither the request nor the defaults supplied a data source.
    #[error("no data source supplied and no default data source configured")]
    NoDataSource,

    /// The resolved configuration cannot be paginated.
    #[error("invalid pagination configuration: {0}")]
    InvalidConfiguration(String),

    /// Requested page lies past the last page.
    #[error("page {page} is out of bounds (last page is {last_page})")]
    PageOutOfBounds {
        /// Requested page.
        page: u64,
        /// Highest valid page for the current total.
        last_page: u64,
    },

    /// The data source failed while counting or fetching.
    #[error("data source error: {0}")]
    DataSource(#[source] SourceError),
}

impl PaginationError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Wrap a data source failure.
    #[must_use]
    pub fn data_source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::DataSource(Box::new(err))
    }
}

impl From<PaginationError> for AppError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::NoDataSource => Self::Internal(err.to_string()),
            PaginationError::InvalidConfiguration(_) => Self::Validation(err.to_string()),
            PaginationError::PageOutOfBounds { .. } => Self::NotFound(err.to_string()),
            PaginationError::DataSource(_) => Self::Database(err.to_string()),
        }
    }
}
