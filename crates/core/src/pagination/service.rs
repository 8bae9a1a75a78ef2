//! Paginator service: resolves a request, counts, bounds, and fetches.

use pageturn_shared::{PageResult, PaginationConfig};
use tracing::{debug, warn};

use super::bounds::PageBounds;
use super::error::PaginationError;
use super::request::{PaginateRequest, PaginationDefaults, ResolvedRequest};
use super::source::DataSource;

/// Paginator holding the defaults every request is resolved against.
#[derive(Debug, Clone)]
pub struct Paginator<S> {
    defaults: PaginationDefaults<S>,
}

impl<S> Paginator<S>
where
    S: DataSource + Clone,
{
    /// Creates a paginator with the given defaults.
    #[must_use]
    pub fn new(defaults: PaginationDefaults<S>) -> Self {
        Self { defaults }
    }

    /// Defaults this paginator resolves requests against.
    pub fn defaults(&self) -> &PaginationDefaults<S> {
        &self.defaults
    }

    /// Resolves `request` and materializes the requested page.
    ///
    /// Performs one count and one fetch against the data source. Nothing is
    /// fetched when resolution fails or the page is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::NoDataSource` or `PaginationError::InvalidConfiguration`
    /// if the request cannot be resolved, `PaginationError::PageOutOfBounds` if the page
    /// lies past the last page, and `PaginationError::DataSource` if counting or fetching fails.
    pub async fn paginate(
        &self,
        request: PaginateRequest<S>,
    ) -> Result<PageResult<S::Item>, PaginationError> {
        request.resolve(&self.defaults)?.execute().await
    }

    /// Paginates the default source with `config` and no filters.
    ///
    /// # Errors
    ///
    /// See [`Paginator::paginate`].
    pub async fn page(
        &self,
        config: PaginationConfig,
    ) -> Result<PageResult<S::Item>, PaginationError> {
        self.paginate(PaginateRequest::new().config(config)).await
    }
}

impl<S: DataSource> ResolvedRequest<S> {
    /// Counts the filtered query, checks bounds, and fetches the page.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::PageOutOfBounds` if the page lies past the last page,
    /// and `PaginationError::DataSource` if counting or fetching fails.
    pub async fn execute(self) -> Result<PageResult<S::Item>, PaginationError> {
        let query = self.query();

        let total = self.source.count(&query).await.map_err(|err| {
            warn!(error = %err, "Failed to count records");
            PaginationError::data_source(err)
        })?;

        let bounds = PageBounds::calculate(
            u64::from(self.config.page),
            u64::from(self.config.per_page),
            total,
        )
        .inspect_err(|err| warn!(error = %err, total, "Rejected pagination request"))?;

        debug!(
            total,
            last_page = bounds.last_page,
            from = bounds.from,
            to = bounds.to,
            "Computed page bounds"
        );

        let items = self
            .source
            .fetch(query, bounds.offset(), bounds.limit())
            .await
            .map_err(|err| {
                warn!(error = %err, "Failed to fetch records");
                PaginationError::data_source(err)
            })?;

        Ok(bounds.into_page(self.config.path, items))
    }
}
