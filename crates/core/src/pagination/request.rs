//! Request resolution.
//!
//! A [`PaginateRequest`] collects what the caller supplied; resolving it
//! against a [`PaginationDefaults`] snapshot yields a [`ResolvedRequest`] with
//! every field populated.
//!
//! Precedence rules:
//! - A request source wins over the default source; with neither, resolution fails.
//! - With no request config the default config is used as-is.
//! - A request config is merged field-by-field with the default config;
//!   unset fields (`0` or `""`) take the default value.
//! - Only the last config given to the builder counts.

use pageturn_shared::{PaginationConfig, PaginationSettings};
use tracing::debug;

use super::error::PaginationError;
use super::source::{DataSource, Filter};

/// Immutable defaults shared by every request a paginator resolves.
#[derive(Debug, Clone)]
pub struct PaginationDefaults<S> {
    config: Option<PaginationConfig>,
    source: Option<S>,
    max_per_page: Option<u32>,
}

impl<S> Default for PaginationDefaults<S> {
    fn default() -> Self {
        Self {
            config: None,
            source: None,
            max_per_page: None,
        }
    }
}

impl<S> PaginationDefaults<S> {
    /// Creates an empty snapshot: no default config and no default source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &PaginationSettings) -> Self {
        Self {
            config: Some(settings.to_config()),
            source: None,
            max_per_page: settings.max_per_page,
        }
    }

    /// Sets the default config.
    #[must_use]
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the default data source.
    #[must_use]
    pub fn with_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Caps the page size a request may resolve to.
    #[must_use]
    pub fn with_max_per_page(mut self, max_per_page: u32) -> Self {
        self.max_per_page = Some(max_per_page);
        self
    }

    /// Default config, if any.
    pub fn config(&self) -> Option<&PaginationConfig> {
        self.config.as_ref()
    }

    /// Default data source, if any.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Page size cap, if any.
    pub fn max_per_page(&self) -> Option<u32> {
        self.max_per_page
    }
}

/// Builder for a single pagination call.
pub struct PaginateRequest<S: DataSource> {
    source: Option<S>,
    config: Option<PaginationConfig>,
    filters: Vec<Filter<S::Query>>,
}

impl<S: DataSource> Default for PaginateRequest<S> {
    fn default() -> Self {
        Self {
            source: None,
            config: None,
            filters: Vec::new(),
        }
    }
}

impl<S: DataSource> PaginateRequest<S> {
    /// Creates a request that relies entirely on the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `source` instead of the default data source.
    #[must_use]
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the requested config, replacing any config set earlier.
    #[must_use]
    pub fn config(mut self, config: PaginationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Appends a query transformation.
    #[must_use]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(S::Query) -> S::Query + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Appends already boxed query transformations, keeping their order.
    #[must_use]
    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter<S::Query>>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Resolves the request against `defaults`.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::NoDataSource` if neither the request nor the defaults carry a source.
    /// Returns `PaginationError::InvalidConfiguration` if the page size exceeds the configured
    /// maximum.
    pub fn resolve(
        self,
        defaults: &PaginationDefaults<S>,
    ) -> Result<ResolvedRequest<S>, PaginationError>
    where
        S: Clone,
    {
        let source = self
            .source
            .or_else(|| defaults.source.clone())
            .ok_or(PaginationError::NoDataSource)?;

        let config = match (self.config, defaults.config.as_ref()) {
            (Some(explicit), Some(fallback)) => explicit.merged_with(fallback),
            (Some(explicit), None) => explicit,
            (None, Some(fallback)) => fallback.clone(),
            (None, None) => PaginationConfig::default(),
        }
        .normalized();

        if let Some(max) = defaults.max_per_page.filter(|max| config.per_page > *max) {
            return Err(PaginationError::invalid_configuration(format!(
                "per_page {} exceeds the maximum of {max}",
                config.per_page
            )));
        }

        debug!(
            page = config.page,
            per_page = config.per_page,
            path = %config.path,
            filters = self.filters.len(),
            "Resolved pagination request"
        );

        Ok(ResolvedRequest {
            source,
            config,
            filters: self.filters,
        })
    }
}

/// A request with its source, config, and filters fully determined.
pub struct ResolvedRequest<S: DataSource> {
    /// Data source to count and fetch from.
    pub source: S,
    /// Normalized config; `page` and `per_page` are at least 1.
    pub config: PaginationConfig,
    /// Query transformations, applied in order.
    pub filters: Vec<Filter<S::Query>>,
}

impl<S: DataSource> ResolvedRequest<S> {
    /// Builds the filtered query, without any offset or limit.
    pub fn query(&self) -> S::Query {
        self.filters
            .iter()
            .fold(self.source.query(), |query, filter| {
                self.source.apply_filter(query, filter)
            })
    }
}
