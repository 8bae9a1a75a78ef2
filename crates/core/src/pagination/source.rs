//! Data source abstraction.
//!
//! A data source owns a base query, counts the records a query matches, and
//! fetches a bounded slice of them. The paginator never looks inside queries
//! or records.

use std::sync::Arc;

use async_trait::async_trait;

/// A query transformation such as an extra `WHERE` clause or an ordering.
///
/// Filters are applied in order, each one receiving the previous one's output.
pub type Filter<Q> = Box<dyn Fn(Q) -> Q + Send + Sync>;

/// Storage that can be paginated.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Query handle that filters are applied to.
    type Query: Send + Sync;
    /// Record type returned by `fetch`.
    type Item: Send;
    /// Error reported by the underlying store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the unfiltered base query.
    fn query(&self) -> Self::Query;

    /// Applies one filter to `query`.
    fn apply_filter(&self, query: Self::Query, filter: &Filter<Self::Query>) -> Self::Query {
        filter(query)
    }

    /// Counts the records matched by `query`, ignoring any offset or limit.
    async fn count(&self, query: &Self::Query) -> Result<u64, Self::Error>;

    /// Fetches at most `limit` records matched by `query`, skipping `offset`.
    async fn fetch(
        &self,
        query: Self::Query,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Item>, Self::Error>;
}

#[async_trait]
impl<S> DataSource for Arc<S>
where
    S: DataSource + ?Sized,
{
    type Query = S::Query;
    type Item = S::Item;
    type Error = S::Error;

    fn query(&self) -> Self::Query {
        (**self).query()
    }

    fn apply_filter(&self, query: Self::Query, filter: &Filter<Self::Query>) -> Self::Query {
        (**self).apply_filter(query, filter)
    }

    async fn count(&self, query: &Self::Query) -> Result<u64, Self::Error> {
        (**self).count(query).await
    }

    async fn fetch(
        &self,
        query: Self::Query,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        (**self).fetch(query, offset, limit).await
    }
}
