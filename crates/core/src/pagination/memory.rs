//! In-memory data source backed by a `Vec`.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use async_trait::async_trait;

use super::source::DataSource;

/// Query over an in-memory snapshot of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryQuery<T> {
    rows: Vec<T>,
}

impl<T> MemoryQuery<T> {
    /// Creates a query matching every row in `rows`.
    #[must_use]
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Keeps only rows matching `predicate`.
    #[must_use]
    pub fn filter(mut self, predicate: impl FnMut(&T) -> bool) -> Self {
        self.rows.retain(predicate);
        self
    }

    /// Stable-sorts rows with `compare`.
    #[must_use]
    pub fn sort_by(mut self, compare: impl FnMut(&T, &T) -> Ordering) -> Self {
        self.rows.sort_by(compare);
        self
    }

    /// Stable-sorts rows by `key`.
    #[must_use]
    pub fn sort_by_key<K: Ord>(mut self, key: impl FnMut(&T) -> K) -> Self {
        self.rows.sort_by_key(key);
        self
    }

    /// Rows currently matched.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }
}

/// `Vec`-backed data source.
///
/// Clones share the rows and the round-trip counters.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    rows: Arc<Vec<T>>,
    counts: Arc<AtomicUsize>,
    fetches: Arc<AtomicUsize>,
}

impl<T> MemorySource<T> {
    /// Creates a source serving `rows` in their given order.
    #[must_use]
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(rows),
            counts: Arc::new(AtomicUsize::new(0)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `count` calls served so far.
    #[must_use]
    pub fn count_calls(&self) -> usize {
        self.counts.load(AtomicOrdering::SeqCst)
    }

    /// Number of `fetch` calls served so far.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetches.load(AtomicOrdering::SeqCst)
    }

    /// Total round trips (counts plus fetches).
    #[must_use]
    pub fn round_trips(&self) -> usize {
        self.count_calls() + self.fetch_calls()
    }
}

impl<T> FromIterator<T> for MemorySource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl<T> DataSource for MemorySource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Query = MemoryQuery<T>;
    type Item = T;
    type Error = Infallible;

    fn query(&self) -> Self::Query {
        MemoryQuery::new(self.rows.as_ref().clone())
    }

    async fn count(&self, query: &Self::Query) -> Result<u64, Self::Error> {
        self.counts.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(u64::try_from(query.rows.len()).unwrap_or(u64::MAX))
    }

    async fn fetch(
        &self,
        query: Self::Query,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        self.fetches.fetch_add(1, AtomicOrdering::SeqCst);
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(query.rows.into_iter().skip(offset).take(limit).collect())
    }
}
