//! Offset pagination over abstract data sources.
//!
//! This module implements:
//! - Request resolution against an immutable defaults snapshot
//! - Page boundary math and navigation links
//! - The data source trait and a `Vec`-backed implementation
//! - The paginator service that assembles a page
//! - Error types for pagination

pub mod bounds;
pub mod error;
pub mod memory;
pub mod request;
pub mod service;
pub mod source;

#[cfg(test)]
mod bounds_props;

pub use bounds::{PageBounds, PageLinks};
pub use error::{PaginationError, SourceError};
pub use memory::{MemoryQuery, MemorySource};
pub use request::{PaginateRequest, PaginationDefaults, ResolvedRequest};
pub use service::Paginator;
pub use source::{DataSource, Filter};
