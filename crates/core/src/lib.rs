//! Core pagination logic for pageturn.
//!
//! This crate contains pure pagination logic with ZERO web or database dependencies.
//! Data access goes through the [`pagination::DataSource`] trait.
//!
//! # Modules
//!
//! - `pagination` - Request resolution, page boundary math, and page assembly

pub mod pagination;

pub use pagination::{
    DataSource, MemoryQuery, MemorySource, PageBounds, PaginateRequest, PaginationDefaults,
    PaginationError, Paginator, ResolvedRequest,
};
