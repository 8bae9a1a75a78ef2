//! Common types used across the workspace.

pub mod pagination;


pub use pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PageResult, PaginationConfig};
