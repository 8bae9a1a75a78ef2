//! Shared types, errors, and configuration for pageturn.
//!
//! This crate provides common types used across all other crates:
//! - Pagination configuration and the serialized page result
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, PaginationSettings};
pub use error::{AppError, AppResult};
pub use types::{PageResult, PaginationConfig};
