//! # seoulhot Common Library
//!
//! Shared code for the seoulhot site:
//! - District code to English name lookup
//! - Query context parsed from page URLs
//! - Recommendation API data model
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod region;

pub use error::{Error, Result};
pub use query::QueryContext;
pub use region::{region_name, DEFAULT_REGION_NAME};
