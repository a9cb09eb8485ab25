//! Shopfront Client - Feed retrieval and catalog ingestion
//!
//! This crate provides:
//! - `FeedSource` with HTTP and file implementations
//! - The start-up ingestion pipeline feeding a `CatalogRepository`

pub mod error;
pub mod ingest;
pub mod source;

pub use error::*;
pub use ingest::*;
pub use source::*;
