//! Shopfront Store - Catalog ownership and local list persistence
//!
//! This crate provides:
//! - `CatalogRepository`: the single owner of the current catalog snapshot
//! - `LocalListStore`: cart and wishlist files in a data directory

pub mod error;
pub mod local;
pub mod repository;

pub use error::*;
pub use local::*;
pub use repository::*;
