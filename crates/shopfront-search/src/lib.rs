//! Shopfront Search - Fuzzy product search over an in-memory catalog
//!
//! This crate provides:
//! - Edit-distance based name similarity
//! - Ranked search with keyword matching and a department fallback

pub mod engine;
pub mod query;
pub mod similarity;

pub use engine::*;
pub use query::*;
pub use similarity::*;
