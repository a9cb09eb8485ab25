//! Shopfront Feed - Tabular catalog feed parsing
//!
//! Turns the comma-separated product feed into validated
//! `ProductRecord`s. Individual bad rows are skipped and reported; only a
//! feed that cannot be read at all is an error.

pub mod error;
pub mod parser;
pub mod row;
pub mod video;

pub use error::*;
pub use parser::*;
pub use row::*;
pub use video::*;
