//! Error types for shopfront-feed

use thiserror::Error;

/// Failure of the whole feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("Unreadable feed: {0}")]
    Csv(#[from] csv::Error),
}

/// Reason a single row was left out of the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("row has no id")]
    MissingId,

    #[error("id {0:?} is not an integer")]
    InvalidId(String),

    #[error("duplicate id {0}")]
    DuplicateId(i64),

    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("field '{field}' is not a whole amount: {value:?}")]
    InvalidAmount { field: &'static str, value: String },

    #[error("malformed row: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
