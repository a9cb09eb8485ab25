//! Error types for shopfront-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid messaging number: {0}")]
    InvalidNumber(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
