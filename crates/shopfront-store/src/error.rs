//! Error types for shopfront-store

use shopfront_core::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),

    #[error("Invalid data directory: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
