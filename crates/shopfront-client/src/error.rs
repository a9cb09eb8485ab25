//! Error types for shopfront-client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid feed location: {0}")]
    InvalidLocation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Timeout")]
    Timeout,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
