//! Feed sources - where the raw feed text comes from

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::fs;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};

/// Something that can hand over the raw feed text
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve the whole feed
    async fn fetch(&self) -> Result<String>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Pick a source for a configured location
///
/// `http://` and `https://` locations are fetched over HTTP with
/// `timeout`; `file://` URLs and anything else are read from disk.
pub fn source_for_location(location: &str, timeout: Duration) -> Result<Box<dyn FeedSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ClientError::InvalidLocation("empty feed location".to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        let url: Url = location
            .parse()
            .map_err(|e| ClientError::InvalidLocation(format!("{}: {}", location, e)))?;
        return Ok(Box::new(HttpFeedSource::new(url, timeout)?));
    }

    if location.starts_with("file://") {
        let path = Url::parse(location)
            .ok()
            .and_then(|u| u.to_file_path().ok())
            .ok_or_else(|| ClientError::InvalidLocation(location.to_string()))?;
        return Ok(Box::new(FileFeedSource::new(path)));
    }

    Ok(Box::new(FileFeedSource::new(location)))
}

/// Feed served over HTTP
pub struct HttpFeedSource {
    client: Client,
    url: Url,
}

impl HttpFeedSource {
    /// Create a source whose requests give up after `timeout`
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(url, client))
    }

    /// Create a source using a preconfigured client
    pub fn with_client(url: Url, client: Client) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<String> {
        debug!("Fetching feed from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

fn request_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Http(e)
    }
}

/// Feed stored on the local filesystem
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    async fn fetch(&self) -> Result<String> {
        debug!("Reading feed from {:?}", self.path);
        Ok(fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
