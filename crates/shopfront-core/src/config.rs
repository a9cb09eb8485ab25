//! Shop configuration
//!
//! Layered as defaults, then an optional JSON file, then `SHOPFRONT_*`
//! environment variables. Front ends may override further from their own
//! flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "SHOPFRONT_CONFIG";

const FEED_ENV: &str = "SHOPFRONT_FEED";
const DATA_DIR_ENV: &str = "SHOPFRONT_DATA_DIR";
const WHATSAPP_ENV: &str = "SHOPFRONT_WHATSAPP";
const SHOP_NAME_ENV: &str = "SHOPFRONT_SHOP_NAME";
const FETCH_TIMEOUT_ENV: &str = "SHOPFRONT_FETCH_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Name used in composed messages
    pub shop_name: String,

    /// Number receiving checkout messages
    pub whatsapp_number: String,

    /// Feed location: an `http(s)://` URL or a filesystem path
    pub feed_location: String,

    /// Directory holding the persisted cart and wishlist
    pub data_dir: PathBuf,

    /// Upper bound on the feed fetch
    pub fetch_timeout_secs: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: "Smart Shop99".to_string(),
            whatsapp_number: "917070216321".to_string(),
            feed_location: "PRODUCT.CSV.csv".to_string(),
            data_dir: PathBuf::from(".shopfront"),
            fetch_timeout_secs: 10,
        }
    }
}

impl ShopConfig {
    /// Load defaults, an optional file, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                debug!("Reading config from {:?}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        debug!(
            "Resolved config: feed {}, data dir {:?}, timeout {}s",
            config.feed_location,
            config.data_dir,
            config.fetch_timeout_secs
        );
        Ok(config)
    }

    /// Read a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Apply `SHOPFRONT_*` overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(feed) = lookup(FEED_ENV) {
            debug!("{} overrides the feed location", FEED_ENV);
            self.feed_location = feed;
        }
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(number) = lookup(WHATSAPP_ENV) {
            self.whatsapp_number = number;
        }
        if let Some(name) = lookup(SHOP_NAME_ENV) {
            self.shop_name = name;
        }
        if let Some(secs) = lookup(FETCH_TIMEOUT_ENV) {
            self.fetch_timeout_secs = secs
                .trim()
                .parse()
                .map_err(|_| CoreError::Config(format!("{} must be a whole number of seconds, got {:?}", FETCH_TIMEOUT_ENV, secs)))?;
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
