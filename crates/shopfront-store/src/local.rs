//! Local file-based persistence of the cart and wishlist

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use shopfront_core::{Cart, Wishlist};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};

/// The shopper's lists, one JSON file each
///
/// Directory structure:
/// ```text
/// .shopfront/
/// ├── cart.json       # [{"productId": 1, "quantity": 2}, ...]
/// └── wishlist.json   # [1, 4, ...]
/// ```
pub struct LocalListStore {
    /// Path to the data directory
    pub path: PathBuf,
}

impl LocalListStore {
    const CART_FILE: &'static str = "cart.json";
    const WISHLIST_FILE: &'static str = "wishlist.json";

    /// Open a data directory, creating it if needed
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if path.exists() && !path.is_dir() {
            return Err(StoreError::InvalidPath(format!(
                "{} exists and is not a directory",
                path.display()
            )));
        }
        fs::create_dir_all(&path).await?;

        info!("Opened list store at {:?}", path);
        Ok(Self { path })
    }

    pub async fn load_cart(&self) -> Result<Cart> {
        self.load(Self::CART_FILE).await
    }

    pub async fn save_cart(&self, cart: &Cart) -> Result<()> {
        self.save(Self::CART_FILE, cart).await
    }

    pub async fn load_wishlist(&self) -> Result<Wishlist> {
        self.load(Self::WISHLIST_FILE).await
    }

    pub async fn save_wishlist(&self, wishlist: &Wishlist) -> Result<()> {
        self.save(Self::WISHLIST_FILE, wishlist).await
    }

    // Private helpers

    /// Missing files load as empty; so do corrupt ones, with a warning
    async fn load<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T> {
        let file_path = self.path.join(file);
        if !file_path.exists() {
            return Ok(T::default());
        }

        let json = fs::read_to_string(&file_path).await?;
        match serde_json::from_str(&json) {
            Ok(value) => {
                debug!("Loaded {:?}", file_path);
                Ok(value)
            }
            Err(e) => {
                warn!("Ignoring unreadable {:?}: {}", file_path, e);
                Ok(T::default())
            }
        }
    }

    async fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let file_path = self.path.join(file);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&file_path, json).await?;
        debug!("Saved {:?}", file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::ProductId;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("data");

        let store = LocalListStore::open(&data_dir).await.unwrap();
        assert!(store.path.is_dir());
    }

    #[tokio::test]
    async fn test_open_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        assert!(matches!(
            LocalListStore::open(&file).await,
            Err(StoreError::InvalidPath(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_files_load_empty() {
        let dir = tempdir().unwrap();
        let store = LocalListStore::open(dir.path()).await.unwrap();

        assert!(store.load_cart().await.unwrap().is_empty());
        assert!(store.load_wishlist().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lists_survive_reopen() {
        let dir = tempdir().unwrap();

        let mut cart = Cart::new();
        cart.add(ProductId(3));
        cart.add(ProductId(3));
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId(8));

        {
            let store = LocalListStore::open(dir.path()).await.unwrap();
            store.save_cart(&cart).await.unwrap();
            store.save_wishlist(&wishlist).await.unwrap();
        }

        let store = LocalListStore::open(dir.path()).await.unwrap();
        assert_eq!(store.load_cart().await.unwrap(), cart);
        assert_eq!(store.load_wishlist().await.unwrap(), wishlist);
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cart.json"), "{not json").unwrap();

        let store = LocalListStore::open(dir.path()).await.unwrap();
        assert!(store.load_cart().await.unwrap().is_empty());
    }
}
