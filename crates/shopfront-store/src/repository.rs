//! Catalog repository - the single owner of the current catalog

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use shopfront_core::{fallback_catalog, ProductId, ProductRecord};
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// Where the current snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Built-in or caller-supplied defaults
    Defaults,

    /// A successfully parsed feed
    Feed,
}

/// Holds the authoritative catalog snapshot
///
/// Readers take an `Arc` to the snapshot and keep it for as long as they
/// need; replacing the catalog swaps the pointer and never touches a
/// snapshot someone is still reading.
pub struct CatalogRepository {
    snapshot: Arc<[ProductRecord]>,

    origin: CatalogOrigin,

    /// Bumped on every replacement
    generation: u64,

    /// When the feed snapshot was installed (None for defaults)
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogRepository {
    /// Create a repository seeded with default records
    pub fn new(defaults: Vec<ProductRecord>) -> Result<Self> {
        check_unique(&defaults)?;
        Ok(Self {
            snapshot: defaults.into(),
            origin: CatalogOrigin::Defaults,
            generation: 0,
            loaded_at: None,
        })
    }

    /// Create a repository seeded with the built-in fallback catalog
    pub fn with_fallback_catalog() -> Result<Self> {
        Self::new(fallback_catalog())
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<[ProductRecord]> {
        Arc::clone(&self.snapshot)
    }

    /// Borrow the current snapshot
    pub fn products(&self) -> &[ProductRecord] {
        &self.snapshot
    }

    /// Look a product up by id
    pub fn get(&self, id: ProductId) -> Option<&ProductRecord> {
        self.snapshot.iter().find(|p| p.id == id)
    }

    /// Look a product up, failing if it is not in the catalog
    pub fn require(&self, id: ProductId) -> Result<&ProductRecord> {
        self.get(id).ok_or(StoreError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Replace the whole catalog with feed records
    pub fn replace(&mut self, records: Vec<ProductRecord>) -> Result<()> {
        check_unique(&records)?;
        let count = records.len();
        self.snapshot = records.into();
        self.origin = CatalogOrigin::Feed;
        self.generation += 1;
        self.loaded_at = Some(Utc::now());
        info!("Catalog replaced with {} product(s) (generation {})", count, self.generation);
        Ok(())
    }

    /// Replace the catalog unless `records` is empty
    ///
    /// An empty load means "nothing new", so the current catalog stays.
    /// Returns whether the catalog changed.
    pub fn replace_if_nonempty(&mut self, records: Vec<ProductRecord>) -> Result<bool> {
        if records.is_empty() {
            debug!("Empty catalog load, keeping {} product(s)", self.len());
            return Ok(false);
        }
        self.replace(records)?;
        Ok(true)
    }
}

fn check_unique(records: &[ProductRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId(id),
            name: name.to_string(),
            category: shopfront_core::Category::Gadgets,
            price: 10,
            mrp: 20,
            description: String::new(),
            image: "x.jpg".to_string(),
            additional_images: Vec::new(),
            youtube_id: String::new(),
            rating: None,
            review_count: None,
            is_best_seller: None,
        }
    }

    #[test]
    fn test_starts_with_fallback() {
        let repo = CatalogRepository::with_fallback_catalog().unwrap();
        assert!(!repo.is_empty());
        assert_eq!(repo.origin(), CatalogOrigin::Defaults);
        assert_eq!(repo.generation(), 0);
        assert!(repo.loaded_at().is_none());
    }

    #[test]
    fn test_replace_swaps_whole_snapshot() {
        let mut repo = CatalogRepository::new(vec![product(1, "Old"), product(2, "Older")]).unwrap();
        let before = repo.snapshot();

        repo.replace(vec![product(3, "New")]).unwrap();

        assert_eq!(repo.len(), 1);
        assert!(repo.get(ProductId(1)).is_none());
        assert_eq!(repo.require(ProductId(3)).unwrap().name, "New");
        assert_eq!(repo.origin(), CatalogOrigin::Feed);
        assert_eq!(repo.generation(), 1);
        assert!(repo.loaded_at().is_some());
        // A snapshot taken earlier is untouched
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn test_empty_load_keeps_catalog() {
        let mut repo = CatalogRepository::new(vec![product(1, "Fan")]).unwrap();
        assert!(!repo.replace_if_nonempty(Vec::new()).unwrap());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.generation(), 0);

        assert!(repo.replace_if_nonempty(vec![product(2, "Lamp")]).unwrap());
        assert_eq!(repo.products()[0].id, ProductId(2));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(matches!(
            CatalogRepository::new(vec![product(1, "A"), product(1, "B")]),
            Err(StoreError::DuplicateId(ProductId(1)))
        ));

        let mut repo = CatalogRepository::new(vec![product(5, "Keep")]).unwrap();
        assert!(repo.replace(vec![product(2, "A"), product(2, "B")]).is_err());
        assert_eq!(repo.products()[0].name, "Keep");
    }

    #[test]
    fn test_require_missing() {
        let repo = CatalogRepository::new(Vec::new()).unwrap();
        assert!(matches!(repo.require(ProductId(9)), Err(StoreError::ProductNotFound(_))));
    }
}
