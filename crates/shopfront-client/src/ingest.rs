//! Catalog ingestion - fetch, parse, hand over to the repository

use shopfront_core::ProductRecord;
use shopfront_feed::parse_catalog;
use shopfront_store::CatalogRepository;
use tracing::{info, warn};

use crate::source::FeedSource;

/// Fetch and parse the feed
///
/// Any failure is logged and yields an empty list, which callers must
/// read as "keep what you have".
pub async fn load_catalog(source: &dyn FeedSource) -> Vec<ProductRecord> {
    let text = match source.fetch().await {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not fetch feed from {}: {}", source.describe(), e);
            return Vec::new();
        }
    };

    match parse_catalog(&text) {
        Ok(records) => {
            info!("Loaded {} product(s) from {}", records.len(), source.describe());
            records
        }
        Err(e) => {
            warn!("Could not parse feed from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}

/// Load the feed into `repository`, replacing its catalog on success
///
/// Returns whether the catalog was replaced. A failed or empty load keeps
/// the previous catalog.
pub async fn ingest(source: &dyn FeedSource, repository: &mut CatalogRepository) -> bool {
    let records = load_catalog(source).await;
    match repository.replace_if_nonempty(records) {
        Ok(replaced) => {
            if !replaced {
                info!("Keeping current catalog of {} product(s)", repository.len());
            }
            replaced
        }
        Err(e) => {
            warn!("Rejected feed catalog: {}", e);
            false
        }
    }
}
