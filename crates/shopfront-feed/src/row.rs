//! Raw feed rows and their conversion into catalog records

use serde::Deserialize;
use shopfront_core::{Category, ProductId, ProductRecord};
use tracing::debug;

use crate::error::RowError;
use crate::video::youtube_id;

/// One feed line, columns matched by header name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeedRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub additional_images: Option<String>,
    #[serde(default)]
    pub mrp: Option<String>,
    #[serde(default)]
    pub special_price: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock_status: Option<String>,
}

impl RawFeedRow {
    /// Check whether the row carries a non-blank id
    pub fn has_id(&self) -> bool {
        !trimmed(&self.id).is_empty()
    }

    /// Convert into a catalog record
    pub fn into_record(self) -> Result<ProductRecord, RowError> {
        let raw_id = trimmed(&self.id);
        if raw_id.is_empty() {
            return Err(RowError::MissingId);
        }
        let id = ProductId::parse(raw_id).map_err(|_| RowError::InvalidId(raw_id.to_string()))?;

        let name = required(&self.name, "name")?;
        let image = required(&self.main_image, "main_image")?;
        let price = amount(&self.special_price, "special_price")?;
        let mrp = amount(&self.mrp, "mrp")?;

        let label = trimmed(&self.category);
        let category = Category::from_label(label);
        if !Category::is_known_label(label) {
            debug!("Product {} has unrecognised category {:?}, listing under All", id, label);
        }
        if price > mrp {
            debug!("Product {} is priced above its MRP ({} > {})", id, price, mrp);
        }

        let youtube_id = youtube_id(trimmed(&self.video_url))
            .unwrap_or_default()
            .to_string();

        Ok(ProductRecord {
            id,
            name,
            category,
            price,
            mrp,
            description: trimmed(&self.description).to_string(),
            image,
            additional_images: split_images(trimmed(&self.additional_images)),
            youtube_id,
            rating: None,
            review_count: None,
            is_best_seller: None,
        })
    }
}

fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().map(str::trim).unwrap_or("")
}

fn required(field: &Option<String>, name: &'static str) -> Result<String, RowError> {
    let value = trimmed(field);
    if value.is_empty() {
        return Err(RowError::MissingField(name));
    }
    Ok(value.to_string())
}

fn amount(field: &Option<String>, name: &'static str) -> Result<i64, RowError> {
    let value = trimmed(field);
    if value.is_empty() {
        return Err(RowError::MissingField(name));
    }
    parse_whole_units(value).ok_or_else(|| RowError::InvalidAmount {
        field: name,
        value: value.to_string(),
    })
}

/// Parse a whole-unit amount, truncating a plain decimal part
///
/// `"499"` and `"499.00"` both give 499. Anything that is not digits with
/// an optional `.digits` tail is rejected, including negative amounts and
/// values past `i64::MAX`.
pub fn parse_whole_units(value: &str) -> Option<i64> {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    if fraction.is_some_and(|f| !f.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }
    let digits = whole.strip_prefix('+').unwrap_or(whole);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Split the comma-separated image column, dropping blanks
pub fn split_images(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
