//! Product types - the entries of a catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a product within a catalog snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a ProductId from feed or command-line text
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }

    /// Get the raw numeric value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product departments
///
/// `All` is the "no filter" value. It is never a department of its own,
/// but products whose feed label is not recognised end up there, so they
/// only show when browsing everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    All,
    Gadgets,
    Kitchen,
    Household,
    Snacks,
}

impl Category {
    /// Every category, filter value first
    pub const ALL_VARIANTS: [Category; 5] = [
        Category::All,
        Category::Gadgets,
        Category::Kitchen,
        Category::Household,
        Category::Snacks,
    ];

    /// Feed label lookup table (case-sensitive)
    const LABELS: [(&'static str, Category); 4] = [
        ("GADGETS", Category::Gadgets),
        ("KITCHEN", Category::Kitchen),
        ("HOUSEHOLD", Category::Household),
        ("SNACKS", Category::Snacks),
    ];

    /// Resolve a feed label, falling back to `All` for anything unknown
    pub fn from_label(label: &str) -> Self {
        Self::LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, c)| *c)
            .unwrap_or(Category::All)
    }

    /// Whether `label` is one of the fixed feed labels
    pub fn is_known_label(label: &str) -> bool {
        Self::LABELS.iter().any(|(l, _)| *l == label)
    }

    /// The upper-case label used in the feed
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Gadgets => "GADGETS",
            Category::Kitchen => "KITCHEN",
            Category::Household => "HOUSEHOLD",
            Category::Snacks => "SNACKS",
        }
    }

    /// Shopper-facing department name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::All => "All Products",
            Category::Gadgets => "Gadgets",
            Category::Kitchen => "Kitchen Tools",
            Category::Household => "Household",
            Category::Snacks => "Snacks",
        }
    }

    /// Check whether a product in `self` passes the `filter`
    pub fn matches(&self, filter: Category) -> bool {
        filter == Category::All || *self == filter
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Lenient parse for user input: labels in any case, plus `all`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "ALL" {
            return Ok(Category::All);
        }
        Self::LABELS
            .iter()
            .find(|(l, _)| *l == upper)
            .map(|(_, c)| *c)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// A single catalog entry
///
/// Records are built by the feed parser or taken from the built-in
/// fallback list and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique within a snapshot
    pub id: ProductId,

    /// Display name, never empty
    pub name: String,

    /// Department
    pub category: Category,

    /// Current price in whole currency units
    pub price: i64,

    /// List price ("MRP"); expected but not required to be >= price
    pub mrp: i64,

    /// Free-text description
    pub description: String,

    /// Primary image reference
    pub image: String,

    /// Further image references, in feed order
    #[serde(default)]
    pub additional_images: Vec<String>,

    /// Video identifier, empty when the product has no video
    #[serde(default)]
    pub youtube_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_best_seller: Option<bool>,
}

impl ProductRecord {
    /// Discount against the list price, rounded to a whole percent
    ///
    /// Returns 0 when the list price is not positive. Goes negative when
    /// the price is above the list price.
    pub fn discount_percent(&self) -> i64 {
        if self.mrp <= 0 {
            return 0;
        }
        let off = i128::from(self.mrp) - i128::from(self.price);
        ((off as f64 / self.mrp as f64) * 100.0).round() as i64
    }

    /// Check if the product links a video
    pub fn has_video(&self) -> bool {
        !self.youtube_id.is_empty()
    }

    /// Main image followed by the additional ones
    pub fn all_images(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.image.as_str()).chain(self.additional_images.iter().map(String::as_str))
    }

    /// Whether the product is flagged as a best seller
    pub fn is_best_seller(&self) -> bool {
        self.is_best_seller.unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, name: &str, category: Category, price: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId(id),
        name: name.to_string(),
        category,
        price,
        mrp: price.saturating_mul(2),
        description: String::new(),
        image: format!("{}.jpg", id),
        additional_images: Vec::new(),
        youtube_id: String::new(),
        rating: None,
        review_count: None,
        is_best_seller: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("KITCHEN"), Category::Kitchen);
        assert_eq!(Category::from_label("SNACKS"), Category::Snacks);
        // Table is case-sensitive and unknown labels fall back to All
        assert_eq!(Category::from_label("kitchen"), Category::All);
        assert_eq!(Category::from_label("TOYS"), Category::All);
        assert_eq!(Category::from_label(""), Category::All);
    }

    #[test]
    fn test_category_from_str_is_lenient() {
        assert_eq!("gadgets".parse::<Category>().unwrap(), Category::Gadgets);
        assert_eq!(" All ".parse::<Category>().unwrap(), Category::All);
        assert!("toys".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_matches() {
        assert!(Category::Kitchen.matches(Category::All));
        assert!(Category::Kitchen.matches(Category::Kitchen));
        assert!(!Category::Kitchen.matches(Category::Snacks));
        assert!(!Category::All.matches(Category::Snacks));
    }

    #[test]
    fn test_discount_percent() {
        let mut p = sample(1, "Mixer", Category::Kitchen, 750);
        p.mrp = 1000;
        assert_eq!(p.discount_percent(), 25);

        p.mrp = 0;
        assert_eq!(p.discount_percent(), 0);

        p.mrp = 500;
        assert_eq!(p.discount_percent(), -50);
    }

    #[test]
    fn test_discount_percent_extreme_amounts() {
        let mut p = sample(1, "Mixer", Category::Kitchen, -1);
        p.mrp = i64::MAX;
        assert_eq!(p.discount_percent(), 100);

        p.price = i64::MIN;
        assert_eq!(p.discount_percent(), 200);
    }

    #[test]
    fn test_all_images_starts_with_main() {
        let mut p = sample(7, "Lamp", Category::Household, 100);
        p.additional_images = vec!["b.jpg".into(), "c.jpg".into()];
        let images: Vec<&str> = p.all_images().collect();
        assert_eq!(images, vec!["7.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_record_json_shape() {
        let mut p = sample(3, "Chips", Category::Snacks, 20);
        p.youtube_id = "dQw4w9WgXcQ".into();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["category"], "SNACKS");
        assert_eq!(json["youtubeId"], "dQw4w9WgXcQ");
        assert!(json.get("rating").is_none());

        let back: ProductRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
