//! Built-in catalog shown until a feed has been loaded

use crate::{Category, ProductId, ProductRecord};

#[allow(clippy::too_many_arguments)]
fn entry(
    id: i64,
    name: &str,
    category: Category,
    price: i64,
    mrp: i64,
    description: &str,
    rating: f32,
    review_count: u32,
    best_seller: bool,
) -> ProductRecord {
    ProductRecord {
        id: ProductId(id),
        name: name.to_string(),
        category,
        price,
        mrp,
        description: description.to_string(),
        image: format!("images/products/{}.jpg", id),
        additional_images: Vec::new(),
        youtube_id: String::new(),
        rating: Some(rating),
        review_count: Some(review_count),
        is_best_seller: Some(best_seller),
    }
}

/// The static fallback catalog
///
/// Ids are unique and every entry carries rating data, which feed rows
/// never do.
pub fn fallback_catalog() -> Vec<ProductRecord> {
    vec![
        entry(
            1,
            "Mini Rechargeable Fan",
            Category::Gadgets,
            299,
            599,
            "Pocket-sized USB fan with three speeds.",
            4.3,
            128,
            true,
        ),
        entry(
            2,
            "Vegetable Chopper",
            Category::Kitchen,
            249,
            499,
            "Pull-cord chopper for onions, garlic and herbs.",
            4.1,
            86,
            false,
        ),
        entry(
            3,
            "Microfiber Cleaning Cloth Set",
            Category::Household,
            149,
            299,
            "Pack of six lint-free cloths.",
            4.5,
            203,
            true,
        ),
        entry(
            4,
            "Roasted Peanut Pack",
            Category::Snacks,
            40,
            50,
            "Salted roasted peanuts, 200 g.",
            4.0,
            41,
            false,
        ),
    ]
}
