//! Cart and wishlist - the shopper's two local lists

use serde::{Deserialize, Serialize};

use crate::{ProductId, ProductRecord};

/// One cart entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Ordered list of cart entries, at most one per product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product
    pub fn add(&mut self, product_id: ProductId) {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                product_id,
                quantity: 1,
            }),
        }
    }

    /// Change a quantity by `delta`, never going below 1
    ///
    /// Returns false when the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) else {
            return false;
        };
        let next = i64::from(item.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX));
        item.quantity = next as u32;
        true
    }

    /// Remove a product entirely
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Resolve entries against a catalog
    ///
    /// Entries whose product is no longer in the catalog are skipped.
    pub fn lines<'a>(&self, catalog: &'a [ProductRecord]) -> Vec<CartLine<'a>> {
        self.items
            .iter()
            .filter_map(|item| {
                catalog
                    .iter()
                    .find(|p| p.id == item.product_id)
                    .map(|product| CartLine {
                        product,
                        quantity: item.quantity,
                    })
            })
            .collect()
    }

    /// Total price of everything resolvable in the catalog, saturating at
    /// the `i64` bounds
    pub fn total(&self, catalog: &[ProductRecord]) -> i64 {
        self.lines(catalog)
            .iter()
            .map(CartLine::subtotal)
            .fold(0, i64::saturating_add)
    }
}

/// A cart entry joined with its product
#[derive(Debug, Clone, Copy)]
pub struct CartLine<'a> {
    pub product: &'a ProductRecord,
    pub quantity: u32,
}

impl CartLine<'_> {
    pub fn subtotal(&self) -> i64 {
        self.product.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Ordered set of wishlisted product ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a product; returns true if it is now wishlisted
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.contains(product_id) {
            self.ids.retain(|id| *id != product_id);
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted products still present in the catalog, in wishlist order
    pub fn products<'a>(&self, catalog: &'a [ProductRecord]) -> Vec<&'a ProductRecord> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|p| p.id == *id))
            .collect()
    }
}
