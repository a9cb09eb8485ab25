//! Shopfront Core - Core types for the storefront catalog browser
//!
//! This crate defines the data shared by every other shopfront crate:
//! - `ProductRecord` and `Category`: the catalog model
//! - `Cart` and `Wishlist`: the shopper's local lists
//! - `checkout`: order messages and the messaging hand-off link
//! - `ShopConfig`: layered configuration

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod fallback;
pub mod product;

pub use cart::*;
pub use config::*;
pub use error::*;
pub use fallback::*;
pub use product::*;
