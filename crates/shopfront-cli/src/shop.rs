//! Command implementations over the loaded catalog and saved lists

use std::time::Duration;

use anyhow::{bail, Context, Result};
use shopfront_client::{ingest, source_for_location};
use shopfront_core::checkout::{
    order_message, product_order_message, suggestion_message, whatsapp_link,
};
use shopfront_core::{Cart, Category, ProductId, ProductRecord, ShopConfig, Wishlist};
use shopfront_feed::parse_catalog_report;
use shopfront_search::{search_with_outcome, SearchQuery};
use shopfront_store::{CatalogRepository, LocalListStore};
use tracing::warn;

/// Everything a command needs
pub struct Shop {
    config: ShopConfig,
    catalog: CatalogRepository,
    lists: LocalListStore,
    cart: Cart,
    wishlist: Wishlist,
}

impl Shop {
    /// Load the catalog (feed, else built-in) and the saved lists
    pub async fn open(config: ShopConfig, offline: bool) -> Result<Self> {
        let mut catalog = CatalogRepository::with_fallback_catalog()?;

        if !offline {
            match source_for_location(&config.feed_location, config.fetch_timeout()) {
                Ok(source) => {
                    ingest(source.as_ref(), &mut catalog).await;
                }
                Err(e) => warn!("Not loading feed: {}", e),
            }
        }

        let lists = LocalListStore::open(&config.data_dir)
            .await
            .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
        let cart = lists.load_cart().await?;
        let wishlist = lists.load_wishlist().await?;

        Ok(Self {
            config,
            catalog,
            lists,
            cart,
            wishlist,
        })
    }

    pub fn search(&self, query: &str, category: Category, limit: Option<usize>) {
        let mut request = SearchQuery::new(query).with_category(category);
        request.limit = limit;

        let outcome = search_with_outcome(self.catalog.products(), &request);
        if outcome.is_fallback() {
            println!(
                "No products found for \"{}\". Showing {} instead:",
                query.trim(),
                category.display_name()
            );
        }
        if outcome.is_empty() {
            println!("The catalog is empty.");
        }
        for product in &outcome.products {
            println!("{}", summary_line(product, self.wishlist.contains(product.id)));
        }
    }

    pub fn show(&self, id: i64) -> Result<()> {
        let product = self.catalog.require(ProductId(id))?;

        println!("{} (#{})", product.name, product.id);
        println!("Department: {}", product.category);
        println!(
            "Price: ₹{}  MRP: ₹{}  ({}% off)",
            product.price,
            product.mrp,
            product.discount_percent()
        );
        if let Some(rating) = product.rating {
            println!("Rating: {:.1} ({} reviews)", rating, product.review_count.unwrap_or(0));
        }
        if product.is_best_seller() {
            println!("Best seller");
        }
        if !product.description.is_empty() {
            println!("\n{}\n", product.description);
        }
        for image in product.all_images() {
            println!("Image: {}", image);
        }
        if product.has_video() {
            println!("Video: https://www.youtube.com/watch?v={}", product.youtube_id);
        }
        if self.wishlist.contains(product.id) {
            println!("In your wishlist");
        }
        Ok(())
    }

    pub async fn cart_add(&mut self, id: i64) -> Result<()> {
        let product = self.catalog.require(ProductId(id))?;
        self.cart.add(product.id);
        self.lists.save_cart(&self.cart).await?;
        println!("Added {} to the cart", product.name);
        Ok(())
    }

    pub async fn cart_remove(&mut self, id: i64) -> Result<()> {
        if self.cart.remove(ProductId(id)) {
            self.lists.save_cart(&self.cart).await?;
            println!("Removed #{} from the cart", id);
        } else {
            println!("#{} is not in the cart", id);
        }
        Ok(())
    }

    pub async fn cart_quantity(&mut self, id: i64, delta: i64) -> Result<()> {
        if self.cart.update_quantity(ProductId(id), delta) {
            self.lists.save_cart(&self.cart).await?;
            self.cart_list();
        } else {
            println!("#{} is not in the cart", id);
        }
        Ok(())
    }

    pub fn cart_list(&self) {
        let lines = self.cart.lines(self.catalog.products());
        if lines.is_empty() {
            println!("Your cart is empty.");
            return;
        }
        for line in &lines {
            println!(
                "{:>5}  {}  x{}  ₹{}",
                line.product.id,
                line.product.name,
                line.quantity,
                line.subtotal()
            );
        }
        println!(
            "{} item(s), total ₹{}",
            self.cart.total_count(),
            self.cart.total(self.catalog.products())
        );
    }

    pub async fn wishlist_toggle(&mut self, id: i64) -> Result<()> {
        let product = self.catalog.require(ProductId(id))?;
        let added = self.wishlist.toggle(product.id);
        self.lists.save_wishlist(&self.wishlist).await?;
        if added {
            println!("Added {} to the wishlist", product.name);
        } else {
            println!("Removed {} from the wishlist", product.name);
        }
        Ok(())
    }

    pub fn wishlist_list(&self) {
        let products = self.wishlist.products(self.catalog.products());
        if products.is_empty() {
            println!("Your wishlist is empty.");
        }
        for product in products {
            println!("{}", summary_line(product, true));
        }
    }

    pub fn checkout(&self) -> Result<()> {
        let lines = self.cart.lines(self.catalog.products());
        let message = order_message(&self.config.shop_name, &lines)?;
        let link = whatsapp_link(&self.config.whatsapp_number, &message)?;

        println!("{}\n", message);
        println!("Send it here: {}", link);
        Ok(())
    }

    /// Order a single product straight from its page
    pub fn order(&self, id: i64) -> Result<()> {
        let product = self.catalog.require(ProductId(id))?;
        let message = product_order_message(&self.config.shop_name, product);
        let link = whatsapp_link(&self.config.whatsapp_number, &message)?;

        println!("{}\n", message);
        println!("Send it here: {}", link);
        Ok(())
    }

    pub fn suggest(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            bail!("Please enter a suggestion");
        }
        let message = suggestion_message(&self.config.shop_name, text);
        let link = whatsapp_link(&self.config.whatsapp_number, &message)?;
        println!("{}", link);
        Ok(())
    }
}

/// Parse a feed and print what would be rejected
pub async fn check_feed(location: &str, timeout: Duration) -> Result<()> {
    let source = source_for_location(location, timeout)?;
    let text = source
        .fetch()
        .await
        .with_context(|| format!("fetching {}", source.describe()))?;
    let report = parse_catalog_report(&text)?;

    println!(
        "{}: {} product(s), {} rejected, {} without id",
        source.describe(),
        report.records.len(),
        report.skipped.len(),
        report.without_id
    );
    for skipped in &report.skipped {
        println!("  line {}: {}", skipped.line, skipped.reason);
    }
    let uncategorised = report
        .records
        .iter()
        .filter(|p| p.category == Category::All)
        .count();
    if uncategorised > 0 {
        println!("  {} product(s) have no recognised category", uncategorised);
    }
    Ok(())
}

fn summary_line(product: &ProductRecord, wishlisted: bool) -> String {
    format!(
        "{:>5}  {}{}  ₹{} (MRP ₹{})  [{}]{}",
        product.id,
        product.name,
        if product.is_best_seller() { " ★" } else { "" },
        product.price,
        product.mrp,
        product.category,
        if wishlisted { "  ♥" } else { "" }
    )
}
