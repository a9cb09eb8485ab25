//! Shopfront CLI - Browse the shop catalog from the terminal

mod shop;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use shopfront_core::{Category, ShopConfig, CONFIG_ENV};
use tracing_subscriber::EnvFilter;

use crate::shop::Shop;

#[derive(Parser)]
#[command(name = "shopfront", version, about = "Search the catalog, keep a cart and order via WhatsApp")]
struct Cli {
    /// JSON config file (also read from SHOPFRONT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Feed location, URL or path
    #[arg(long, global = true)]
    feed: Option<String>,

    /// Directory for the saved cart and wishlist
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip the feed and use the built-in catalog
    #[arg(long, global = true)]
    offline: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search product names; with no query, list the department
    Search {
        query: Vec<String>,

        /// gadgets, kitchen, household, snacks or all
        #[arg(short, long, default_value = "all")]
        category: Category,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one product in full
    Show { id: i64 },

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },

    /// Compose the order message for the cart and print the link
    Checkout,

    /// Order a single product without going through the cart
    Order { id: i64 },

    /// Ask for a product the shop does not have
    Suggest {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Parse a feed and report rejected rows
    Feed {
        #[command(subcommand)]
        action: FeedAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    Add { id: i64 },
    Remove { id: i64 },
    /// Change a quantity by DELTA (never below 1)
    Qty {
        id: i64,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    List,
}

#[derive(Subcommand)]
enum WishlistAction {
    Toggle { id: i64 },
    List,
}

#[derive(Subcommand)]
enum FeedAction {
    /// Check a feed (defaults to the configured location)
    Check { location: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => "shopfront=warn",
        1 => "shopfront=info",
        _ => "shopfront=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    if let Command::Feed {
        action: FeedAction::Check { location },
    } = &cli.command
    {
        let location = location.as_deref().unwrap_or(&config.feed_location);
        return shop::check_feed(location, config.fetch_timeout()).await;
    }

    let mut shop = Shop::open(config, cli.offline).await?;

    match cli.command {
        Command::Search {
            query,
            category,
            limit,
        } => shop.search(&query.join(" "), category, limit),
        Command::Show { id } => shop.show(id)?,
        Command::Cart { action } => match action {
            CartAction::Add { id } => shop.cart_add(id).await?,
            CartAction::Remove { id } => shop.cart_remove(id).await?,
            CartAction::Qty { id, delta } => shop.cart_quantity(id, delta).await?,
            CartAction::List => shop.cart_list(),
        },
        Command::Wishlist { action } => match action {
            WishlistAction::Toggle { id } => shop.wishlist_toggle(id).await?,
            WishlistAction::List => shop.wishlist_list(),
        },
        Command::Checkout => shop.checkout()?,
        Command::Order { id } => shop.order(id)?,
        Command::Suggest { text } => shop.suggest(&text.join(" "))?,
        Command::Feed { .. } => {}
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ShopConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config = ShopConfig::load(path.as_deref())?;
    Ok(apply_flags(cli, config))
}

/// Flags win over the file and the environment
fn apply_flags(cli: &Cli, mut config: ShopConfig) -> ShopConfig {
    if let Some(feed) = &cli.feed {
        config.feed_location = feed.clone();
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    config
}
