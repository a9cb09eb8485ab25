//! Checkout hand-off - order messages and the messaging link

use std::fmt::Write as _;

use url::Url;

use crate::cart::CartLine;
use crate::error::{CoreError, Result};
use crate::ProductRecord;

/// Base of the messaging link; the shop number is appended as the path
const MESSAGING_BASE: &str = "https://wa.me/";

/// Currency sign used in composed messages
const CURRENCY: &str = "₹";

/// Compose the order message for a whole cart
pub fn order_message(shop_name: &str, lines: &[CartLine<'_>]) -> Result<String> {
    if lines.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let mut message = format!(
        "Hi {}! I want to place an order for the following items:\n\n",
        shop_name
    );
    let mut total: i64 = 0;
    for (index, line) in lines.iter().enumerate() {
        let subtotal = line.subtotal();
        total = total.saturating_add(subtotal);
        // Writing to a String cannot fail
        let _ = write!(
            message,
            "{}. {}\n   Qty: {} | Price: {}{}\n\n",
            index + 1,
            line.product.name,
            line.quantity,
            CURRENCY,
            subtotal
        );
    }
    let _ = write!(
        message,
        "*Total Amount: {}{}*\n\nPlease confirm my order.",
        CURRENCY, total
    );
    Ok(message)
}

/// Compose a single-product "order now" message
pub fn product_order_message(shop_name: &str, product: &ProductRecord) -> String {
    format!(
        "Hi {}! I want to order {} for {}{}. I saw it on your website.",
        shop_name, product.name, CURRENCY, product.price
    )
}

/// Compose a "couldn't find it" suggestion message
pub fn suggestion_message(shop_name: &str, suggestion: &str) -> String {
    format!(
        "Hi {}! I was looking for a product but couldn't find it. My suggestion: {}",
        shop_name,
        suggestion.trim()
    )
}

/// Build the messaging link carrying `message`
///
/// `number` may contain a leading `+`, spaces or dashes; anything else
/// that is not a digit is rejected.
pub fn whatsapp_link(number: &str, message: &str) -> Result<Url> {
    let digits: String = number
        .chars()
        .filter(|c| !matches!(c, '+' | ' ' | '-'))
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::InvalidNumber(number.to_string()));
    }

    let mut url = Url::parse(MESSAGING_BASE)?.join(&digits)?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}
