//! Shopping cart model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use aurum_core::Price;

use super::product::Product;

/// Flat shipping rate charged on any non-empty cart, in dollars.
const FLAT_RATE_SHIPPING_DOLLARS: i64 = 25;

/// One cart line: the product as it looked when added, plus a quantity.
///
/// The embedded product is a snapshot; the live catalog is consulted again
/// at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1; a quantity update to zero removes the line.
    pub quantity: u32,
}

impl CartItem {
    /// Extended price for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.line_total(self.quantity)
    }
}

/// Totals shown in the cart summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CartTotals {
    /// Compute totals for the given cart lines. An empty cart has no
    /// shipping charge.
    #[must_use]
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal: Decimal = items.iter().map(|item| item.line_total().amount).sum();
        let shipping = if subtotal > Decimal::ZERO {
            Decimal::from(FLAT_RATE_SHIPPING_DOLLARS)
        } else {
            Decimal::ZERO
        };

        Self {
            subtotal: Price::usd(subtotal),
            shipping: Price::usd(shipping),
            total: Price::usd(subtotal + shipping),
        }
    }
}
