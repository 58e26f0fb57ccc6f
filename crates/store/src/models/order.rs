//! Order model.
//!
//! Order line items are snapshots captured at checkout; later catalog edits
//! or deletions never reach past orders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use aurum_core::{Email, OrderId, OrderStatus, Price, ProductId};

/// A placed order. Orders are append-only; only their status changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: Email,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// One order line: a snapshot of the product at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price at checkout time.
    pub price: Price,
}

/// Customer fields collected by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer_name: String,
    pub customer_email: Email,
    pub shipping_address: String,
}
