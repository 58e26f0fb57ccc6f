//! Seed data used when a collection has never been persisted.
//!
//! Six products spanning every category (one out of stock, three featured)
//! and three orders in distinct statuses. Seed order lines intentionally
//! snapshot names and prices that differ from the live catalog.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use aurum_core::{Category, Email, OrderId, OrderStatus, Price, ProductId};

use crate::models::{Order, OrderItem, Product};

/// Default product catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Classic Cuban Link Chain".to_string(),
            description: "Vintage 14K gold Cuban link chain. Perfect weight and shine. \
                          Pre-owned in excellent condition."
                .to_string(),
            price: usd(1299),
            category: Category::Chain,
            image_url: "/images/products/cuban-link-chain.jpg".to_string(),
            stock: 1,
            featured: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Diamond Solitaire Engagement Ring".to_string(),
            description: "1.5ct round brilliant diamond set in platinum. GIA certified, \
                          VS1 clarity, G color. Stunning custom piece."
                .to_string(),
            price: usd(8999),
            category: Category::Ring,
            image_url: "/images/products/solitaire-ring.jpg".to_string(),
            stock: 1,
            featured: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Delicate Gold Necklace".to_string(),
            description: "Minimal and elegant 18K gold necklace perfect for everyday \
                          wear or layering."
                .to_string(),
            price: usd(449),
            category: Category::Chain,
            image_url: "/images/products/delicate-necklace.jpg".to_string(),
            stock: 3,
            featured: false,
        },
        Product {
            id: ProductId::new("4"),
            name: "Halo Diamond Engagement Ring".to_string(),
            description: "Custom 2ct center stone surrounded by pave diamonds. 14K white \
                          gold setting. Made to order."
                .to_string(),
            price: usd(12_999),
            category: Category::Ring,
            image_url: "/images/products/halo-ring.jpg".to_string(),
            stock: 0,
            featured: true,
        },
        Product {
            id: ProductId::new("5"),
            name: "Diamond Tennis Bracelet".to_string(),
            description: "Classic tennis bracelet with 5ctw diamonds. 14K white gold \
                          setting. Timeless elegance."
                .to_string(),
            price: usd(6499),
            category: Category::Bracelet,
            image_url: "/images/products/tennis-bracelet.jpg".to_string(),
            stock: 2,
            featured: false,
        },
        Product {
            id: ProductId::new("6"),
            name: "Pearl Drop Earrings".to_string(),
            description: "Freshwater pearl drops on 14K gold hooks. Understated and \
                          versatile."
                .to_string(),
            price: usd(899),
            category: Category::Other,
            image_url: "/images/products/pearl-earrings.jpg".to_string(),
            stock: 4,
            featured: false,
        },
    ]
}

/// Default order history.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            customer_name: "John Smith".to_string(),
            customer_email: email("john@example.com"),
            shipping_address: "123 Main St, Los Angeles, CA 90001".to_string(),
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                product_name: "Classic Cuban Link Chain".to_string(),
                quantity: 1,
                price: usd(1299),
            }],
            total: usd(1299),
            status: OrderStatus::Processing,
            date: date(2026, 2, 8),
        },
        Order {
            id: OrderId::new("ORD-002"),
            customer_name: "Sarah Johnson".to_string(),
            customer_email: email("sarah@example.com"),
            shipping_address: "456 Oak Ave, New York, NY 10001".to_string(),
            items: vec![OrderItem {
                product_id: ProductId::new("3"),
                product_name: "Delicate Gold Necklace".to_string(),
                quantity: 2,
                // Pre-dates the catalog's current $449 price
                price: usd(349),
            }],
            total: usd(698),
            status: OrderStatus::Shipped,
            date: date(2026, 2, 6),
        },
        Order {
            id: OrderId::new("ORD-003"),
            customer_name: "Mike Davis".to_string(),
            customer_email: email("mike@example.com"),
            shipping_address: "789 Pine Rd, Miami, FL 33101".to_string(),
            items: vec![OrderItem {
                product_id: ProductId::new("5"),
                product_name: "Gold Link Bracelet".to_string(),
                quantity: 1,
                price: usd(749),
            }],
            total: usd(749),
            status: OrderStatus::Pending,
            date: date(2026, 2, 10),
        },
    ]
}

fn usd(dollars: i64) -> Price {
    Price::usd(Decimal::from(dollars))
}

fn email(address: &str) -> Email {
    Email::parse(address).expect("seed email is valid")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}
