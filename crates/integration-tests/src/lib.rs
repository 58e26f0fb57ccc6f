//! Integration tests for Aurum Atelier.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aurum-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart` - Cart mutation semantics
//! - `checkout` - Order creation and its validation
//! - `admin` - Session gating and catalog/order/inquiry administration
//! - `persistence` - Hydration, round-trips, and reopen behavior
//!
//! Every test drives a real [`Store`] against a throwaway data directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use aurum_core::{Category, Email, Price, ProductId};
use aurum_store::Store;
use aurum_store::config::StoreConfig;
use aurum_store::models::{CustomerDetails, NewProduct};
use rust_decimal::Decimal;

/// The password every test context is configured with.
pub const ADMIN_PASSWORD: &str = "admin123";

/// A store opened against a temporary data directory.
pub struct TestContext {
    pub store: Store,
    dir: tempfile::TempDir,
}

impl TestContext {
    /// Open a fresh store over a fresh data directory (hydrates from seed
    /// data).
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp data dir");
        let store =
            Store::open(StoreConfig::new(dir.path(), ADMIN_PASSWORD)).expect("open store");
        Self { store, dir }
    }

    /// Drop the store and hydrate a new one from the same data directory,
    /// as a second session would.
    #[must_use]
    pub fn reopen(self) -> Self {
        let Self { store, dir } = self;
        drop(store);
        let store =
            Store::open(StoreConfig::new(dir.path(), ADMIN_PASSWORD)).expect("reopen store");
        Self { store, dir }
    }

    /// Path of the underlying data directory.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Log in with the configured password, asserting success.
    pub fn login(&mut self) {
        assert!(self.store.login(ADMIN_PASSWORD), "admin login failed");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields for a catalog product priced at `dollars` with the given stock.
#[must_use]
pub fn new_product(name: &str, dollars: i64, stock: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("{name} (test)"),
        price: Price::usd(Decimal::from(dollars)),
        category: Category::Other,
        image_url: String::new(),
        stock,
        featured: false,
    }
}

/// Checkout details for a test customer.
#[must_use]
pub fn customer() -> CustomerDetails {
    CustomerDetails {
        customer_name: "Ada Lovelace".to_string(),
        customer_email: Email::parse("ada@example.com").expect("valid test email"),
        shipping_address: "12 Analytical Way, London".to_string(),
    }
}

/// Id of a seed product known to exist.
#[must_use]
pub fn seed_product_id() -> ProductId {
    ProductId::new("1")
}
