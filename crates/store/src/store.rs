//! The shared state container.
//!
//! [`Store`] is the single source of truth for the storefront: the product
//! catalog, order history, customer inquiries, the shopping cart, and the
//! admin-session flag. It is opened once per session from a
//! [`StoreConfig`] and passed explicitly to every consumer.
//!
//! # Persistence
//!
//! Each collection hydrates from its storage slot in [`Store::open`]
//! (falling back to seed data) and is rewritten in full immediately after
//! every in-memory mutation. Durability is best-effort: consumers observe
//! the in-memory state regardless, and a failed write is logged at `warn`
//! rather than surfaced. Two processes sharing a data directory are
//! last-writer-wins.

use chrono::Utc;
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{info, warn};

use aurum_core::{
    Category, InquiryId, InquiryStatus, OrderId, OrderStatus, Price, ProductId,
};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::ids::IdGenerator;
use crate::models::{
    CartItem, CartTotals, CatalogSort, CustomerDetails, Inquiry, NewInquiry, NewProduct, Order,
    OrderItem, Product, ProductPatch,
};
use crate::seed;
use crate::storage::{Storage, slots};

/// Number of products surfaced on the home page.
const FEATURED_LIMIT: usize = 3;

/// The shared state container. See the module docs for the persistence
/// contract.
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    storage: Storage,
    products: Vec<Product>,
    orders: Vec<Order>,
    cart: Vec<CartItem>,
    inquiries: Vec<Inquiry>,
    is_admin: bool,
    ids: IdGenerator,
}

impl Store {
    /// Open the store, hydrating every collection from its storage slot.
    ///
    /// Absent slots fall back to the seed catalog and seed orders (empty
    /// for cart and inquiries, logged-out for the admin flag). This runs
    /// once per session; thereafter the in-memory state is authoritative.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the data directory cannot be
    /// created or a present slot cannot be read.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let storage = Storage::open(&config.data_dir)?;

        let products = storage.load(slots::PRODUCTS)?.unwrap_or_else(seed::products);
        let orders = storage.load(slots::ORDERS)?.unwrap_or_else(seed::orders);
        let cart: Vec<CartItem> = storage.load(slots::CART)?.unwrap_or_default();
        let inquiries: Vec<Inquiry> = storage.load(slots::INQUIRIES)?.unwrap_or_default();
        let is_admin = storage.load::<String>(slots::IS_ADMIN)?.as_deref() == Some("true");

        info!(
            products = products.len(),
            orders = orders.len(),
            inquiries = inquiries.len(),
            cart_lines = cart.len(),
            "store hydrated"
        );

        Ok(Self {
            config,
            storage,
            products,
            orders,
            cart,
            inquiries,
            is_admin,
            ids: IdGenerator::new(),
        })
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    /// Current product catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Order history, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Current cart contents.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Customer inquiries, oldest first.
    #[must_use]
    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    /// Whether an admin session is active.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The shop page's view of the catalog: optionally filtered to one
    /// category, then sorted.
    #[must_use]
    pub fn catalog(&self, category: Option<Category>, sort: CatalogSort) -> Vec<&Product> {
        let mut items: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect();

        match sort {
            // Stable sort keeps catalog order within each group
            CatalogSort::Featured => items.sort_by_key(|p| !p.featured),
            CatalogSort::PriceAscending => {
                items.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
            }
            CatalogSort::PriceDescending => {
                items.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
            CatalogSort::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        items
    }

    /// Products highlighted on the home page.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Summed cart quantities (the header badge).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Cart summary totals.
    #[must_use]
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::for_items(&self.cart)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `product` to the cart: an existing line's quantity
    /// is incremented, otherwise a new line is appended with quantity 1.
    ///
    /// No stock check happens here; the catalog page is expected to
    /// disable out-of-stock products and checkout re-validates.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.cart.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
        self.persist(slots::CART, &self.cart);
    }

    /// Remove the line for `product_id`. No-op if the cart has no such
    /// line.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        let before = self.cart.len();
        self.cart.retain(|item| &item.product.id != product_id);
        if self.cart.len() != before {
            self.persist(slots::CART, &self.cart);
        }
    }

    /// Set a line's quantity verbatim. A quantity of zero or less removes
    /// the line; no upper bound is enforced at this layer. No-op if the
    /// cart has no such line.
    pub fn update_cart_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        if let Some(item) = self.cart.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.persist(slots::CART, &self.cart);
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist(slots::CART, &self.cart);
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Place an order for the current cart contents.
    ///
    /// Every cart line is re-validated against the live catalog before any
    /// state changes: lines snapshot the product's name and unit price as
    /// of this call, the total is the sum over lines, the order starts
    /// `pending` and dated today. On success the ordered quantities are
    /// deducted from stock and the cart is emptied.
    ///
    /// # Errors
    ///
    /// - `EmptyCart` if the cart has no lines.
    /// - `NotFound` if a line's product has left the catalog since it was
    ///   added to the cart.
    /// - `InvalidQuantity` if a line asks for more than the available
    ///   stock.
    ///
    /// On any error, products, orders, and cart are left untouched.
    pub fn create_order(&mut self, customer: CustomerDetails) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        // Validate all lines and capture snapshots before mutating anything.
        let mut items = Vec::with_capacity(self.cart.len());
        for line in &self.cart {
            let product = self
                .products
                .iter()
                .find(|p| p.id == line.product.id)
                .ok_or_else(|| StoreError::NotFound(line.product.id.clone()))?;

            if i64::from(line.quantity) > product.stock {
                return Err(StoreError::InvalidQuantity {
                    product: product.id.clone(),
                    requested: line.quantity,
                    available: product.stock,
                });
            }

            items.push(OrderItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: line.quantity,
                price: product.price,
            });
        }

        let total: Decimal = items
            .iter()
            .map(|item| item.price.line_total(item.quantity).amount)
            .sum();

        let order = Order {
            id: OrderId::from_millis(self.ids.next_millis()),
            customer_name: customer.customer_name,
            customer_email: customer.customer_email,
            shipping_address: customer.shipping_address,
            items,
            total: Price::usd(total),
            status: OrderStatus::Pending,
            date: Utc::now().date_naive(),
        };

        self.orders.push(order.clone());
        for line in &self.cart {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == line.product.id) {
                product.stock -= i64::from(line.quantity);
            }
        }
        self.cart.clear();

        self.persist(slots::ORDERS, &self.orders);
        self.persist(slots::PRODUCTS, &self.products);
        self.persist(slots::CART, &self.cart);

        info!(
            order_id = %order.id,
            total = %order.total,
            lines = order.items.len(),
            "order created"
        );
        Ok(order)
    }

    // =========================================================================
    // Catalog administration
    // =========================================================================

    /// Add a product to the catalog under a fresh time-based id.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` without an active admin session.
    pub fn add_product(&mut self, new: NewProduct) -> Result<Product> {
        self.require_admin()?;

        let product = Product {
            id: ProductId::from_millis(self.ids.next_millis()),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            image_url: new.image_url,
            stock: new.stock,
            featured: new.featured,
        };
        self.products.push(product.clone());
        self.persist(slots::PRODUCTS, &self.products);

        info!(product_id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Merge `patch` into the matching product. Unknown ids are a silent
    /// no-op; merged values are not validated.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` without an active admin session.
    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> Result<()> {
        self.require_admin()?;

        if let Some(product) = self.products.iter_mut().find(|p| &p.id == id) {
            patch.apply(product);
            self.persist(slots::PRODUCTS, &self.products);
            info!(product_id = %id, "product updated");
        }
        Ok(())
    }

    /// Remove the matching product. Unknown ids are a silent no-op.
    ///
    /// Deleting does not cascade: past orders keep their snapshots, and a
    /// cart line holding the product stays behind until checkout
    /// re-validation rejects it.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` without an active admin session.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<()> {
        self.require_admin()?;

        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() != before {
            self.persist(slots::PRODUCTS, &self.products);
            info!(product_id = %id, "product deleted");
        }
        Ok(())
    }

    // =========================================================================
    // Orders & inquiries administration
    // =========================================================================

    /// Set an order's status. Unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` without an active admin session.
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<()> {
        self.require_admin()?;

        if let Some(order) = self.orders.iter_mut().find(|o| &o.id == id)
            && order.status.allows_transition(status)
        {
            order.status = status;
            self.persist(slots::ORDERS, &self.orders);
            info!(order_id = %id, status = %status, "order status updated");
        }
        Ok(())
    }

    /// Set an inquiry's status. Unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` without an active admin session.
    pub fn update_inquiry_status(&mut self, id: &InquiryId, status: InquiryStatus) -> Result<()> {
        self.require_admin()?;

        if let Some(inquiry) = self.inquiries.iter_mut().find(|i| &i.id == id)
            && inquiry.status.allows_transition(status)
        {
            inquiry.status = status;
            self.persist(slots::INQUIRIES, &self.inquiries);
            info!(inquiry_id = %id, status = %status, "inquiry status updated");
        }
        Ok(())
    }

    /// Record a contact-form submission: fresh id, current timestamp,
    /// status `new`.
    pub fn add_inquiry(&mut self, new: NewInquiry) -> Inquiry {
        let inquiry = Inquiry {
            id: InquiryId::from_millis(self.ids.next_millis()),
            name: new.name,
            email: new.email,
            phone: new.phone,
            message: new.message,
            date: Utc::now(),
            status: InquiryStatus::New,
        };
        self.inquiries.push(inquiry.clone());
        self.persist(slots::INQUIRIES, &self.inquiries);

        info!(inquiry_id = %inquiry.id, "inquiry received");
        inquiry
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Attempt an admin login. On a password match the admin flag is set
    /// and persisted; a mismatch changes nothing.
    pub fn login(&mut self, password: &str) -> bool {
        if password == self.config.admin_password.expose_secret() {
            self.is_admin = true;
            if let Err(e) = self.storage.save(slots::IS_ADMIN, "true") {
                warn!(error = %e, "failed to persist admin session");
            }
            info!("admin session started");
            true
        } else {
            warn!("rejected admin login");
            false
        }
    }

    /// End the admin session and remove it from storage.
    pub fn logout(&mut self) {
        self.is_admin = false;
        if let Err(e) = self.storage.remove(slots::IS_ADMIN) {
            warn!(error = %e, "failed to clear persisted admin session");
        }
        info!("admin session ended");
    }

    fn require_admin(&self) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(StoreError::Unauthorized)
        }
    }

    /// Best-effort slot write; failures are logged, never surfaced.
    fn persist<T: Serialize + ?Sized>(&self, slot: &str, value: &T) {
        if let Err(e) = self.storage.save(slot, value) {
            warn!(slot, error = %e, "failed to persist collection");
        }
    }
}
