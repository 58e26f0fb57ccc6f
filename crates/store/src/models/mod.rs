//! Domain models for the store collections.

pub mod cart;
pub mod inquiry;
pub mod order;
pub mod product;

pub use cart::{CartItem, CartTotals};
pub use inquiry::{Inquiry, NewInquiry};
pub use order::{CustomerDetails, Order, OrderItem};
pub use product::{CatalogSort, NewProduct, Product, ProductPatch};
