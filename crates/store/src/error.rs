//! Unified error handling for store operations.
//!
//! Most store operations are deliberately permissive and cannot fail; the
//! variants here cover the hardened paths: checkout validation, admin
//! gating, and hydration from storage. A rejected login is a `bool`, not an
//! error.

use thiserror::Error;

use aurum_core::ProductId;

use crate::storage::StorageError;

/// Store-level error type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart line references a product no longer in the catalog.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Requested quantity exceeds the available stock.
    #[error("invalid quantity for {product}: requested {requested}, available {available}")]
    InvalidQuantity {
        /// Product whose stock was exceeded.
        product: ProductId,
        /// Quantity asked for at checkout.
        requested: u32,
        /// Stock on hand at checkout time.
        available: i64,
    },

    /// Checkout attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Admin operation attempted without an active session.
    #[error("admin session required")]
    Unauthorized,

    /// Durable storage could not be read during hydration.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound(ProductId::new("PROD-123"));
        assert_eq!(err.to_string(), "product not found: PROD-123");

        let err = StoreError::InvalidQuantity {
            product: ProductId::new("4"),
            requested: 2,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid quantity for 4: requested 2, available 0"
        );

        assert_eq!(StoreError::EmptyCart.to_string(), "cart is empty");
        assert_eq!(
            StoreError::Unauthorized.to_string(),
            "admin session required"
        );
    }
}
