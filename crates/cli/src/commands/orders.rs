//! Order management commands.

use tracing::info;

use aurum_core::{OrderId, OrderStatus};
use aurum_store::Store;
use aurum_store::config::StoreConfig;

/// List the order history.
///
/// # Errors
///
/// Returns an error if configuration loading or store hydration fails.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(StoreConfig::from_env()?)?;

    info!(count = store.orders().len(), "orders");
    for order in store.orders() {
        info!(
            "  {} | {} | {} | {} | {}",
            order.id, order.date, order.customer_name, order.total, order.status
        );
    }
    Ok(())
}

/// Set an order's status, authenticating with the admin password.
///
/// # Errors
///
/// Returns an error on a bad password, an unknown order id, or a store
/// failure.
pub fn set_status(
    id: &str,
    status: OrderStatus,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = Store::open(StoreConfig::from_env()?)?;

    if !store.login(password) {
        return Err("invalid admin password".into());
    }

    let order_id = OrderId::new(id);
    // The store treats unknown ids as a no-op; report them here instead.
    if store.orders().iter().all(|o| o.id != order_id) {
        store.logout();
        return Err(format!("order not found: {id}").into());
    }

    store.update_order_status(&order_id, status)?;
    store.logout();

    info!(order_id = %order_id, status = %status, "order status set");
    Ok(())
}
