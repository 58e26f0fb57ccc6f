//! Browse the product catalog.

use tracing::info;

use aurum_core::Category;
use aurum_store::Store;
use aurum_store::config::StoreConfig;
use aurum_store::models::CatalogSort;

/// List the catalog, optionally filtered and sorted.
///
/// # Errors
///
/// Returns an error if configuration loading or store hydration fails.
pub fn run(category: Option<Category>, sort: CatalogSort) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(StoreConfig::from_env()?)?;
    let products = store.catalog(category, sort);

    info!(count = products.len(), sort = %sort, "catalog");
    for product in products {
        let availability = if product.in_stock() {
            format!("stock {}", product.stock)
        } else {
            "out of stock".to_string()
        };
        let featured = if product.featured { " [featured]" } else { "" };
        info!(
            "  {} | {} | {} | {} | {}{}",
            product.id, product.name, product.category, product.price, availability, featured
        );
    }
    Ok(())
}
