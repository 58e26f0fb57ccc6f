//! Write seed data to the data directory.
//!
//! Hydration falls back to seed data on its own; this command exists to
//! materialize the storage slots up front and to reset a data directory
//! that has drifted during development.

use tracing::info;

use aurum_store::config::StoreConfig;
use aurum_store::models::{CartItem, Inquiry, Product};
use aurum_store::seed;
use aurum_store::storage::{Storage, slots};

/// Seed (or with `force`, reset) the configured data directory.
///
/// # Errors
///
/// Returns an error if the directory is already seeded and `force` is not
/// set, or if a storage write fails.
pub fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let storage = Storage::open(&config.data_dir)?;

    if !force && storage.load::<Vec<Product>>(slots::PRODUCTS)?.is_some() {
        return Err("data directory already seeded (use --force to overwrite)".into());
    }

    storage.save(slots::PRODUCTS, &seed::products())?;
    storage.save(slots::ORDERS, &seed::orders())?;
    storage.save(slots::CART, &Vec::<CartItem>::new())?;
    storage.save(slots::INQUIRIES, &Vec::<Inquiry>::new())?;
    storage.remove(slots::IS_ADMIN)?;

    info!(data_dir = %config.data_dir.display(), "seed data written");
    Ok(())
}
