//! Inquiry management commands.

use tracing::info;

use aurum_core::{InquiryId, InquiryStatus};
use aurum_store::Store;
use aurum_store::config::StoreConfig;

/// List customer inquiries.
///
/// # Errors
///
/// Returns an error if configuration loading or store hydration fails.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(StoreConfig::from_env()?)?;

    info!(count = store.inquiries().len(), "inquiries");
    for inquiry in store.inquiries() {
        info!(
            "  {} | {} | {} | {} | {}",
            inquiry.id,
            inquiry.date.format("%Y-%m-%d %H:%M"),
            inquiry.name,
            inquiry.email,
            inquiry.status
        );
    }
    Ok(())
}

/// Set an inquiry's status, authenticating with the admin password.
///
/// # Errors
///
/// Returns an error on a bad password, an unknown inquiry id, or a store
/// failure.
pub fn set_status(
    id: &str,
    status: InquiryStatus,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = Store::open(StoreConfig::from_env()?)?;

    if !store.login(password) {
        return Err("invalid admin password".into());
    }

    let inquiry_id = InquiryId::new(id);
    // The store treats unknown ids as a no-op; report them here instead.
    if store.inquiries().iter().all(|i| i.id != inquiry_id) {
        store.logout();
        return Err(format!("inquiry not found: {id}").into());
    }

    store.update_inquiry_status(&inquiry_id, status)?;
    store.logout();

    info!(inquiry_id = %inquiry_id, status = %status, "inquiry status set");
    Ok(())
}
