//! Hydration, round-trips, and reopen behavior.
//!
//! A reopened store plays the part of a second session hydrating from the
//! same storage slots.

use std::fs;

use rust_decimal::Decimal;

use aurum_core::Email;
use aurum_integration_tests::{TestContext, customer, new_product};
use aurum_store::Store;
use aurum_store::config::StoreConfig;
use aurum_store::models::NewInquiry;

#[test]
fn test_fresh_store_hydrates_from_seed_data() {
    let ctx = TestContext::new();

    assert_eq!(ctx.store.products().len(), 6);
    assert_eq!(ctx.store.orders().len(), 3);
    assert!(ctx.store.cart().is_empty());
    assert!(ctx.store.inquiries().is_empty());
    assert!(!ctx.store.is_admin());
}

#[test]
fn test_collections_round_trip_through_storage() {
    let mut ctx = TestContext::new();

    let product = ctx.store.products()[0].clone();
    ctx.store.add_to_cart(&product);
    ctx.store.add_to_cart(&product);
    ctx.store.add_inquiry(NewInquiry {
        name: "Grace Hopper".to_string(),
        email: Email::parse("grace@example.com").expect("valid email"),
        phone: Some("+1 555 0100".to_string()),
        message: "Do you resize rings?".to_string(),
    });

    let products_before = ctx.store.products().to_vec();
    let orders_before = ctx.store.orders().to_vec();
    let cart_before = ctx.store.cart().to_vec();
    let inquiries_before = ctx.store.inquiries().to_vec();

    let ctx = ctx.reopen();

    assert_eq!(ctx.store.products(), products_before.as_slice());
    assert_eq!(ctx.store.orders(), orders_before.as_slice());
    assert_eq!(ctx.store.cart(), cart_before.as_slice());
    assert_eq!(ctx.store.inquiries(), inquiries_before.as_slice());
}

#[test]
fn test_admin_session_persists_until_logout() {
    let mut ctx = TestContext::new();
    ctx.login();

    let mut ctx = ctx.reopen();
    assert!(ctx.store.is_admin(), "session survives a reopen");

    ctx.store.logout();
    let ctx = ctx.reopen();
    assert!(!ctx.store.is_admin(), "logout removes the persisted flag");
}

#[test]
fn test_checkout_effects_survive_a_reopen() {
    let mut ctx = TestContext::new();
    ctx.login();
    let product = ctx
        .store
        .add_product(new_product("Curb Chain", 75, 4))
        .expect("add product");
    ctx.store.logout();

    ctx.store.add_to_cart(&product);
    let order = ctx.store.create_order(customer()).expect("create order");

    let ctx = ctx.reopen();

    let stored = ctx
        .store
        .orders()
        .iter()
        .find(|o| o.id == order.id)
        .expect("order persisted");
    assert_eq!(stored.total.amount, Decimal::from(75));
    assert!(ctx.store.cart().is_empty());
    assert_eq!(ctx.store.product(&product.id).expect("present").stock, 3);
}

#[test]
fn test_deleted_product_stays_deleted_after_reopen() {
    let mut ctx = TestContext::new();
    ctx.login();
    let id = aurum_integration_tests::seed_product_id();
    ctx.store.delete_product(&id).expect("delete");

    let ctx = ctx.reopen();

    assert!(ctx.store.product(&id).is_none());
    assert_eq!(ctx.store.products().len(), 5);
}

#[test]
fn test_corrupt_slot_fails_hydration() {
    let ctx = TestContext::new();
    fs::write(ctx.data_dir().join("products.json"), "{ not json").expect("write garbage");

    let result = Store::open(StoreConfig::new(ctx.data_dir(), "admin123"));
    assert!(result.is_err());
}
