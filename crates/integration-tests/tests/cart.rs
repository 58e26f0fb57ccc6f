//! Cart mutation semantics.
//!
//! The cart layer is deliberately permissive: no stock checks, silent
//! no-ops on unknown ids, and quantities set verbatim. Checkout is where
//! validation happens.

use rust_decimal::Decimal;

use aurum_core::ProductId;
use aurum_integration_tests::TestContext;

#[test]
fn test_add_to_cart_creates_single_line_with_quantity_one() {
    let mut ctx = TestContext::new();
    let product = ctx.store.products()[0].clone();

    ctx.store.add_to_cart(&product);

    let cart = ctx.store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].product.id, product.id);
    assert_eq!(cart[0].quantity, 1);
}

#[test]
fn test_add_to_cart_twice_accumulates_quantity() {
    let mut ctx = TestContext::new();
    let product = ctx.store.products()[0].clone();

    ctx.store.add_to_cart(&product);
    ctx.store.add_to_cart(&product);

    let cart = ctx.store.cart();
    assert_eq!(cart.len(), 1, "same product must not create a second line");
    assert_eq!(cart[0].quantity, 2);
}

#[test]
fn test_add_to_cart_ignores_stock() {
    let mut ctx = TestContext::new();
    let out_of_stock = ctx
        .store
        .products()
        .iter()
        .find(|p| !p.in_stock())
        .expect("seed data has an out-of-stock product")
        .clone();

    ctx.store.add_to_cart(&out_of_stock);

    assert_eq!(ctx.store.cart().len(), 1);
}

#[test]
fn test_update_quantity_sets_verbatim() {
    let mut ctx = TestContext::new();
    let product = ctx.store.products()[0].clone();
    ctx.store.add_to_cart(&product);

    // No upper bound at this layer, even above stock
    ctx.store.update_cart_quantity(&product.id, 99);

    assert_eq!(ctx.store.cart()[0].quantity, 99);
}

#[test]
fn test_update_quantity_zero_or_negative_removes_line() {
    for quantity in [0, -1] {
        let mut ctx = TestContext::new();
        let product = ctx.store.products()[0].clone();
        ctx.store.add_to_cart(&product);

        ctx.store.update_cart_quantity(&product.id, quantity);

        assert!(
            ctx.store.cart().is_empty(),
            "quantity {quantity} must remove the line"
        );
    }
}

#[test]
fn test_remove_from_cart_matches_quantity_zero_update() {
    let mut ctx = TestContext::new();
    let product = ctx.store.products()[0].clone();
    ctx.store.add_to_cart(&product);

    ctx.store.remove_from_cart(&product.id);

    assert!(ctx.store.cart().is_empty());
}

#[test]
fn test_remove_unknown_product_is_a_noop() {
    let mut ctx = TestContext::new();
    let product = ctx.store.products()[0].clone();
    ctx.store.add_to_cart(&product);

    ctx.store.remove_from_cart(&ProductId::new("no-such-id"));
    ctx.store.update_cart_quantity(&ProductId::new("no-such-id"), 5);

    assert_eq!(ctx.store.cart().len(), 1);
    assert_eq!(ctx.store.cart()[0].quantity, 1);
}

#[test]
fn test_clear_cart_empties_unconditionally() {
    let mut ctx = TestContext::new();
    let products: Vec<_> = ctx.store.products().iter().take(3).cloned().collect();
    for product in &products {
        ctx.store.add_to_cart(product);
    }
    assert_eq!(ctx.store.cart().len(), 3);

    ctx.store.clear_cart();

    assert!(ctx.store.cart().is_empty());
}

#[test]
fn test_cart_count_sums_quantities() {
    let mut ctx = TestContext::new();
    let first = ctx.store.products()[0].clone();
    let second = ctx.store.products()[1].clone();

    ctx.store.add_to_cart(&first);
    ctx.store.add_to_cart(&first);
    ctx.store.add_to_cart(&second);

    assert_eq!(ctx.store.cart_count(), 3);
}

#[test]
fn test_cart_totals_include_flat_shipping() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.store.cart_totals().total.amount, Decimal::ZERO);

    // Seed product 3 is $449
    let necklace = ctx
        .store
        .product(&ProductId::new("3"))
        .expect("seed product present")
        .clone();
    ctx.store.add_to_cart(&necklace);
    ctx.store.update_cart_quantity(&necklace.id, 2);

    let totals = ctx.store.cart_totals();
    assert_eq!(totals.subtotal.amount, Decimal::from(898));
    assert_eq!(totals.shipping.amount, Decimal::from(25));
    assert_eq!(totals.total.amount, Decimal::from(923));
}
