// crates/cart-core/tests/cart_behaviour.rs
use cart_core::{Cart, Category, Menu, MenuItem, Money, TaxRate, Totals, DEFAULT_CUSTOMER_NAME};

fn price(units: f64) -> Money {
    Money::from_units(units).expect("valid price")
}

fn sample_menu() -> Menu {
    Menu::from_items(vec![
        MenuItem::new(1, "Coffee", "Fresh brewed coffee", price(3.50), Category::Beverages),
        MenuItem::new(2, "Tea", "Herbal tea selection", price(2.50), Category::Beverages),
        MenuItem::new(5, "Margherita Pizza", "Classic tomato and mozzarella", price(12.99), Category::MainCourse),
        MenuItem::new(10, "Pie", "Ten dollar pie", price(10.00), Category::Desserts),
        MenuItem::new(11, "Cookie", "Five dollar cookie", price(5.00), Category::Desserts),
    ])
}

#[test]
fn adding_same_item_twice_yields_one_line_with_quantity_two() {
    let menu = sample_menu();
    let mut cart = Cart::new();

    assert!(cart.add_item(&menu, 1));
    assert!(cart.add_item(&menu, 1));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(1).map(|l| l.quantity), Some(2));
}

#[test]
fn add_looks_across_all_categories_and_keeps_insertion_order() {
    let menu = sample_menu();
    let mut cart = Cart::new();

    cart.add_item(&menu, 11);
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 5);
    cart.add_item(&menu, 11);

    let ids: Vec<u32> = cart.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![11, 1, 5]);
    assert_eq!(cart.item_count(), 4);
}

#[test]
fn adding_unknown_id_is_a_silent_no_op() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 2);

    assert!(!cart.add_item(&menu, 999));
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn unit_price_is_captured_at_add_time() {
    let mut menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);

    // Server-side price change after the line exists.
    menu = Menu::from_items(vec![MenuItem::new(1, "Coffee", "", price(9.00), Category::Beverages)]);
    cart.add_item(&menu, 1);

    let line = cart.get(1).expect("line present");
    assert_eq!(line.unit_price, price(3.50));
    assert_eq!(line.quantity, 2);
}

#[test]
fn update_quantity_by_negative_quantity_removes_the_line() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 2);

    assert_eq!(cart.update_quantity(1, -2), None);
    assert!(!cart.contains(1));
    assert_eq!(cart.len(), 1);
}

#[test]
fn update_quantity_adjusts_and_overshoot_removes() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 5);

    assert_eq!(cart.update_quantity(5, 3), Some(4));
    assert_eq!(cart.update_quantity(5, -1), Some(3));
    assert_eq!(cart.update_quantity(5, -10), None);
    assert!(cart.is_empty());
}

#[test]
fn update_quantity_on_missing_id_is_a_no_op() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 2);
    let before = cart.items();

    assert_eq!(cart.update_quantity(42, 1), None);
    assert_eq!(cart.items(), before);
}

#[test]
fn remove_preserves_order_of_the_rest() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    for id in [1, 2, 5, 10] {
        cart.add_item(&menu, id);
    }

    let removed = cart.remove_item(2).expect("line removed");
    assert_eq!(removed.id, 2);

    let ids: Vec<u32> = cart.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 5, 10]);
}

#[test]
fn remove_nonexistent_id_leaves_cart_unchanged() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 5);
    let before = cart.items();

    assert!(cart.remove_item(77).is_none());
    assert_eq!(cart.items(), before);
}

#[test]
fn totals_match_reference_example() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 10);
    cart.add_item(&menu, 10);
    cart.add_item(&menu, 11);

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal, price(25.00));
    assert_eq!(totals.tax, price(2.00));
    assert_eq!(totals.total, price(27.00));
    assert_eq!(totals.total.to_string(), "27.00");
}

#[test]
fn totals_are_linear_in_quantity() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 10);
    cart.add_item(&menu, 10);
    cart.add_item(&menu, 11);
    let single = cart.compute_totals();

    for id in [10, 11] {
        let q = cart.get(id).map(|l| l.quantity as i64).unwrap_or(0);
        cart.update_quantity(id, q);
    }
    let doubled = cart.compute_totals();

    assert_eq!(doubled.subtotal.cents(), single.subtotal.cents() * 2);
    assert_eq!(doubled.tax.cents(), single.tax.cents() * 2);
    // 8% in both cases
    assert_eq!(doubled.tax.cents() * 100, doubled.subtotal.cents() * 8);
    assert_eq!(single.tax.cents() * 100, single.subtotal.cents() * 8);
}

#[test]
fn tax_rounds_half_up_to_cents() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    // 12.99 * 0.08 = 1.0392 -> 1.04
    cart.add_item(&menu, 5);
    let totals = cart.compute_totals();
    assert_eq!(totals.tax, price(1.04));
    assert_eq!(totals.total, price(14.03));

    // 3.50 + 2.50 = 6.00 -> tax 0.48
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 2);
    assert_eq!(cart.compute_totals().tax, price(0.48));
}

#[test]
fn custom_tax_rate_is_respected() {
    let menu = sample_menu();
    let mut cart = Cart::with_tax_rate(TaxRate::from_basis_points(1000));
    cart.add_item(&menu, 10);
    assert_eq!(cart.compute_totals().tax, price(1.00));
}

#[test]
fn clear_then_totals_are_all_zero() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 5);
    cart.customer_mut().name = "Ada".to_string();
    cart.customer_mut().notes = "no onions".to_string();

    cart.clear();

    let totals = cart.compute_totals();
    assert!(totals.is_zero());
    assert_eq!(totals, Totals::default());
    assert_eq!(totals.subtotal.to_string(), "0.00");
    assert!(cart.customer().name.is_empty());
    assert!(cart.customer().notes.is_empty());
}

#[test]
fn blank_name_submits_as_guest() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);

    let submission = cart.to_submission("", "");
    assert_eq!(submission.customer_name, DEFAULT_CUSTOMER_NAME);
    assert_eq!(submission.customer_name, "Guest");
    assert_eq!(submission.notes, "");

    let submission = cart.to_submission("   ", "  extra hot  ");
    assert_eq!(submission.customer_name, "Guest");
    assert_eq!(submission.notes, "extra hot");
}

#[test]
fn submission_carries_lines_and_contact_details() {
    let menu = sample_menu();
    let mut cart = Cart::new();
    cart.add_item(&menu, 5);
    cart.add_item(&menu, 1);
    cart.customer_mut().name = " Grace ".to_string();
    cart.customer_mut().email = "grace@example.com".to_string();

    let submission = cart.checkout().expect("non-empty cart");
    assert_eq!(submission.customer_name, "Grace");
    assert_eq!(submission.customer_email.as_deref(), Some("grace@example.com"));
    assert_eq!(submission.customer_phone, None);
    let ids: Vec<u32> = submission.items.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![5, 1]);

    let json = serde_json::to_value(&submission).expect("serializes");
    assert_eq!(json["items"][0]["price"], serde_json::json!(12.99));
    assert_eq!(json["items"][0]["quantity"], serde_json::json!(1));
    assert!(json.get("customer_phone").is_none());
}

#[test]
fn checkout_rejects_empty_cart() {
    let cart = Cart::new();
    assert_eq!(cart.checkout(), Err(cart_core::CartError::EmptyCart));
}
