// crates/cart-client/tests/view_models.rs

mod common;

use cart_client::view_model::{
    bill_text, cart_view, confirmation_view, format_money, menu_cards, menu_item_cards, order_cards,
    stats_view, EMPTY_CART_MESSAGE,
};
use cart_client::Confirmation;
use cart_core::{Cart, Category, Menu, Money};
use cart_protocol::{AdminStats, OrderStatus, OrdersPage, PopularItem};

use common::{price, sample_menu, sample_order};

#[test]
fn money_renders_with_dollar_sign() {
    assert_eq!(format_money(Money::from_cents(1299)), "$12.99");
    assert_eq!(format_money(Money::ZERO), "$0.00");
    assert_eq!(format_money(Money::from_cents(5)), "$0.05");
}

#[test]
fn empty_cart_hides_totals_and_checkout() {
    let view = cart_view(&Cart::new());

    assert!(view.lines.is_empty());
    assert_eq!(view.empty_message, Some(EMPTY_CART_MESSAGE));
    assert_eq!(view.totals, None);
    assert!(!view.show_checkout);
}

#[test]
fn cart_lines_show_unit_price_and_line_total() {
    let menu = Menu::from_items(sample_menu());
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 5);

    let view = cart_view(&cart);

    assert!(view.show_checkout);
    assert_eq!(view.empty_message, None);
    assert_eq!(view.lines[0].name, "Coffee");
    assert_eq!(view.lines[0].unit_price, "$3.50 each");
    assert_eq!(view.lines[0].quantity, 2);
    assert_eq!(view.lines[0].line_total, "$7.00");

    let totals = view.totals.expect("totals shown");
    assert_eq!(totals.subtotal, "$19.99");
    assert_eq!(totals.tax, "$1.60");
    assert_eq!(totals.total, "$21.59");
}

#[test]
fn menu_cards_follow_category() {
    let menu = Menu::from_items(sample_menu());

    let desserts = menu_cards(&menu, Category::Desserts);
    assert_eq!(desserts.len(), 1);
    assert_eq!(desserts[0].name, "Chocolate Cake");
    assert_eq!(desserts[0].price, "$6.99");
}

#[test]
fn confirmation_lists_items_and_totals() {
    let mut order = sample_order(42, OrderStatus::Pending);
    order.notes = Some("  ".into());
    let view = confirmation_view(&Confirmation { order_id: 42, order });

    assert_eq!(view.title, "Order #42");
    assert_eq!(view.customer_name, "Customer 42");
    assert_eq!(view.notes, None);
    assert_eq!(view.items, vec![("Coffee x2".to_string(), "$10.00".to_string())]);
    assert_eq!(view.totals.total, "$10.80");
}

#[test]
fn order_cards_carry_details_and_status_options() {
    let mut order = sample_order(7, OrderStatus::Ready);
    order.customer_phone = Some("555-0100".into());
    order.customer_email = Some(" ".into());
    let page = OrdersPage {
        orders: vec![order],
        total: 1,
        pages: 1,
        current_page: 1,
    };

    let cards = order_cards(&page);
    let card = &cards[0];

    assert_eq!(card.title, "Order #7");
    assert_eq!(card.status_label, "Ready");
    assert_eq!(card.placed_at, "2024-03-01 12:30:00");
    assert_eq!(card.total, "$10.80");
    assert_eq!(card.phone.as_deref(), Some("555-0100"));
    assert_eq!(card.email, None);
    assert_eq!(card.items, vec!["Coffee x2".to_string()]);

    let current: Vec<OrderStatus> = card
        .status_options
        .iter()
        .filter(|(_, selected)| *selected)
        .map(|(s, _)| *s)
        .collect();
    assert_eq!(current, vec![OrderStatus::Ready]);
    assert_eq!(card.status_options.len(), 6);
}

#[test]
fn menu_item_cards_offer_enable_or_disable() {
    let mut items = sample_menu();
    items[2].available = false;

    let cards = menu_item_cards(&items);

    assert_eq!(cards[0].toggle_label, "Disable");
    assert_eq!(cards[2].toggle_label, "Enable");
    assert_eq!(cards[2].category, "main course");
    assert_eq!(cards[2].price, "$12.99");
}

#[test]
fn stats_view_formats_revenue_and_popular_items() {
    let stats = AdminStats {
        total_orders: 12,
        pending_orders: 3,
        total_revenue: price(1234.5),
        popular_items: vec![PopularItem {
            name: "Coffee".into(),
            total_ordered: 40,
        }],
    };

    let view = stats_view(&stats);

    assert_eq!(view.total_orders, "12");
    assert_eq!(view.pending_orders, "3");
    assert_eq!(view.total_revenue, "$1234.50");
    assert_eq!(view.popular_items, vec![("Coffee".to_string(), "40 orders".to_string())]);
}

#[test]
fn bill_lists_lines_and_totals() {
    let menu = Menu::from_items(sample_menu());
    let mut cart = Cart::new();
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 1);
    cart.add_item(&menu, 5);
    cart.customer_mut().notes = "no ice".into();

    let bill = bill_text(&cart);
    let lines: Vec<&str> = bill.lines().collect();

    assert_eq!(lines[0], "Order Bill");
    assert_eq!(lines[1], "Customer: Guest");
    assert_eq!(lines[2], "Notes: no ice");
    assert!(lines[4].starts_with("Coffee x2"));
    assert!(lines[4].ends_with("$7.00"));
    assert!(bill.contains("Subtotal"));
    assert!(lines.last().expect("total line").ends_with("$21.59"));
}
