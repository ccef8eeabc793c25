//! Data -> view-model mapping.
//!
//! Everything here is pure: the widgets in the binary only ever see the
//! structs below, never the cart or the wire types directly.

use cart_core::{Cart, Category, Menu, MenuItem, MenuItemId, Money, Totals, DEFAULT_CUSTOMER_NAME};
use cart_protocol::{AdminStats, OrderRecord, OrderStatus, OrdersPage};

use crate::ordering::Confirmation;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your order! We'll have it ready soon.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `$12.99`
pub fn format_money(amount: Money) -> String {
    format!("${amount}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl From<Totals> for TotalsView {
    fn from(totals: Totals) -> Self {
        TotalsView {
            subtotal: format_money(totals.subtotal),
            tax: format_money(totals.tax),
            total: format_money(totals.total),
        }
    }
}

// -----------------------------------------------------------------------------
// Ordering
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCard {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: String,
}

pub fn menu_cards(menu: &Menu, category: Category) -> Vec<MenuCard> {
    menu.items_in(category)
        .iter()
        .map(|item| MenuCard {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_money(item.price),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: MenuItemId,
    pub name: String,
    /// `$10.00 each`
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Set only when the cart is empty.
    pub empty_message: Option<&'static str>,
    /// Hidden (`None`) while the cart is empty.
    pub totals: Option<TotalsView>,
    pub show_checkout: bool,
}

pub fn cart_view(cart: &Cart) -> CartView {
    if cart.is_empty() {
        return CartView {
            lines: Vec::new(),
            empty_message: Some(EMPTY_CART_MESSAGE),
            totals: None,
            show_checkout: false,
        };
    }

    let lines = cart
        .iter()
        .map(|line| CartLineView {
            id: line.id,
            name: line.name.clone(),
            unit_price: format!("{} each", format_money(line.unit_price)),
            quantity: line.quantity,
            line_total: format_money(line.line_total()),
        })
        .collect();

    CartView {
        lines,
        empty_message: None,
        totals: Some(cart.compute_totals().into()),
        show_checkout: true,
    }
}

/// Plain-text bill of the current cart.
pub fn bill_text(cart: &Cart) -> String {
    let customer = cart.customer();
    let name = match customer.name.trim() {
        "" => DEFAULT_CUSTOMER_NAME,
        name => name,
    };
    let rule = "-".repeat(40);

    let mut out = String::from("Order Bill\n");
    out.push_str(&format!("Customer: {name}\n"));
    if !customer.notes.trim().is_empty() {
        out.push_str(&format!("Notes: {}\n", customer.notes.trim()));
    }
    out.push_str(&rule);
    out.push('\n');
    for line in cart.iter() {
        let item = format!("{} x{}", line.name, line.quantity);
        out.push_str(&format!("{item:<28}{:>12}\n", format_money(line.line_total())));
    }
    out.push_str(&rule);
    out.push('\n');

    let totals = TotalsView::from(cart.compute_totals());
    out.push_str(&format!("{:<28}{:>12}\n", "Subtotal", totals.subtotal));
    out.push_str(&format!("{:<28}{:>12}\n", "Tax", totals.tax));
    out.push_str(&format!("{:<28}{:>12}\n", "Total", totals.total));
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// `Order #42`
    pub title: String,
    pub customer_name: String,
    pub notes: Option<String>,
    /// `Burger x2` / `$25.98`
    pub items: Vec<(String, String)>,
    pub totals: TotalsView,
    pub message: &'static str,
}

pub fn confirmation_view(confirmation: &Confirmation) -> ConfirmationView {
    let order = &confirmation.order;
    ConfirmationView {
        title: format!("Order #{}", confirmation.order_id),
        customer_name: order.customer_name.clone(),
        notes: order.notes().map(str::to_string),
        items: order
            .items
            .iter()
            .map(|item| (format!("{} x{}", item.name, item.quantity), format_money(item.total)))
            .collect(),
        totals: order.totals().into(),
        message: THANK_YOU_MESSAGE,
    }
}

// -----------------------------------------------------------------------------
// Admin
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    pub id: u32,
    /// `Order #7`
    pub title: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub customer_name: String,
    pub placed_at: String,
    pub total: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    /// `Burger x2`
    pub items: Vec<String>,
    /// Every status, with the current one flagged.
    pub status_options: Vec<(OrderStatus, bool)>,
}

pub fn order_card(order: &OrderRecord) -> OrderCard {
    OrderCard {
        id: order.id,
        title: format!("Order #{}", order.id),
        status: order.status,
        status_label: order.status.label(),
        customer_name: order.customer_name.clone(),
        placed_at: order.created_at.format(TIMESTAMP_FORMAT).to_string(),
        total: format_money(order.total),
        email: non_blank(order.customer_email.as_deref()),
        phone: non_blank(order.customer_phone.as_deref()),
        notes: order.notes().map(str::to_string),
        items: order
            .items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect(),
        status_options: OrderStatus::ALL
            .iter()
            .map(|s| (*s, *s == order.status))
            .collect(),
    }
}

pub fn order_cards(page: &OrdersPage) -> Vec<OrderCard> {
    page.orders.iter().map(order_card).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemCard {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub available: bool,
    /// `Disable` for available items, `Enable` otherwise.
    pub toggle_label: &'static str,
}

pub fn menu_item_cards(items: &[MenuItem]) -> Vec<MenuItemCard> {
    items
        .iter()
        .map(|item| MenuItemCard {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: format_money(item.price),
            category: item.category.label(),
            available: item.available,
            toggle_label: if item.available { "Disable" } else { "Enable" },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total_orders: String,
    pub pending_orders: String,
    pub total_revenue: String,
    /// `(name, "12 orders")`
    pub popular_items: Vec<(String, String)>,
}

pub fn stats_view(stats: &AdminStats) -> StatsView {
    StatsView {
        total_orders: stats.total_orders.to_string(),
        pending_orders: stats.pending_orders.to_string(),
        total_revenue: format_money(stats.total_revenue),
        popular_items: stats
            .popular_items
            .iter()
            .map(|p| (p.name.clone(), format!("{} orders", p.total_ordered)))
            .collect(),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
