//! Endpoint paths.
//!
//! All paths are relative to the API base URL and start with `/api`.

use cart_core::MenuItemId;

use crate::orders::OrdersQuery;

/// `GET`: available items grouped by category.
pub const MENU: &str = "/api/menu";

/// `POST`: submit an order.
pub const SUBMIT_ORDER: &str = "/api/submit-order";

/// `GET`: paginated order list.
pub const ORDERS: &str = "/api/orders";

/// `GET` (all items, including unavailable) / `POST` (create).
pub const ADMIN_MENU: &str = "/api/admin/menu";

/// `GET`: dashboard statistics.
pub const ADMIN_STATS: &str = "/api/admin/stats";

/// Default page size the admin order list asks for.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// `GET /api/menu/{id}`
pub fn menu_item(id: MenuItemId) -> String {
    format!("{MENU}/{id}")
}

/// `GET /api/orders/{id}`
pub fn order(id: u32) -> String {
    format!("{ORDERS}/{id}")
}

/// `PUT /api/orders/{id}/status`
pub fn order_status(id: u32) -> String {
    format!("{ORDERS}/{id}/status")
}

/// `PUT` / `DELETE /api/admin/menu/{id}`
pub fn admin_menu_item(id: MenuItemId) -> String {
    format!("{ADMIN_MENU}/{id}")
}

/// `GET /api/orders?page=..&per_page=..[&status=..]`
pub fn orders_with_query(query: &OrdersQuery) -> String {
    let mut path = format!("{ORDERS}?page={}&per_page={}", query.page, query.per_page);
    if let Some(status) = query.status {
        path.push_str("&status=");
        path.push_str(status.as_str());
    }
    path
}
