//! Order records and the bodies of the order endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use cart_core::{MenuItemId, Money, Totals};

use crate::endpoints::DEFAULT_PER_PAGE;
use crate::order_status::OrderStatus;

/// One line of a stored order (price is the price at order time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: u32,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub price: Money,
    pub total: Money,
}

/// An order as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: u32,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub items: Vec<OrderItemRecord>,
}

impl OrderRecord {
    /// The server's figures as a [`Totals`] snapshot.
    pub fn totals(&self) -> Totals {
        Totals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    /// Notes, if present and non-blank.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Body of a successful `POST /api/submit-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOrderResponse {
    pub success: bool,
    pub order_id: u32,
    pub order: OrderRecord,
}

/// Body of `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<OrderRecord>,
    /// Total number of matching orders.
    pub total: u32,
    /// Number of pages at the requested page size.
    pub pages: u32,
    pub current_page: u32,
}

/// Query parameters of `GET /api/orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersQuery {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

fn first_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for OrdersQuery {
    fn default() -> Self {
        OrdersQuery {
            page: first_page(),
            per_page: default_per_page(),
            status: None,
        }
    }
}

/// Body of `PUT /api/orders/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Response to a status update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub order: OrderRecord,
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
