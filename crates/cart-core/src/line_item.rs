//! A single line of the cart.
//!
//! The unit price is captured when the item is first added; later menu
//! changes do not reprice lines already in the cart.

use serde::{Deserialize, Serialize};

use crate::menu::{MenuItem, MenuItemId};
use crate::money::Money;

/// One menu item plus quantity.
///
/// Serializes as `{id, name, price, quantity}`, the item shape
/// `POST /api/submit-order` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Money,
    pub quantity: u32,
}

impl LineItem {
    /// New line with quantity 1.
    pub fn from_menu_item(item: &MenuItem) -> Self {
        LineItem {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Apply a signed quantity change.
    ///
    /// Returns the resulting quantity, or `None` if it would drop to zero
    /// or below (in which case the line must be removed, and `self` is
    /// left untouched).
    pub fn apply_delta(&mut self, delta: i64) -> Option<u32> {
        let next = self.quantity as i64 + delta;
        if next <= 0 {
            return None;
        }
        self.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(self.quantity)
    }
}
