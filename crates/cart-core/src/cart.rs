//! The per-session order cart.
//!
//! - One [`LineItem`] per menu item id, in the order items were first added.
//! - Quantities never sit at zero: a change that would take a line to
//!   zero or below removes it instead.
//! - Unknown ids are silent no-ops for every mutation.
//! - The cart also holds the customer fields that travel with the order,
//!   so that [`Cart::clear`] resets everything a "new order" resets.

use indexmap::IndexMap;

use crate::error::CartError;
use crate::line_item::LineItem;
use crate::menu::{Menu, MenuItemId};
use crate::money::{TaxRate, TAX_RATE};
use crate::submission::OrderSubmission;
use crate::totals::Totals;

/// Free-text customer fields entered alongside the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub notes: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct Cart {
    /// Menu item id -> line, insertion ordered.
    lines: IndexMap<MenuItemId, LineItem>,

    customer: CustomerDetails,

    tax_rate: TaxRate,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Create an empty cart at the standard tax rate.
    pub fn new() -> Self {
        Cart::with_tax_rate(TAX_RATE)
    }

    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        Cart {
            lines: IndexMap::new(),
            customer: CustomerDetails::default(),
            tax_rate,
        }
    }

    /// Add one unit of a menu item.
    ///
    /// Looks the id up across every category of `menu`. If the cart
    /// already has a line for it, its quantity goes up by one; otherwise a
    /// new line (quantity 1, price captured now) is appended.
    ///
    /// Returns `false` (and changes nothing) if the id is not on the menu.
    pub fn add_item(&mut self, menu: &Menu, id: MenuItemId) -> bool {
        let Some(menu_item) = menu.find(id) else {
            return false;
        };

        match self.lines.get_mut(&id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
            }
            None => {
                self.lines.insert(id, LineItem::from_menu_item(menu_item));
            }
        }
        true
    }

    /// Add `delta` to a line's quantity, removing the line if the result
    /// is zero or below. No-op for an id not in the cart.
    ///
    /// Returns the new quantity, or `None` if the line is gone (or was
    /// never there).
    pub fn update_quantity(&mut self, id: MenuItemId, delta: i64) -> Option<u32> {
        let line = self.lines.get_mut(&id)?;
        match line.apply_delta(delta) {
            Some(quantity) => Some(quantity),
            None => {
                self.remove_item(id);
                None
            }
        }
    }

    /// Remove a line, keeping the order of the others.
    pub fn remove_item(&mut self, id: MenuItemId) -> Option<LineItem> {
        self.lines.shift_remove(&id)
    }

    /// Subtotal, tax and total, each rounded to cents.
    pub fn compute_totals(&self) -> Totals {
        Totals::compute(self.lines.values(), self.tax_rate)
    }

    /// Build the submission payload from explicit name / notes.
    ///
    /// A blank name becomes `"Guest"`; notes are trimmed.
    pub fn to_submission(&self, customer_name: &str, notes: &str) -> OrderSubmission {
        OrderSubmission::new(self.items(), customer_name, notes)
    }

    /// Build the submission payload from the stored customer fields.
    pub fn submission(&self) -> OrderSubmission {
        self.to_submission(&self.customer.name, &self.customer.notes)
            .with_contact(&self.customer.email, &self.customer.phone)
    }

    /// Like [`Cart::submission`], but refuses an empty cart.
    pub fn checkout(&self) -> Result<OrderSubmission, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(self.submission())
    }

    /// Empty the cart and reset the customer fields.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.customer = CustomerDetails::default();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Snapshot of the lines, in cart order.
    pub fn items(&self) -> Vec<LineItem> {
        self.lines.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.values()
    }

    pub fn get(&self, id: MenuItemId) -> Option<&LineItem> {
        self.lines.get(&id)
    }

    pub fn contains(&self, id: MenuItemId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Line at a display position.
    pub fn get_index(&self, index: usize) -> Option<&LineItem> {
        self.lines.get_index(index).map(|(_, line)| line)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.values().map(|l| l.quantity as u64).sum()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut CustomerDetails {
        &mut self.customer
    }
}
