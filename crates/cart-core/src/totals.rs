//! Subtotal / tax / total snapshot for a set of line items.
//!
//! This mirrors what the API computes on submission so the client can
//! show the figures before the server confirms them:
//! - subtotal = Σ unit_price × quantity
//! - tax      = subtotal × tax rate
//! - total    = subtotal + tax
//!
//! Tax is carried exactly and only rounded (half-up, to cents) when the
//! snapshot is built, so doubling every quantity doubles both subtotal
//! and tax.

use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;
use crate::money::{round_scaled, Money, TaxRate, SCALE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    /// Compute totals for `items` at the given rate.
    pub fn compute<'a>(items: impl IntoIterator<Item = &'a LineItem>, rate: TaxRate) -> Self {
        let subtotal: Money = items.into_iter().map(LineItem::line_total).sum();

        let scaled_tax = rate.scaled_tax_on(subtotal);
        let scaled_total = subtotal.cents() as u128 * SCALE + scaled_tax;

        Totals {
            subtotal,
            tax: round_scaled(scaled_tax),
            total: round_scaled(scaled_total),
        }
    }

    /// Returns `true` if all three figures are zero.
    pub fn is_zero(&self) -> bool {
        self.subtotal.is_zero() && self.tax.is_zero() && self.total.is_zero()
    }
}
