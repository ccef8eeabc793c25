//! cart-core
//!
//! Pure ordering-cart logic:
//! - money amounts (integer cents) and the tax rate
//! - menu categories and menu items
//! - line items and the per-session cart
//! - totals and the order submission payload

pub mod money;
pub mod category;
pub mod menu;
pub mod line_item;
pub mod cart;
pub mod totals;
pub mod submission;
pub mod error;

pub use money::{Money, TaxRate, TAX_RATE};
pub use category::Category;
pub use menu::{Menu, MenuItem, MenuItemId};
pub use line_item::LineItem;
pub use cart::{Cart, CustomerDetails};
pub use totals::Totals;
pub use submission::{OrderSubmission, DEFAULT_CUSTOMER_NAME};
pub use error::CartError;
