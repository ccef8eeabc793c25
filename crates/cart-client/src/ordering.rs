//! Customer ordering view-controller.
//!
//! `OrderingSession` owns the session's [`Cart`] together with the loaded
//! menu and the small amount of view state around it (current category,
//! selections, the confirmation being shown, the last notice).
//!
//! All mutation happens from one UI task. Network calls are awaited in
//! place and their result is applied when they resolve; there is no
//! cancellation, so a late response is applied unconditionally.

use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use cart_core::{Cart, Category, CustomerDetails, LineItem, Menu, MenuItem, MenuItemId, Totals};
use cart_protocol::OrderRecord;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::notice::Notice;
use crate::view_model::bill_text;

const MENU_LOAD_FAILED: &str = "Failed to load menu. Please refresh the page.";
const SUBMIT_FAILED: &str = "Failed to submit order. Please try again.";

/// An order the API has acknowledged.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub order_id: u32,
    pub order: OrderRecord,
}

#[derive(Debug, Default)]
pub struct OrderingSession {
    cart: Cart,
    menu: Menu,

    current_category: Category,
    selected_menu_index: usize,
    selected_line_index: usize,

    confirmation: Option<Confirmation>,
    notice: Option<Notice>,
}

impl OrderingSession {
    pub fn new() -> Self {
        OrderingSession::default()
    }

    /// Session around an existing cart (e.g. one with a non-standard tax rate).
    pub fn with_cart(cart: Cart) -> Self {
        OrderingSession {
            cart,
            ..OrderingSession::default()
        }
    }

    // -------------------------------------------------------------------------
    // Menu
    // -------------------------------------------------------------------------

    /// Fetch the menu. On failure the previous menu is kept and an error
    /// notice is shown.
    pub async fn load_menu(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        match api.fetch_menu().await {
            Ok(menu) => {
                self.set_menu(menu);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "error loading menu");
                self.notice = Some(Notice::error(MENU_LOAD_FAILED));
                Err(e)
            }
        }
    }

    pub fn set_menu(&mut self, menu: Menu) {
        self.menu = menu;
        self.clamp_selections();
    }

    pub fn switch_category(&mut self, category: Category) {
        self.current_category = category;
        self.selected_menu_index = 0;
    }

    pub fn next_category(&mut self) {
        self.switch_category(self.current_category.next());
    }

    pub fn prev_category(&mut self) {
        self.switch_category(self.current_category.prev());
    }

    /// Items of the current category, in menu order.
    pub fn visible_items(&self) -> &[MenuItem] {
        self.menu.items_in(self.current_category)
    }

    pub fn select_next_menu_item(&mut self) {
        if self.selected_menu_index + 1 < self.visible_items().len() {
            self.selected_menu_index += 1;
        }
    }

    pub fn select_prev_menu_item(&mut self) {
        self.selected_menu_index = self.selected_menu_index.saturating_sub(1);
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Add one unit of `id`; unknown ids are ignored.
    pub fn add_item(&mut self, id: MenuItemId) -> bool {
        self.cart.add_item(&self.menu, id)
    }

    /// Add the highlighted menu item.
    pub fn add_selected(&mut self) -> bool {
        match self.visible_items().get(self.selected_menu_index).map(|i| i.id) {
            Some(id) => self.add_item(id),
            None => false,
        }
    }

    pub fn update_quantity(&mut self, id: MenuItemId, delta: i64) -> Option<u32> {
        let quantity = self.cart.update_quantity(id, delta);
        self.clamp_selections();
        quantity
    }

    pub fn remove_item(&mut self, id: MenuItemId) -> Option<LineItem> {
        let removed = self.cart.remove_item(id);
        self.clamp_selections();
        removed
    }

    pub fn select_next_line(&mut self) {
        if self.selected_line_index + 1 < self.cart.len() {
            self.selected_line_index += 1;
        }
    }

    pub fn select_prev_line(&mut self) {
        self.selected_line_index = self.selected_line_index.saturating_sub(1);
    }

    pub fn increment_selected(&mut self) {
        if let Some(id) = self.selected_line_id() {
            self.update_quantity(id, 1);
        }
    }

    pub fn decrement_selected(&mut self) {
        if let Some(id) = self.selected_line_id() {
            self.update_quantity(id, -1);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_line_id() {
            self.remove_item(id);
        }
    }

    pub fn totals(&self) -> Totals {
        self.cart.compute_totals()
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submit the cart.
    ///
    /// - Empty cart: rejected before any request, with an error notice.
    /// - Success: the confirmation is stored and the cart (customer fields
    ///   included) is cleared.
    /// - Failure: a generic notice is shown and the cart is kept as-is.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<u32, ClientError> {
        let submission = match self.cart.checkout() {
            Ok(submission) => submission,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };
        let local_totals = self.cart.compute_totals();

        match api.submit_order(&submission).await {
            Ok(resp) => {
                if resp.order.totals() != local_totals {
                    warn!(
                        order_id = resp.order_id,
                        local_total = %local_totals.total,
                        server_total = %resp.order.total,
                        "server totals differ from cart totals"
                    );
                }
                info!(order_id = resp.order_id, "order confirmed");
                self.confirmation = Some(Confirmation {
                    order_id: resp.order_id,
                    order: resp.order,
                });
                self.cart.clear();
                self.notice = None;
                self.clamp_selections();
                Ok(resp.order_id)
            }
            Err(e) => {
                error!(error = %e, "error submitting order");
                self.notice = Some(Notice::error(SUBMIT_FAILED));
                Err(e)
            }
        }
    }

    /// Explicit "new order": empty the cart, reset customer fields, close
    /// the confirmation.
    pub fn start_new_order(&mut self) {
        self.cart.clear();
        self.confirmation = None;
        self.notice = None;
        self.clamp_selections();
    }

    pub fn close_confirmation(&mut self) {
        self.confirmation = None;
    }

    /// Write the current cart as a plain-text bill to `path`.
    pub fn print_bill(&mut self, path: &Path) -> Result<(), ClientError> {
        if let Err(e) = self.cart.checkout() {
            self.notice = Some(Notice::error(e.to_string()));
            return Err(e.into());
        }
        match fs::write(path, bill_text(&self.cart)) {
            Ok(()) => {
                info!(path = %path.display(), "bill written");
                self.notice = Some(Notice::success(format!("Bill saved to {}", path.display())));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "error writing bill");
                self.notice = Some(Notice::error("Failed to print bill"));
                Err(e.into())
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer_mut(&mut self) -> &mut CustomerDetails {
        self.cart.customer_mut()
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn current_category(&self) -> Category {
        self.current_category
    }

    pub fn selected_menu_index(&self) -> usize {
        self.selected_menu_index
    }

    pub fn selected_line_index(&self) -> usize {
        self.selected_line_index
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn selected_line_id(&self) -> Option<MenuItemId> {
        self.cart.get_index(self.selected_line_index).map(|l| l.id)
    }

    fn clamp_selections(&mut self) {
        let visible = self.visible_items().len();
        self.selected_menu_index = self.selected_menu_index.min(visible.saturating_sub(1));
        self.selected_line_index = self.selected_line_index.min(self.cart.len().saturating_sub(1));
    }
}
