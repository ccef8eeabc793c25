//! Admin dashboard controller.
//!
//! Three sections, each backed by one or two endpoints:
//! - Dashboard : `GET /api/admin/stats`
//! - Orders    : `GET /api/orders` (paged, optional status filter) and
//!               `PUT /api/orders/{id}/status`
//! - Menu      : `GET/POST/PUT/DELETE /api/admin/menu[/{id}]`
//!
//! Failures are logged and turned into a generic notice; the previously
//! loaded data stays on screen.

use tracing::{error, info};

use cart_core::{MenuItem, MenuItemId};
use cart_protocol::{AdminStats, MenuItemPatch, OrderRecord, OrderStatus, OrdersPage, OrdersQuery};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::menu_form::MenuItemForm;
use crate::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Orders,
    Menu,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Orders, Section::Menu];

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Orders => "Orders",
            Section::Menu => "Menu",
        }
    }
}

#[derive(Debug)]
pub struct AdminDashboard {
    section: Section,

    // Order list paging / filtering
    current_page: u32,
    per_page: u32,
    status_filter: Option<OrderStatus>,

    // Last loaded data
    stats: Option<AdminStats>,
    orders: Option<OrdersPage>,
    menu_items: Vec<MenuItem>,

    // Selection state
    selected_order_index: usize,
    selected_item_index: usize,

    notice: Option<Notice>,
}

impl AdminDashboard {
    pub fn new(per_page: u32) -> Self {
        AdminDashboard {
            section: Section::Dashboard,
            current_page: 1,
            per_page: per_page.max(1),
            status_filter: None,
            stats: None,
            orders: None,
            menu_items: Vec::new(),
            selected_order_index: 0,
            selected_item_index: 0,
            notice: None,
        }
    }

    /// Switch section and load its data.
    pub async fn switch_section(&mut self, section: Section, api: &ApiClient) {
        self.section = section;
        self.refresh(api).await;
    }

    /// Reload whatever the current section shows.
    pub async fn refresh(&mut self, api: &ApiClient) {
        // Errors are already reported through the notice.
        let _ = match self.section {
            Section::Dashboard => self.load_dashboard(api).await,
            Section::Orders => self.load_orders(api).await,
            Section::Menu => self.load_menu_items(api).await,
        };
    }

    // -------------------------------------------------------------------------
    // Dashboard
    // -------------------------------------------------------------------------

    pub async fn load_dashboard(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        match api.fetch_stats().await {
            Ok(stats) => {
                self.stats = Some(stats);
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load dashboard data", "error loading dashboard", e)),
        }
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    pub fn orders_query(&self) -> OrdersQuery {
        OrdersQuery {
            page: self.current_page,
            per_page: self.per_page,
            status: self.status_filter,
        }
    }

    pub async fn load_orders(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        let query = self.orders_query();
        match api.list_orders(&query).await {
            Ok(page) => {
                info!(page = query.page, orders = page.orders.len(), "orders loaded");
                self.selected_order_index = self
                    .selected_order_index
                    .min(page.orders.len().saturating_sub(1));
                self.orders = Some(page);
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load orders", "error loading orders", e)),
        }
    }

    /// Change the status filter; always goes back to page 1.
    pub async fn set_status_filter(
        &mut self,
        filter: Option<OrderStatus>,
        api: &ApiClient,
    ) -> Result<(), ClientError> {
        self.status_filter = filter;
        self.current_page = 1;
        self.selected_order_index = 0;
        self.load_orders(api).await
    }

    /// All → pending → ... → cancelled → All.
    pub async fn cycle_status_filter(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        let next = next_filter(self.status_filter);
        self.set_status_filter(next, api).await
    }

    pub async fn change_page(&mut self, page: u32, api: &ApiClient) -> Result<(), ClientError> {
        self.current_page = page.max(1);
        self.selected_order_index = 0;
        self.load_orders(api).await
    }

    pub async fn next_page(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        if self.current_page >= self.total_pages() {
            return Ok(());
        }
        self.change_page(self.current_page + 1, api).await
    }

    pub async fn prev_page(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        if self.current_page <= 1 {
            return Ok(());
        }
        self.change_page(self.current_page - 1, api).await
    }

    /// Set an order's status, then refresh the section on screen.
    pub async fn update_order_status(
        &mut self,
        order_id: u32,
        status: OrderStatus,
        api: &ApiClient,
    ) -> Result<(), ClientError> {
        match api.update_order_status(order_id, status).await {
            Ok(order) => {
                info!(order_id, status = %order.status, "order status updated");
                self.notice = Some(Notice::success("Order status updated successfully"));
                match self.section {
                    Section::Orders => self.load_orders(api).await,
                    Section::Dashboard => self.load_dashboard(api).await,
                    Section::Menu => Ok(()),
                }
            }
            Err(e) => Err(self.fail(
                "Failed to update order status",
                "error updating order status",
                e,
            )),
        }
    }

    /// Move the highlighted order's status one step forward (or back).
    pub async fn step_selected_status(
        &mut self,
        forward: bool,
        api: &ApiClient,
    ) -> Result<(), ClientError> {
        let Some(order) = self.selected_order() else {
            return Ok(());
        };
        let (id, current) = (order.id, order.status);
        let status = if forward { current.next() } else { current.prev() };
        self.update_order_status(id, status, api).await
    }

    // -------------------------------------------------------------------------
    // Menu management
    // -------------------------------------------------------------------------

    pub async fn load_menu_items(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        match api.admin_menu().await {
            Ok(items) => {
                self.selected_item_index = self.selected_item_index.min(items.len().saturating_sub(1));
                self.menu_items = items;
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to load menu items", "error loading menu items", e)),
        }
    }

    /// Fetch an item fresh from the API and open it in an edit form.
    pub async fn edit_menu_item(
        &mut self,
        id: MenuItemId,
        api: &ApiClient,
    ) -> Result<MenuItemForm, ClientError> {
        match api.fetch_menu_item(id).await {
            Ok(item) => Ok(MenuItemForm::edit(&item)),
            Err(e) => Err(self.fail("Failed to load menu item", "error loading menu item", e)),
        }
    }

    /// Create (form without id) or update (form with id), then reload.
    pub async fn save_menu_item(
        &mut self,
        form: &MenuItemForm,
        api: &ApiClient,
    ) -> Result<(), ClientError> {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.notice = Some(Notice::error(format!("Failed to save menu item: {e}")));
                return Err(e);
            }
        };

        let result = match form.id {
            Some(id) => api.update_menu_item(id, &draft.into_patch()).await,
            None => api.create_menu_item(&draft).await,
        };

        match result {
            Ok(item) => {
                let verb = if form.id.is_some() { "updated" } else { "added" };
                info!(id = item.id, name = %item.name, "menu item {verb}");
                self.notice = Some(Notice::success(format!("Menu item {verb} successfully")));
                self.load_menu_items(api).await
            }
            Err(e) => Err(self.fail("Failed to save menu item", "error saving menu item", e)),
        }
    }

    pub async fn delete_menu_item(
        &mut self,
        id: MenuItemId,
        api: &ApiClient,
    ) -> Result<(), ClientError> {
        match api.delete_menu_item(id).await {
            Ok(()) => {
                info!(id, "menu item deleted");
                self.notice = Some(Notice::success("Menu item deleted successfully"));
                self.load_menu_items(api).await
            }
            Err(e) => Err(self.fail("Failed to delete menu item", "error deleting menu item", e)),
        }
    }

    /// Flip an item's availability, then reload.
    pub async fn toggle_availability(
        &mut self,
        id: MenuItemId,
        api: &ApiClient,
    ) -> Result<(), ClientError> {
        let available = !self
            .menu_items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.available)
            .unwrap_or(false);

        match api.update_menu_item(id, &MenuItemPatch::availability(available)).await {
            Ok(_) => {
                let verb = if available { "enabled" } else { "disabled" };
                self.notice = Some(Notice::success(format!("Menu item {verb} successfully")));
                self.load_menu_items(api).await
            }
            Err(e) => Err(self.fail("Failed to update menu item", "error updating menu item", e)),
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn select_next(&mut self) {
        match self.section {
            Section::Orders => {
                let len = self.orders.as_ref().map(|p| p.orders.len()).unwrap_or(0);
                if self.selected_order_index + 1 < len {
                    self.selected_order_index += 1;
                }
            }
            Section::Menu => {
                if self.selected_item_index + 1 < self.menu_items.len() {
                    self.selected_item_index += 1;
                }
            }
            Section::Dashboard => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.section {
            Section::Orders => {
                self.selected_order_index = self.selected_order_index.saturating_sub(1);
            }
            Section::Menu => {
                self.selected_item_index = self.selected_item_index.saturating_sub(1);
            }
            Section::Dashboard => {}
        }
    }

    pub fn selected_order(&self) -> Option<&OrderRecord> {
        self.orders
            .as_ref()
            .and_then(|p| p.orders.get(self.selected_order_index))
    }

    pub fn selected_menu_item(&self) -> Option<&MenuItem> {
        self.menu_items.get(self.selected_item_index)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Page count from the last load (1 before anything is loaded).
    pub fn total_pages(&self) -> u32 {
        self.orders.as_ref().map(|p| p.pages.max(1)).unwrap_or(1)
    }

    pub fn status_filter(&self) -> Option<OrderStatus> {
        self.status_filter
    }

    pub fn stats(&self) -> Option<&AdminStats> {
        self.stats.as_ref()
    }

    pub fn orders(&self) -> Option<&OrdersPage> {
        self.orders.as_ref()
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn selected_order_index(&self) -> usize {
        self.selected_order_index
    }

    pub fn selected_item_index(&self) -> usize {
        self.selected_item_index
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn fail(&mut self, message: &str, context: &str, e: ClientError) -> ClientError {
        error!(error = %e, "{context}");
        self.notice = Some(Notice::error(message));
        e
    }
}

fn next_filter(current: Option<OrderStatus>) -> Option<OrderStatus> {
    match current {
        None => Some(OrderStatus::ALL[0]),
        Some(OrderStatus::Cancelled) => None,
        Some(status) => Some(status.next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_cycles_through_all_and_back_to_none() {
        let mut filter = None;
        let mut seen = Vec::new();
        for _ in 0..7 {
            filter = next_filter(filter);
            seen.push(filter);
        }
        assert_eq!(seen.first(), Some(&Some(OrderStatus::Pending)));
        assert_eq!(seen[5], Some(OrderStatus::Cancelled));
        assert_eq!(seen[6], None);
    }

    #[test]
    fn new_dashboard_starts_on_page_one() {
        let dash = AdminDashboard::new(0);
        assert_eq!(dash.current_page(), 1);
        assert_eq!(dash.per_page(), 1);
        assert_eq!(dash.total_pages(), 1);
        assert_eq!(dash.section(), Section::Dashboard);
        assert_eq!(dash.orders_query().status, None);
    }
}
