// crates/cart-client/src/app.rs

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use cart_client::{
    AdminDashboard, ApiClient, MenuItemForm, Notice, OrderingSession, Section,
};
use cart_core::MenuItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Order,
    Admin,
}

/// Customer detail being typed into the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Notes,
    Email,
    Phone,
}

impl CustomerField {
    pub fn label(self) -> &'static str {
        match self {
            CustomerField::Name => "Name",
            CustomerField::Notes => "Special instructions",
            CustomerField::Email => "Email",
            CustomerField::Phone => "Phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing(CustomerField),
    Form,
}

pub struct App {
    pub api: ApiClient,
    pub view: View,

    // UI state
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub should_quit: bool,
    pub show_help: bool,

    // Controllers
    pub ordering: OrderingSession,
    pub admin: AdminDashboard,

    // Admin overlays
    pub form: Option<MenuItemForm>,
    pub pending_delete: Option<MenuItemId>,

    pub bill_file: PathBuf,
}

impl App {
    pub fn new(api: ApiClient, view: View, orders_per_page: u32, bill_file: PathBuf) -> Self {
        Self {
            api,
            view,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            should_quit: false,
            show_help: false,
            ordering: OrderingSession::new(),
            admin: AdminDashboard::new(orders_per_page),
            form: None,
            pending_delete: None,
            bill_file,
        }
    }

    /// Initial load for the selected view.
    pub async fn start(&mut self) {
        info!(view = ?self.view, api = %self.api.base_url(), "starting");
        match self.view {
            View::Order => {
                // Failure is shown as a notice.
                let _ = self.ordering.load_menu(&self.api).await;
            }
            View::Admin => self.admin.switch_section(Section::Dashboard, &self.api).await,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self.view {
            View::Order => self.ordering.notice(),
            View::Admin => self.admin.notice(),
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Editing(field) => self.handle_editing_key(field, key),
            InputMode::Form => self.handle_form_key(key).await,
            InputMode::Normal => {
                if self.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                        self.show_help = false;
                    }
                    return;
                }
                match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::F(1) | KeyCode::Char('?') => self.show_help = true,
                    _ => match self.view {
                        View::Order => self.handle_order_key(key).await,
                        View::Admin => self.handle_admin_key(key).await,
                    },
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Ordering view
    // -------------------------------------------------------------------------

    async fn handle_order_key(&mut self, key: KeyEvent) {
        if self.ordering.confirmation().is_some() {
            match key.code {
                KeyCode::Char('N') | KeyCode::Char('n') => self.ordering.start_new_order(),
                KeyCode::Enter | KeyCode::Esc => self.ordering.close_confirmation(),
                _ => {}
            }
            return;
        }

        match key.code {
            // Menu
            KeyCode::Tab | KeyCode::Right => self.ordering.next_category(),
            KeyCode::BackTab | KeyCode::Left => self.ordering.prev_category(),
            KeyCode::Up | KeyCode::Char('k') => self.ordering.select_prev_menu_item(),
            KeyCode::Down | KeyCode::Char('j') => self.ordering.select_next_menu_item(),
            KeyCode::Enter | KeyCode::Char('a') => {
                self.ordering.add_selected();
            }
            KeyCode::Char('r') => {
                let _ = self.ordering.load_menu(&self.api).await;
            }

            // Cart
            KeyCode::Char('[') => self.ordering.select_prev_line(),
            KeyCode::Char(']') => self.ordering.select_next_line(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.ordering.increment_selected(),
            KeyCode::Char('-') => self.ordering.decrement_selected(),
            KeyCode::Char('x') | KeyCode::Delete => self.ordering.remove_selected(),

            // Customer details
            KeyCode::Char('n') => self.start_editing(CustomerField::Name),
            KeyCode::Char('o') => self.start_editing(CustomerField::Notes),
            KeyCode::Char('e') => self.start_editing(CustomerField::Email),
            KeyCode::Char('p') => self.start_editing(CustomerField::Phone),

            // Checkout
            KeyCode::Char('s') => {
                if let Ok(order_id) = self.ordering.submit(&self.api).await {
                    debug!(order_id, "confirmation shown");
                }
            }
            KeyCode::Char('b') => {
                let _ = self.ordering.print_bill(&self.bill_file);
            }
            KeyCode::Char('N') => self.ordering.start_new_order(),
            KeyCode::Esc => self.ordering.dismiss_notice(),
            _ => {}
        }
    }

    fn start_editing(&mut self, field: CustomerField) {
        let customer = self.ordering.cart().customer();
        self.input_buffer = match field {
            CustomerField::Name => customer.name.clone(),
            CustomerField::Notes => customer.notes.clone(),
            CustomerField::Email => customer.email.clone(),
            CustomerField::Phone => customer.phone.clone(),
        };
        self.input_mode = InputMode::Editing(field);
    }

    fn handle_editing_key(&mut self, field: CustomerField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let value = std::mem::take(&mut self.input_buffer);
                let customer = self.ordering.customer_mut();
                match field {
                    CustomerField::Name => customer.name = value,
                    CustomerField::Notes => customer.notes = value,
                    CustomerField::Email => customer.email = value,
                    CustomerField::Phone => customer.phone = value,
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Admin view
    // -------------------------------------------------------------------------

    async fn handle_admin_key(&mut self, key: KeyEvent) {
        if let Some(id) = self.pending_delete.take() {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                let _ = self.admin.delete_menu_item(id, &self.api).await;
            }
            return;
        }

        match key.code {
            KeyCode::Char('1') => self.admin.switch_section(Section::Dashboard, &self.api).await,
            KeyCode::Char('2') => self.admin.switch_section(Section::Orders, &self.api).await,
            KeyCode::Char('3') => self.admin.switch_section(Section::Menu, &self.api).await,
            KeyCode::Char('r') => self.admin.refresh(&self.api).await,
            KeyCode::Up | KeyCode::Char('k') => self.admin.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.admin.select_next(),
            KeyCode::Esc => self.admin.dismiss_notice(),
            _ => match self.admin.section() {
                Section::Orders => self.handle_orders_key(key).await,
                Section::Menu => self.handle_menu_admin_key(key).await,
                Section::Dashboard => {}
            },
        }
    }

    async fn handle_orders_key(&mut self, key: KeyEvent) {
        // Failures are reported through the dashboard notice.
        let _ = match key.code {
            KeyCode::Char('f') => self.admin.cycle_status_filter(&self.api).await,
            KeyCode::Right | KeyCode::Char('l') => self.admin.next_page(&self.api).await,
            KeyCode::Left | KeyCode::Char('h') => self.admin.prev_page(&self.api).await,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.admin.step_selected_status(true, &self.api).await
            }
            KeyCode::Char('-') => self.admin.step_selected_status(false, &self.api).await,
            _ => Ok(()),
        };
    }

    async fn handle_menu_admin_key(&mut self, key: KeyEvent) {
        let selected = self.admin.selected_menu_item().map(|item| item.id);
        match (key.code, selected) {
            (KeyCode::Char('a'), _) => {
                self.form = Some(MenuItemForm::new());
                self.input_mode = InputMode::Form;
            }
            (KeyCode::Char('e') | KeyCode::Enter, Some(id)) => {
                if let Ok(form) = self.admin.edit_menu_item(id, &self.api).await {
                    self.form = Some(form);
                    self.input_mode = InputMode::Form;
                }
            }
            (KeyCode::Char('t'), Some(id)) => {
                let _ = self.admin.toggle_availability(id, &self.api).await;
            }
            (KeyCode::Char('d') | KeyCode::Delete, Some(id)) => {
                self.pending_delete = Some(id);
            }
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.form = None;
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let form = form.clone();
                if self.admin.save_menu_item(&form, &self.api).await.is_ok() {
                    self.form = None;
                    self.input_mode = InputMode::Normal;
                }
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Left | KeyCode::Right if !form.focus.is_text() => form.toggle(),
            KeyCode::Char(' ') if !form.focus.is_text() => form.toggle(),
            KeyCode::Char(c) => form.push_char(c),
            _ => {}
        }
    }
}
