//! Add / edit form for a menu item.
//!
//! Holds the raw text the admin typed; [`MenuItemForm::to_draft`] does
//! the local checks (name present, price a non-negative number) before
//! anything is sent.

use cart_core::{Category, MenuItem, MenuItemId, Money};
use cart_protocol::MenuItemDraft;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Category,
    ImageUrl,
    Available,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Category,
        FormField::ImageUrl,
        FormField::Available,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::Category => "Category",
            FormField::ImageUrl => "Image URL",
            FormField::Available => "Available",
        }
    }

    /// Free-text fields accept typed characters; the others toggle.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Category | FormField::Available)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemForm {
    /// `None` when adding a new item.
    pub id: Option<MenuItemId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Category,
    pub image_url: String,
    pub available: bool,
    pub focus: FormField,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        MenuItemForm::new()
    }
}

impl MenuItemForm {
    /// Blank "Add Menu Item" form (available by default).
    pub fn new() -> Self {
        MenuItemForm {
            id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: Category::default(),
            image_url: String::new(),
            available: true,
            focus: FormField::Name,
        }
    }

    /// "Edit Menu Item" form pre-filled from `item`.
    pub fn edit(item: &MenuItem) -> Self {
        MenuItemForm {
            id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            category: item.category,
            image_url: item.image_url.clone().unwrap_or_default(),
            available: item.available,
            focus: FormField::Name,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit Menu Item"
        } else {
            "Add Menu Item"
        }
    }

    pub fn next_field(&mut self) {
        let idx = FormField::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ALL[(idx + 1) % FormField::ALL.len()];
    }

    pub fn prev_field(&mut self) {
        let idx = FormField::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()];
    }

    /// Type a character into the focused text field.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.focused_text_mut() {
            field.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.pop();
        }
    }

    /// Cycle the category or flip availability, depending on focus.
    pub fn toggle(&mut self) {
        match self.focus {
            FormField::Category => self.category = self.category.next(),
            FormField::Available => self.available = !self.available,
            _ => {}
        }
    }

    /// Current text of a field, for display.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Description => self.description.clone(),
            FormField::Price => self.price.clone(),
            FormField::Category => self.category.label(),
            FormField::ImageUrl => self.image_url.clone(),
            FormField::Available => if self.available { "yes" } else { "no" }.to_string(),
        }
    }

    /// Validate and convert to the API body.
    pub fn to_draft(&self) -> Result<MenuItemDraft, ClientError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::Form("name is required".into()));
        }

        let price_text = self.price.trim().trim_start_matches('$');
        let units: f64 = price_text
            .parse()
            .map_err(|_| ClientError::Form(format!("price is not a number: {}", self.price)))?;
        let price = Money::from_units(units)
            .ok_or_else(|| ClientError::Form("price must be zero or more".into()))?;

        let image_url = self.image_url.trim();
        Ok(MenuItemDraft {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            category: self.category,
            available: self.available,
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        })
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::ImageUrl => Some(&mut self.image_url),
            FormField::Category | FormField::Available => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_form_becomes_draft() {
        let mut form = MenuItemForm::new();
        for c in "Lemonade".chars() {
            form.push_char(c);
        }
        form.next_field(); // description
        form.next_field(); // price
        for c in "$3.25".chars() {
            form.push_char(c);
        }
        form.next_field(); // category
        form.toggle();

        let draft = form.to_draft().expect("valid form");
        assert_eq!(draft.name, "Lemonade");
        assert_eq!(draft.price, Money::from_cents(325));
        assert_eq!(draft.category, Category::MainCourse);
        assert!(draft.available);
        assert_eq!(draft.image_url, None);
    }

    #[test]
    fn missing_name_or_bad_price_is_rejected() {
        let mut form = MenuItemForm::new();
        form.price = "2.00".into();
        assert!(matches!(form.to_draft(), Err(ClientError::Form(_))));

        form.name = "Soda".into();
        form.price = "two".into();
        assert!(matches!(form.to_draft(), Err(ClientError::Form(_))));

        form.price = "-1".into();
        assert!(matches!(form.to_draft(), Err(ClientError::Form(_))));
    }

    #[test]
    fn edit_form_prefills_and_toggles_ignore_text_input() {
        let item = MenuItem::new(7, "Tiramisu", "Classic", Money::from_cents(750), Category::Desserts);
        let mut form = MenuItemForm::edit(&item);
        assert_eq!(form.title(), "Edit Menu Item");
        assert_eq!(form.price, "7.50");

        form.focus = FormField::Available;
        form.push_char('x');
        form.toggle();
        assert!(!form.available);
        assert_eq!(form.value(FormField::Available), "no");
    }
}
