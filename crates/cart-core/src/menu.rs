//! Menu items and the category-keyed menu served by `GET /api/menu`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;
use crate::money::Money;

/// Identifier of a menu item (assigned by the API).
pub type MenuItemId = u32;

/// A single menu item, as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: Money,
    pub category: Category,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn default_available() -> bool {
    true
}

/// Decode `null` the same way as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MenuItem {
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        MenuItem {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category,
            available: true,
            image_url: None,
        }
    }
}

/// Category-keyed menu.
///
/// Categories keep the order the server sent them in; items keep their
/// order within a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    categories: IndexMap<Category, Vec<MenuItem>>,
}

impl Menu {
    pub fn new() -> Self {
        Menu::default()
    }

    /// Build a menu by grouping a flat list of items by category.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut menu = Menu::new();
        for item in items {
            menu.insert(item);
        }
        menu
    }

    /// Append an item to the end of its category.
    pub fn insert(&mut self, item: MenuItem) {
        self.categories.entry(item.category).or_default().push(item);
    }

    /// Items of one category (empty slice if the category is absent).
    pub fn items_in(&self, category: Category) -> &[MenuItem] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up an item by id across all categories.
    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.categories
            .values()
            .flat_map(|items| items.iter())
            .find(|item| item.id == id)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Total number of items across categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
