//! Menu administration bodies and dashboard statistics.

use serde::{Deserialize, Serialize};

use cart_core::menu::null_as_default;
use cart_core::{Category, MenuItem, Money};

/// Body of `POST /api/admin/menu`.
///
/// `name`, `price` and `category` are required by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemDraft {
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

impl MenuItemDraft {
    /// Full-replacement patch carrying every field of the draft. A missing
    /// image URL is sent as `""` so an edit can clear it.
    pub fn into_patch(self) -> MenuItemPatch {
        MenuItemPatch {
            name: Some(self.name),
            description: Some(self.description),
            price: Some(self.price),
            category: Some(self.category),
            available: Some(self.available),
            image_url: Some(self.image_url.unwrap_or_default()),
        }
    }
}

impl From<&MenuItem> for MenuItemDraft {
    fn from(item: &MenuItem) -> Self {
        MenuItemDraft {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category,
            available: item.available,
            image_url: item.image_url.clone(),
        }
    }
}

/// Body of `PUT /api/admin/menu/{id}`: only the present fields change.
///
/// `image_url: ""` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MenuItemPatch {
    /// Patch that only flips availability.
    pub fn availability(available: bool) -> Self {
        MenuItemPatch {
            available: Some(available),
            ..MenuItemPatch::default()
        }
    }

    /// Apply the present fields to `item`.
    pub fn apply_to(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        if let Some(image_url) = &self.image_url {
            let image_url = image_url.trim();
            item.image_url = (!image_url.is_empty()).then(|| image_url.to_string());
        }
    }
}

/// Response to creating or updating a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub success: bool,
    pub item: MenuItem,
}

/// Bare `{success}` acknowledgment (e.g. delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// One of the most-ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularItem {
    pub name: String,
    pub total_ordered: u64,
}

/// Body of `GET /api/admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub total_revenue: Money,
    #[serde(default)]
    pub popular_items: Vec<PopularItem>,
}
