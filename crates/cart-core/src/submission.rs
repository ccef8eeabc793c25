//! Payload for `POST /api/submit-order`.

use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;

/// Name used when the customer leaves the name field blank.
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub items: Vec<LineItem>,
    pub customer_name: String,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}

impl OrderSubmission {
    /// Build a submission, normalizing the free-text fields:
    /// - a blank (or whitespace-only) name becomes [`DEFAULT_CUSTOMER_NAME`]
    /// - name and notes are trimmed
    pub fn new(items: Vec<LineItem>, customer_name: &str, notes: &str) -> Self {
        let name = customer_name.trim();
        OrderSubmission {
            items,
            customer_name: if name.is_empty() {
                DEFAULT_CUSTOMER_NAME.to_string()
            } else {
                name.to_string()
            },
            notes: notes.trim().to_string(),
            customer_email: None,
            customer_phone: None,
        }
    }

    /// Attach contact details; blank values are dropped.
    pub fn with_contact(mut self, email: &str, phone: &str) -> Self {
        self.customer_email = non_blank(email);
        self.customer_phone = non_blank(phone);
        self
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}
