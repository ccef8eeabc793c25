//! cart-client
//!
//! Client side of the restaurant ordering system:
//! - [`config`]     : client configuration (file, env, CLI)
//! - [`api`]        : async REST client for the ordering API
//! - [`ordering`]   : customer ordering view-controller (owns the cart)
//! - [`admin`]      : admin dashboard controller (stats, orders, menu)
//! - [`menu_form`]  : add / edit form for menu items
//! - [`pagination`] : page-button windowing for the order list
//! - [`view_model`] : pure data -> view-model mapping used by the UI
//!
//! The terminal UI itself lives in the binary.

pub mod config;
pub mod error;
pub mod api;
pub mod notice;
pub mod ordering;
pub mod admin;
pub mod menu_form;
pub mod pagination;
pub mod view_model;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use notice::{Notice, NoticeKind};
pub use ordering::{Confirmation, OrderingSession};
pub use admin::{AdminDashboard, Section};
pub use menu_form::{FormField, MenuItemForm};
