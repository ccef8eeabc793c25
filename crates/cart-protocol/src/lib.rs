//! cart-protocol
//!
//! Wire-level shapes for the restaurant ordering REST API.
//!
//! This crate is responsible for the JSON bodies the API sends and
//! accepts, and for building endpoint paths. It does no I/O.
//!
//! - [`endpoints`]    : endpoint paths and query strings
//! - [`order_status`] : order lifecycle states
//! - [`orders`]       : order records, pages, submit / status responses
//! - [`admin`]        : menu administration bodies and dashboard stats

pub mod endpoints;
pub mod order_status;
pub mod orders;
pub mod admin;

pub use order_status::{OrderStatus, ParseStatusError};
pub use orders::{
    ErrorBody,
    OrderItemRecord,
    OrderRecord,
    OrdersPage,
    OrdersQuery,
    StatusUpdate,
    StatusUpdateResponse,
    SubmitOrderResponse,
};
pub use admin::{
    AdminStats,
    MenuItemDraft,
    MenuItemPatch,
    MenuItemResponse,
    PopularItem,
    SuccessResponse,
};

// Shapes shared with the cart itself.
pub use cart_core::{Menu, MenuItem, OrderSubmission};
