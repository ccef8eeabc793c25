//! Error types for the cart.
//!
//! Cart mutations are infallible (unknown ids are no-ops); the only
//! rejected operation is submitting an empty cart.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Submission attempted with no line items.
    #[error("Your cart is empty!")]
    EmptyCart,
}
