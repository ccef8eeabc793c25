//! Error type for the client library.

use cart_core::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("api returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but with `success: false`.
    #[error("request rejected by api: {0}")]
    Rejected(String),

    #[error("invalid api url {url}: {reason}")]
    Url { url: String, reason: String },

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A menu item form failed local validation.
    #[error("{0}")]
    Form(String),
}
