//! Resource-level error types.
//!
//! The pagination loop and the single-record lookups classify responses into
//! these variants:
//!
//! - **403** while listing: [`ResourceError::Unauthorized`]
//! - **Any other non-200** while listing: [`ResourceError::RequestFailed`]
//! - **No record** from a must-exist lookup: [`ResourceError::NotFound`]
//!
//! Transport failures and undecodable bodies keep their own variants so they
//! are never confused with an API answer.
//!
//! # Example
//!
//! ```rust,ignore
//! use automatic_api::rest::{Resource, ResourceError};
//! use automatic_api::rest::resources::Trip;
//!
//! match Trip::all(&client, ListOptions::default()).await {
//!     Ok(trips) => println!("{} trips", trips.len()),
//!     Err(ResourceError::Unauthorized { message }) => println!("Re-authenticate: {message}"),
//!     Err(ResourceError::RequestFailed { status, .. }) => println!("API answered {status}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The API refused the request (HTTP 403).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Description built from the response body and status.
        message: String,
    },

    /// The API answered with a status other than 200 or 403.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// Description built from the response body and status.
        message: String,
    },

    /// A record that must exist could not be fetched.
    #[error("Could not find {resource} with ID {id}")]
    NotFound {
        /// The resource name (e.g., "Trip").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The route table has no route with this name.
    #[error("No route named '{name}' is registered")]
    RouteNotFound {
        /// The missing route name.
        name: String,
    },

    /// A successful response body was not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(403),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
