//! HTTP-specific error types for the Automatic API client.
//!
//! Non-2xx responses are not errors at this layer: the client hands every
//! response back to the caller, which classifies the status. Only transport
//! failures and invalid requests are reported here.
//!
//! # Example
//!
//! ```rust,ignore
//! use automatic_api::clients::{HttpClient, HttpRequest, HttpError, PageFetcher};
//!
//! match client.fetch(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URL was empty.
    #[error("Cannot send a request without a URL.")]
    EmptyUrl,

    /// The request URL is not an absolute `http`/`https` URL.
    #[error("Invalid request URL '{url}'. Expected an absolute http(s) URL.")]
    InvalidUrl {
        /// The URL that was provided.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including failures reading the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
