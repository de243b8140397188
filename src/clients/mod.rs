//! HTTP client types for Automatic API communication.
//!
//! This module provides the transport layer underneath the resource
//! operations: requests, responses, the [`PageFetcher`] seam, and the
//! reqwest-backed [`HttpClient`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PageFetcher`]: performs one GET and returns the response, whatever
//!   its status
//! - [`HttpClient`]: the async, authenticated [`PageFetcher`] for the API
//! - [`HttpRequest`]: an absolute URL plus query parameters and headers
//! - [`HttpResponse`]: status code, lower-cased headers and raw body
//! - [`ApiClient`]: a fetcher bundled with the route table, passed into
//!   every resource operation
//!
//! # Example
//!
//! ```rust,ignore
//! use automatic_api::{AccessToken, AutomaticConfig};
//! use automatic_api::clients::{HttpClient, HttpRequest, PageFetcher};
//!
//! let config = AutomaticConfig::builder()
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder("https://api.automatic.com/trip/")
//!     .query_param("limit", "25")
//!     .build()
//!     .unwrap();
//!
//! let response = client.fetch(request).await?;
//! if let Some(next) = response.links().next() {
//!     println!("more trips at {next}");
//! }
//! ```
//!
//! # Status Handling
//!
//! [`HttpClient`] never turns an HTTP status into an error. Non-2xx
//! responses come back as [`HttpResponse`] values and are classified by the
//! caller; only transport failures surface as [`HttpError::Network`]. There
//! is no automatic retry.

mod api_client;
mod errors;
mod fetcher;
mod http_client;
mod http_request;
mod http_response;

pub use api_client::ApiClient;
pub use errors::{HttpError, InvalidHttpRequestError};
pub use fetcher::PageFetcher;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
