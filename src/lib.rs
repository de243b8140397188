//! # Automatic API Rust Client
//!
//! A Rust client for the Automatic connected-car API, providing type-safe
//! configuration, an authenticated HTTP client, and paginated access to the
//! trips collection.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AutomaticConfig`] and [`AutomaticConfigBuilder`]
//! - Validated newtypes for the access token and API host
//! - An async HTTP client that sends bearer-token requests and hands back
//!   every response for classification
//! - `Link` header parsing and a pagination loop that follows `next` links
//! - Lazily-mapped collections of typed records
//! - Single-record lookup by ID
//!
//! ## Quick Start
//!
//! ```rust
//! use automatic_api::{AutomaticConfig, AccessToken};
//!
//! // Create configuration using the builder pattern
//! let config = AutomaticConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .user_agent_prefix("TripSync/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Listing Trips
//!
//! ```rust,ignore
//! use automatic_api::{ApiClient, AutomaticConfig, AccessToken};
//! use automatic_api::rest::{ListOptions, Resource};
//! use automatic_api::rest::resources::Trip;
//!
//! let client = ApiClient::new(&config)?;
//!
//! // Every page, in order
//! let trips = Trip::all(&client, ListOptions::default()).await?;
//! for trip in &trips {
//!     println!("{:?} {:?} m", trip.id, trip.distance_m);
//! }
//!
//! // Just the first page
//! let first_page = Trip::all(&client, ListOptions::default().paginate(false)).await?;
//! ```
//!
//! ## Finding a Trip
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use automatic_api::rest::{Resource, ResourceError};
//! use automatic_api::rest::resources::Trip;
//!
//! // `None` when the API does not answer 200
//! let maybe_trip = Trip::find_by_id(&client, "T_8b3c2f", HashMap::new()).await?;
//!
//! // `ResourceError::NotFound` instead of `None`
//! match Trip::find_by_id_required(&client, "T_8b3c2f", HashMap::new()).await {
//!     Ok(trip) => println!("{:?}", trip.started_at),
//!     Err(ResourceError::NotFound { id, .. }) => println!("no trip {id}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Parsing Link Headers
//!
//! ```rust
//! use automatic_api::rest::LinkSet;
//!
//! let links = LinkSet::parse(Some(
//!     r#"<https://api.automatic.com/trip/?page=2>; rel="next", <https://api.automatic.com/trip/?page=1>; rel="prev""#,
//! ));
//! assert!(links.has("next"));
//! assert_eq!(links.uri("next"), Some("https://api.automatic.com/trip/?page=2"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is built from a config and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **No hidden retries**: a failed page fails the whole operation

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiHost, AutomaticConfig, AutomaticConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, PageFetcher,
};

// Re-export resource types
pub use rest::resources::{Trip, Trips};
pub use rest::{Collection, LinkSet, ListOptions, Resource, ResourceError};
