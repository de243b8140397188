//! REST resource infrastructure for the Automatic API.
//!
//! This module turns paginated API responses into collections of typed
//! records:
//!
//! - **[`LinkSet`]**: parses RFC 8288 `Link` headers into relation → URI
//! - **[`fetch_all`]**: the pagination loop; follows `next` links and
//!   classifies each page as a [`PageOutcome`]
//! - **[`Collection<T>`]**: the accumulated raw records, mapped into `T` on
//!   demand through [`FromRecord`]
//! - **[`Resource`] trait**: `all`, `find_by_id` and `find_by_id_required`
//!   for any resource that names its routes
//! - **[`Routes`]**: named URL templates rooted at the API host
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use automatic_api::{ApiClient, AutomaticConfig, AccessToken};
//! use automatic_api::rest::{ListOptions, Resource, ResourceError};
//! use automatic_api::rest::resources::Trip;
//!
//! let config = AutomaticConfig::builder()
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = ApiClient::new(&config)?;
//!
//! match Trip::all(&client, ListOptions::default()).await {
//!     Ok(trips) => {
//!         let business = trips.iter().filter(|t| t.has_tag("business")).count();
//!         println!("{} trips, {} for business", trips.len(), business);
//!     }
//!     Err(ResourceError::Unauthorized { message }) => eprintln!("denied: {message}"),
//!     Err(e) => eprintln!("failed: {e}"),
//! }
//!
//! let trip = Trip::find_by_id_required(&client, "T_8b3c2f", HashMap::new()).await?;
//! ```
//!
//! # Pagination
//!
//! The first request carries the caller's query parameters; every later
//! request uses the `next` URI verbatim. The loop stops when a page has no
//! `next` link, when pagination is disabled, or when a `next` URI repeats.
//! Any non-200 page aborts the whole operation: 403 becomes
//! [`ResourceError::Unauthorized`], everything else
//! [`ResourceError::RequestFailed`]. Records from earlier pages are
//! discarded.

mod api_error;
mod collection;
mod errors;
mod link_header;
pub mod lookup;
mod pagination;
mod record;
mod resource;
mod routes;

pub mod resources;

pub use api_error::ApiErrorBody;
pub use collection::{Collection, Iter};
pub use errors::ResourceError;
pub use link_header::{Link, LinkSet};
pub use pagination::{fetch_all, ListOptions, PageOutcome, PAGINATE_OPTION};
pub use record::{FromRecord, RawRecord};
pub use resource::Resource;
pub use routes::{Route, Routes};
