//! The `Resource` trait: listing and lookup for API resources.
//!
//! A resource names its routes and how to map a raw record; it then gets
//! default implementations of:
//!
//! - [`Resource::all`]: every record, following `next` links
//! - [`Resource::find_by_id`]: one record, or `None` when the API does not
//!   answer 200
//! - [`Resource::find_by_id_required`]: one record, or
//!   [`ResourceError::NotFound`]
//!
//! # Example
//!
//! ```rust,ignore
//! use automatic_api::rest::{FromRecord, RawRecord, Resource, Routes};
//!
//! struct Trip { /* ... */ }
//!
//! impl FromRecord for Trip {
//!     fn from_record(record: &RawRecord) -> Self { /* ... */ }
//! }
//!
//! impl Resource for Trip {
//!     const NAME: &'static str = "Trip";
//!     const COLLECTION_ROUTE: &'static str = Routes::TRIPS;
//!     const MEMBER_ROUTE: &'static str = Routes::TRIP;
//! }
//!
//! let trips = Trip::all(&client, ListOptions::default()).await?;
//! let trip = Trip::find_by_id_required(&client, "T_123", HashMap::new()).await?;
//! ```

use std::collections::HashMap;

use crate::clients::{ApiClient, PageFetcher};
use crate::rest::lookup::{self, resolve_route};
use crate::rest::{fetch_all, Collection, FromRecord, ListOptions, ResourceError};

/// A listable, addressable API resource.
#[allow(async_fn_in_trait)]
pub trait Resource: FromRecord + Sized {
    /// The singular resource name, used in error messages (e.g., "Trip").
    const NAME: &'static str;

    /// Route listing the collection.
    const COLLECTION_ROUTE: &'static str;

    /// Route addressing one record; must contain an `{id}` placeholder.
    const MEMBER_ROUTE: &'static str;

    /// Fetches the whole collection.
    ///
    /// See [`fetch_all`] for the pagination rules.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::RouteNotFound`] if the collection route is
    /// missing, and any error from [`fetch_all`].
    async fn all<F: PageFetcher>(
        client: &ApiClient<F>,
        options: ListOptions,
    ) -> Result<Collection<Self>, ResourceError> {
        let url = resolve_route(client.routes(), Self::COLLECTION_ROUTE, &[])?;
        let records = fetch_all(client.fetcher(), &url, options).await?;

        tracing::debug!("Fetched {} {} records", records.len(), Self::NAME);

        Ok(Collection::new(records))
    }

    /// Fetches one record by ID with a single, non-paginated request.
    ///
    /// See [`lookup::find_by_id`] for the status rules.
    ///
    /// # Errors
    ///
    /// Returns any error from [`lookup::find_by_id`].
    async fn find_by_id<F: PageFetcher>(
        client: &ApiClient<F>,
        id: &str,
        query: HashMap<String, String>,
    ) -> Result<Option<Self>, ResourceError> {
        lookup::find_by_id(client, Self::MEMBER_ROUTE, id, query).await
    }

    /// Fetches one record by ID, failing when it cannot be found.
    ///
    /// Issues exactly the same single request as [`Resource::find_by_id`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] carrying `id` when
    /// [`Resource::find_by_id`] yields `None`, and propagates its errors.
    async fn find_by_id_required<F: PageFetcher>(
        client: &ApiClient<F>,
        id: &str,
        query: HashMap<String, String>,
    ) -> Result<Self, ResourceError> {
        lookup::find_by_id_required(client, Self::NAME, Self::MEMBER_ROUTE, id, query).await
    }
}
