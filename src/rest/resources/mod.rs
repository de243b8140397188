//! Resource implementations.
//!
//! # Available Resources
//!
//! ## Trip Resource
//!
//! Trips are drives recorded by an Automatic adapter.
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use automatic_api::rest::{ListOptions, Resource};
//! use automatic_api::rest::resources::{Trip, Trips};
//!
//! // List every trip, following pagination links
//! let trips: Trips = Trip::all(&client, ListOptions::default()).await?;
//!
//! // Only the first page
//! let options = ListOptions::default().paginate(false).query_param("limit", "10");
//! let recent = Trip::all(&client, options).await?;
//!
//! // Find a single trip
//! let trip = Trip::find_by_id(&client, "T_8b3c2f", HashMap::new()).await?;
//! ```

mod trip;

pub use trip::{Address, Location, Trip, Trips};
