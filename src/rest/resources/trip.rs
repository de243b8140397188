//! Trip resource implementation.
//!
//! A [`Trip`] is one drive recorded by an Automatic adapter: where it started
//! and ended, how long and far it went, what it cost in fuel, and how the
//! driver behaved along the way.
//!
//! # Read-Only Resource
//!
//! Trips can only be listed and retrieved. Listing follows `next` links
//! across pages; retrieval is a single request by ID.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use automatic_api::rest::{ListOptions, Resource};
//! use automatic_api::rest::resources::Trip;
//!
//! let trips = Trip::all(&client, ListOptions::default()).await?;
//! for trip in &trips {
//!     println!("{}: {:.1} km", trip.id.as_deref().unwrap_or("?"),
//!         trip.distance_km().unwrap_or(0.0));
//! }
//!
//! let trip = Trip::find_by_id_required(&client, "T_8b3c2f", HashMap::new()).await?;
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::rest::{Collection, FromRecord, RawRecord, Resource, Routes};

/// A list of trips.
pub type Trips = Collection<Trip>;

/// A recorded drive.
///
/// Every field is optional. Deserialization is lenient: a field that is
/// missing or has the wrong type becomes `None` instead of failing the
/// whole record, and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Trip {
    /// The trip identifier (e.g., "T_8b3c2f").
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,

    /// Canonical URL of this trip.
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,

    /// URL of the user who owns the trip.
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<String>,

    /// URL of the vehicle the trip was driven in.
    #[serde(default, deserialize_with = "lenient")]
    pub vehicle: Option<String>,

    /// When the trip started.
    #[serde(default, deserialize_with = "lenient")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the trip ended.
    #[serde(default, deserialize_with = "lenient")]
    pub ended_at: Option<DateTime<Utc>>,

    /// IANA time zone at the start location.
    #[serde(default, deserialize_with = "lenient")]
    pub start_timezone: Option<String>,

    /// IANA time zone at the end location.
    #[serde(default, deserialize_with = "lenient")]
    pub end_timezone: Option<String>,

    /// Distance driven, in meters.
    #[serde(default, deserialize_with = "lenient")]
    pub distance_m: Option<f64>,

    /// Time driven, in seconds.
    #[serde(default, deserialize_with = "lenient")]
    pub duration_s: Option<f64>,

    /// Where the trip started.
    #[serde(default, deserialize_with = "lenient")]
    pub start_location: Option<Location>,

    /// Reverse-geocoded start address.
    #[serde(default, deserialize_with = "lenient")]
    pub start_address: Option<Address>,

    /// Where the trip ended.
    #[serde(default, deserialize_with = "lenient")]
    pub end_location: Option<Location>,

    /// Reverse-geocoded end address.
    #[serde(default, deserialize_with = "lenient")]
    pub end_address: Option<Address>,

    /// Encoded polyline of the route.
    #[serde(default, deserialize_with = "lenient")]
    pub path: Option<String>,

    /// Estimated fuel cost, in US dollars.
    #[serde(default, deserialize_with = "lenient")]
    pub fuel_cost_usd: Option<f64>,

    /// Fuel consumed, in liters.
    #[serde(default, deserialize_with = "lenient")]
    pub fuel_volume_l: Option<f64>,

    /// Average fuel efficiency, in km per liter.
    #[serde(default, deserialize_with = "lenient")]
    pub average_kmpl: Option<f64>,

    /// EPA-rated fuel efficiency of the vehicle, in km per liter.
    #[serde(default, deserialize_with = "lenient")]
    pub average_from_epa_kmpl: Option<f64>,

    /// Driving score for harsh events.
    #[serde(default, deserialize_with = "lenient")]
    pub score_events: Option<f64>,

    /// Driving score for speeding.
    #[serde(default, deserialize_with = "lenient")]
    pub score_speeding: Option<f64>,

    /// Number of hard brakes.
    #[serde(default, deserialize_with = "lenient")]
    pub hard_brakes: Option<u32>,

    /// Number of hard accelerations.
    #[serde(default, deserialize_with = "lenient")]
    pub hard_accels: Option<u32>,

    /// Seconds spent above 70 mph.
    #[serde(default, deserialize_with = "lenient")]
    pub duration_over_70_s: Option<f64>,

    /// Seconds spent above 75 mph.
    #[serde(default, deserialize_with = "lenient")]
    pub duration_over_75_s: Option<f64>,

    /// Seconds spent above 80 mph.
    #[serde(default, deserialize_with = "lenient")]
    pub duration_over_80_s: Option<f64>,

    /// Seconds spent idling.
    #[serde(default, deserialize_with = "lenient")]
    pub idling_time_s: Option<f64>,

    /// Fraction of the trip driven in the city.
    #[serde(default, deserialize_with = "lenient")]
    pub city_fraction: Option<f64>,

    /// Fraction of the trip driven on highways.
    #[serde(default, deserialize_with = "lenient")]
    pub highway_fraction: Option<f64>,

    /// Fraction of the trip driven at night.
    #[serde(default, deserialize_with = "lenient")]
    pub night_driving_fraction: Option<f64>,

    /// User-assigned tags (e.g., "business").
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
}

impl Trip {
    /// Returns the distance in kilometers.
    #[must_use]
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_m.map(|m| m / 1000.0)
    }

    /// Returns the wall-clock time between start and end.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Returns the vehicle ID taken from the vehicle URL
    /// (e.g., "C_1a2b" from `https://api.automatic.com/vehicle/C_1a2b/`).
    #[must_use]
    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle
            .as_deref()
            .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
            .filter(|id| !id.is_empty())
    }

    /// Returns `true` if the trip carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl FromRecord for Trip {
    fn from_record(record: &RawRecord) -> Self {
        serde_json::from_value(Value::Object(record.clone())).unwrap_or_default()
    }
}

impl Resource for Trip {
    const NAME: &'static str = "Trip";
    const COLLECTION_ROUTE: &'static str = Routes::TRIPS;
    const MEMBER_ROUTE: &'static str = Routes::TRIP;
}

/// A GPS fix.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Longitude in degrees.
    pub lon: Option<f64>,
    /// Horizontal accuracy in meters.
    pub accuracy_m: Option<f64>,
}

/// A reverse-geocoded address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// Full formatted address.
    pub name: Option<String>,
    /// Short display form.
    pub display_name: Option<String>,
    /// Street number.
    pub street_number: Option<String>,
    /// Street name.
    pub street_name: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// Country.
    pub country: Option<String>,
}

/// Deserializes a field, turning a value of the wrong shape into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a list of strings, dropping entries that are not strings.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(strings)
}
