//! Raw records and the mapping boundary to domain types.

use serde_json::{Map, Value};

/// One record exactly as received from the API: a JSON object.
pub type RawRecord = Map<String, Value>;

/// Maps a [`RawRecord`] into a typed domain record.
///
/// Mapping is infallible: implementations read the fields they understand
/// and leave the rest at their defaults.
///
/// # Example
///
/// ```rust
/// use automatic_api::rest::{FromRecord, RawRecord};
///
/// struct TripId(Option<String>);
///
/// impl FromRecord for TripId {
///     fn from_record(record: &RawRecord) -> Self {
///         Self(record.get("id").and_then(|v| v.as_str()).map(String::from))
///     }
/// }
/// ```
pub trait FromRecord {
    /// Builds the domain record from a raw record.
    fn from_record(record: &RawRecord) -> Self;
}

impl FromRecord for RawRecord {
    fn from_record(record: &RawRecord) -> Self {
        record.clone()
    }
}

impl FromRecord for Value {
    fn from_record(record: &RawRecord) -> Self {
        Self::Object(record.clone())
    }
}
