//! Lazily-mapped collections of records.
//!
//! [`Collection<T>`] owns the raw records accumulated by the pagination loop
//! and hands out domain records on demand. Nothing is mapped up front and
//! nothing is cached: every iteration pass maps each raw record afresh, so a
//! collection can be walked any number of times.
//!
//! # Example
//!
//! ```rust
//! use automatic_api::rest::{Collection, RawRecord};
//! use automatic_api::rest::resources::Trip;
//! use serde_json::json;
//!
//! let records: Vec<RawRecord> = vec![
//!     json!({"id": "T1", "distance_m": 1200.0}).as_object().unwrap().clone(),
//!     json!({"id": "T2", "distance_m": 48000.5}).as_object().unwrap().clone(),
//! ];
//! let trips: Collection<Trip> = Collection::new(records);
//!
//! let long_trips: Vec<Trip> = trips
//!     .iter()
//!     .filter(|trip| trip.distance_m.unwrap_or(0.0) > 10_000.0)
//!     .collect();
//! assert_eq!(long_trips.len(), 1);
//! assert_eq!(trips.iter().count(), 2);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::rest::{FromRecord, RawRecord};

/// An ordered, read-only collection of raw records viewed as `T`.
///
/// Order is the order in which records were received.
pub struct Collection<T> {
    records: Vec<RawRecord>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T> {
    /// Wraps the given raw records.
    #[must_use]
    pub const fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            _marker: PhantomData,
        }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the raw records in order.
    #[must_use]
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Consumes the collection and returns the raw records.
    #[must_use]
    pub fn into_records(self) -> Vec<RawRecord> {
        self.records
    }
}

impl<T: FromRecord> Collection<T> {
    /// Returns a lazy iterator mapping each raw record to `T`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.records.iter(),
            _marker: PhantomData,
        }
    }

    /// Maps the record at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.records.get(index).map(T::from_record)
    }

    /// Maps the first record, if any.
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self::new(self.records.clone())
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("records", &self.records)
            .finish()
    }
}

impl<T> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<T> From<Vec<RawRecord>> for Collection<T> {
    fn from(records: Vec<RawRecord>) -> Self {
        Self::new(records)
    }
}

impl<T> FromIterator<RawRecord> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: FromRecord> IntoIterator for &'a Collection<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Collection::iter`].
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, RawRecord>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: FromRecord> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(T::from_record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(T::from_record)
    }
}

impl<T: FromRecord> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(T::from_record)
    }
}

impl<T: FromRecord> ExactSizeIterator for Iter<'_, T> {}

impl<T: FromRecord> FusedIterator for Iter<'_, T> {}

// Verify Collection is Send + Sync regardless of T
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Collection<std::rc::Rc<()>>>();
};
