//! Named routes for Automatic API resources.
//!
//! A [`Routes`] table maps a route name (e.g., `"trips"`, `"trip"`) to a URL
//! template rooted at the configured API host. Templates use `{name}`
//! placeholders that [`Route::url_for`] fills with URL-encoded values.
//!
//! # Example
//!
//! ```rust
//! use automatic_api::ApiHost;
//! use automatic_api::rest::Routes;
//!
//! let routes = Routes::new(&ApiHost::default());
//!
//! let trips = routes.route_for("trips").unwrap();
//! assert_eq!(trips.url_for(&[]), "https://api.automatic.com/trip/");
//!
//! let trip = routes.route_for("trip").unwrap();
//! assert_eq!(
//!     trip.url_for(&[("id", "T_abc123")]),
//!     "https://api.automatic.com/trip/T_abc123/"
//! );
//! ```

use std::collections::HashMap;

use crate::config::ApiHost;

/// A single URL template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    name: String,
    template: String,
}

impl Route {
    /// Creates a route from a name and an absolute URL template.
    #[must_use]
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Returns the route name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Builds a URL by replacing `{key}` placeholders with URL-encoded values.
    ///
    /// Placeholders without a matching value are left untouched.
    #[must_use]
    pub fn url_for(&self, params: &[(&str, &str)]) -> String {
        let mut result = self.template.clone();

        for (key, value) in params {
            let placeholder = format!("{{{key}}}");
            result = result.replace(&placeholder, &urlencoding::encode(value));
        }

        result
    }
}

/// The route table used to resolve resource URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    routes: HashMap<String, Route>,
}

impl Routes {
    /// Route listing trips.
    pub const TRIPS: &'static str = "trips";
    /// Route for a single trip, with an `{id}` placeholder.
    pub const TRIP: &'static str = "trip";

    /// Creates the default route table for the given host.
    #[must_use]
    pub fn new(host: &ApiHost) -> Self {
        let mut routes = Self::empty();
        routes.insert(Route::new(Self::TRIPS, format!("{host}/trip/")));
        routes.insert(Route::new(Self::TRIP, format!("{host}/trip/{{id}}/")));
        routes
    }

    /// Creates a table with no routes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Adds or replaces a route.
    pub fn insert(&mut self, route: Route) {
        self.routes.insert(route.name.clone(), route);
    }

    /// Looks up a route by name.
    #[must_use]
    pub fn route_for(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::new(&ApiHost::default())
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Route>();
    assert_send_sync::<Routes>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_use_production_host() {
        let routes = Routes::default();
        assert_eq!(
            routes.route_for(Routes::TRIPS).unwrap().template(),
            "https://api.automatic.com/trip/"
        );
        assert_eq!(
            routes.route_for(Routes::TRIP).unwrap().template(),
            "https://api.automatic.com/trip/{id}/"
        );
    }

    #[test]
    fn test_routes_follow_custom_host() {
        let host = ApiHost::new("http://127.0.0.1:9000").unwrap();
        let routes = Routes::new(&host);

        let url = routes.route_for(Routes::TRIP).unwrap().url_for(&[("id", "T1")]);
        assert_eq!(url, "http://127.0.0.1:9000/trip/T1/");
    }

    #[test]
    fn test_url_for_encodes_values() {
        let route = Route::new("trip", "https://api.automatic.com/trip/{id}/");
        assert_eq!(
            route.url_for(&[("id", "a b/c")]),
            "https://api.automatic.com/trip/a%20b%2Fc/"
        );
    }

    #[test]
    fn test_url_for_leaves_unknown_placeholders() {
        let route = Route::new("vehicle_trips", "https://x/vehicle/{vehicle_id}/trip/{id}/");
        assert_eq!(
            route.url_for(&[("id", "T1")]),
            "https://x/vehicle/{vehicle_id}/trip/T1/"
        );
    }

    #[test]
    fn test_unknown_route_is_none() {
        assert!(Routes::default().route_for("vehicles").is_none());
        assert!(Routes::empty().route_for(Routes::TRIPS).is_none());
    }

    #[test]
    fn test_insert_replaces_existing_route() {
        let mut routes = Routes::default();
        routes.insert(Route::new(Routes::TRIPS, "https://staging.example/trip/"));
        assert_eq!(
            routes.route_for(Routes::TRIPS).unwrap().url_for(&[]),
            "https://staging.example/trip/"
        );
    }
}
