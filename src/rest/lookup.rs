//! Single-record lookup by ID.
//!
//! A lookup issues exactly one GET against a member route and never follows
//! links. [`find_by_id`] treats any non-200 status as "not found";
//! [`find_by_id_required`] turns that into [`ResourceError::NotFound`].

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{ApiClient, HttpError, HttpRequest, PageFetcher};
use crate::rest::{FromRecord, ResourceError, Routes};

/// Fetches one record through the named member route.
///
/// The record is mapped from the top-level body of a 200 response. Any other
/// status yields `Ok(None)`, as does a 200 body that is JSON but not an
/// object.
///
/// # Errors
///
/// Returns [`ResourceError::RouteNotFound`] if `route` is not registered,
/// [`ResourceError::Decode`] if a 200 body is not valid JSON, and
/// [`ResourceError::Http`] on transport failure.
pub async fn find_by_id<T, F>(
    client: &ApiClient<F>,
    route: &str,
    id: &str,
    query: HashMap<String, String>,
) -> Result<Option<T>, ResourceError>
where
    T: FromRecord,
    F: PageFetcher,
{
    let url = resolve_route(client.routes(), route, &[("id", id)])?;
    let request = HttpRequest::builder(url)
        .query(query)
        .build()
        .map_err(HttpError::from)?;

    let response = client.fetcher().fetch(request).await?;
    if response.code != 200 {
        tracing::debug!("Lookup of {} via '{}' returned {}", id, route, response.code);
        return Ok(None);
    }

    match response.json()? {
        Value::Object(record) => Ok(Some(T::from_record(&record))),
        other => {
            tracing::warn!("Lookup of {} returned a non-object body: {}", id, other);
            Ok(None)
        }
    }
}

/// Fetches one record, failing with [`ResourceError::NotFound`] when
/// [`find_by_id`] yields `None`.
///
/// Issues the same single request as [`find_by_id`].
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] naming `resource` and `id`, and
/// propagates every error of [`find_by_id`].
pub async fn find_by_id_required<T, F>(
    client: &ApiClient<F>,
    resource: &'static str,
    route: &str,
    id: &str,
    query: HashMap<String, String>,
) -> Result<T, ResourceError>
where
    T: FromRecord,
    F: PageFetcher,
{
    find_by_id(client, route, id, query)
        .await?
        .ok_or_else(|| ResourceError::NotFound {
            resource,
            id: id.to_string(),
        })
}

/// Resolves a named route into a URL.
pub(crate) fn resolve_route(
    routes: &Routes,
    name: &str,
    params: &[(&str, &str)],
) -> Result<String, ResourceError> {
    routes
        .route_for(name)
        .map(|route| route.url_for(params))
        .ok_or_else(|| ResourceError::RouteNotFound {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_route_interpolates_id() {
        let url = resolve_route(&Routes::default(), Routes::TRIP, &[("id", "T_1")]).unwrap();
        assert_eq!(url, "https://api.automatic.com/trip/T_1/");
    }

    #[test]
    fn test_resolve_route_encodes_id() {
        let url = resolve_route(&Routes::default(), Routes::TRIP, &[("id", "a/b c")]).unwrap();
        assert_eq!(url, "https://api.automatic.com/trip/a%2Fb%20c/");
    }

    #[test]
    fn test_resolve_route_missing_route() {
        let result = resolve_route(&Routes::empty(), Routes::TRIPS, &[]);
        assert!(matches!(
            result,
            Err(ResourceError::RouteNotFound { name }) if name == "trips"
        ));
    }
}
