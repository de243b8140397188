//! The pagination loop.
//!
//! [`fetch_all`] follows `Link: <...>; rel="next"` headers from a starting
//! URL until a page has no `next` relation, accumulating each page's
//! `results` array in order. Each response is first classified into a
//! [`PageOutcome`]; only a successful page lets the loop continue.
//!
//! Failures are fail-fast: a 403 or any other non-200 page ends the call
//! with an error and discards every record fetched so far. Nothing is
//! retried here; callers decide whether to repeat the whole call.
//!
//! # Example
//!
//! ```rust,ignore
//! use automatic_api::rest::{fetch_all, ListOptions};
//!
//! let options = ListOptions::default().query_param("limit", "250");
//! let records = fetch_all(&http_client, "https://api.automatic.com/trip/", options).await?;
//! ```

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::clients::{HttpError, HttpRequest, HttpResponse, PageFetcher};
use crate::rest::{ApiErrorBody, LinkSet, RawRecord, ResourceError};

/// Query option key that toggles pagination instead of being forwarded.
pub const PAGINATE_OPTION: &str = "paginate";

/// Options for listing a collection.
///
/// `paginate` defaults to `true`. The `query` map is sent with the first
/// request only; `next` URIs are fetched exactly as advertised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOptions {
    /// Whether to follow `next` links after the first page.
    pub paginate: bool,
    /// Query parameters for the first request.
    pub query: HashMap<String, String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            paginate: true,
            query: HashMap::new(),
        }
    }
}

impl ListOptions {
    /// Builds options from a raw option map.
    ///
    /// A `paginate` entry is removed from the map and interpreted:
    /// `"false"`, `"0"` and `"no"` (case-insensitive) disable pagination,
    /// anything else keeps it on. All other entries become query parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use automatic_api::rest::ListOptions;
    ///
    /// let mut raw = HashMap::new();
    /// raw.insert("paginate".to_string(), "false".to_string());
    /// raw.insert("limit".to_string(), "10".to_string());
    ///
    /// let options = ListOptions::from_query(raw);
    /// assert!(!options.paginate);
    /// assert_eq!(options.query.len(), 1);
    /// assert!(!options.query.contains_key("paginate"));
    /// ```
    #[must_use]
    pub fn from_query(mut query: HashMap<String, String>) -> Self {
        let paginate = query.remove(PAGINATE_OPTION).map_or(true, |value| {
            !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "false" | "0" | "no"
            )
        });

        Self { paginate, query }
    }

    /// Sets whether to follow `next` links.
    #[must_use]
    pub const fn paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    /// Adds a query parameter for the first request.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// The classification of a single page response.
#[derive(Clone, Debug, PartialEq)]
pub enum PageOutcome {
    /// HTTP 200: the page's records and its links.
    Success {
        /// The page's `results`, in order.
        records: Vec<RawRecord>,
        /// The parsed `Link` header.
        links: LinkSet,
    },
    /// HTTP 403.
    Unauthorized {
        /// Description built from the body with `status` merged in.
        message: String,
    },
    /// Any other status.
    Failed {
        /// The HTTP status code.
        status: u16,
        /// Description built from the body with `status` merged in.
        message: String,
    },
}

impl PageOutcome {
    /// Classifies a response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if a 200 body is not valid JSON.
    /// Error bodies that cannot be decoded are described from the status
    /// alone.
    pub fn classify(response: &HttpResponse) -> Result<Self, ResourceError> {
        match response.code {
            200 => {
                let body = response.json()?;
                Ok(Self::Success {
                    records: page_records(body),
                    links: response.links(),
                })
            }
            403 => Ok(Self::Unauthorized {
                message: describe_error(response),
            }),
            status => Ok(Self::Failed {
                status,
                message: describe_error(response),
            }),
        }
    }
}

/// Fetches every page of a collection, starting at `url`.
///
/// Issues one request at a time. The first request carries `options.query`;
/// each following request uses the previous page's `next` URI with no query
/// parameters. Stops after the first page when `options.paginate` is false,
/// when a page has no `next` link, or when a `next` URI repeats one already
/// fetched in this call.
///
/// # Errors
///
/// - [`ResourceError::Unauthorized`] on a 403 page
/// - [`ResourceError::RequestFailed`] on any other non-200 page
/// - [`ResourceError::Decode`] if a 200 body is not valid JSON
/// - [`ResourceError::Http`] on transport failure
///
/// No partial results are returned on error.
pub async fn fetch_all<F: PageFetcher>(
    fetcher: &F,
    url: &str,
    options: ListOptions,
) -> Result<Vec<RawRecord>, ResourceError> {
    let ListOptions { paginate, query } = options;

    let mut records: Vec<RawRecord> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut request = HttpRequest::builder(url)
        .query(query)
        .build()
        .map_err(HttpError::from)?;
    let mut page: usize = 1;

    loop {
        visited.insert(request.url.clone());
        let response = fetcher.fetch(request).await?;

        let links = match PageOutcome::classify(&response)? {
            PageOutcome::Success {
                records: page_records,
                links,
            } => {
                tracing::debug!(
                    "Page {} returned {} records ({} accumulated)",
                    page,
                    page_records.len(),
                    records.len() + page_records.len()
                );
                records.extend(page_records);
                links
            }
            PageOutcome::Unauthorized { message } => {
                tracing::warn!("Page {} was refused: {}", page, message);
                return Err(ResourceError::Unauthorized { message });
            }
            PageOutcome::Failed { status, message } => {
                tracing::debug!("Page {} failed with status {}", page, status);
                return Err(ResourceError::RequestFailed { status, message });
            }
        };

        if !paginate {
            tracing::debug!("Pagination disabled, stopping after page {}", page);
            break;
        }

        let Some(next) = links.next() else {
            tracing::debug!("No next link on page {}, collection complete", page);
            break;
        };

        if visited.contains(next) {
            tracing::warn!("Next link {} was already fetched, stopping pagination", next);
            break;
        }

        request = HttpRequest::builder(next)
            .build()
            .map_err(HttpError::from)?;
        page += 1;
    }

    Ok(records)
}

/// Extracts a page's `results` array.
///
/// A missing or null `results` is an empty page. Entries that are not JSON
/// objects are skipped.
fn page_records(body: Value) -> Vec<RawRecord> {
    let Value::Object(mut body) = body else {
        return Vec::new();
    };

    match body.remove("results") {
        Some(Value::Array(results)) => results
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                other => {
                    tracing::warn!("Skipping non-object entry in results: {}", other);
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::warn!("Ignoring non-array results field: {}", other);
            Vec::new()
        }
    }
}

/// Builds the error description for a non-200 response.
///
/// The body is read as a JSON object (anything else counts as empty), the
/// actual status is merged in, and the result is rendered by
/// [`ApiErrorBody`].
pub(crate) fn describe_error(response: &HttpResponse) -> String {
    let mut body = match response.json() {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    body.insert("status".to_string(), Value::from(response.code));

    ApiErrorBody::from_body(&body).full_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: Value, link: Option<&str>) -> HttpResponse {
        let mut headers = HashMap::new();
        if let Some(link) = link {
            headers.insert("Link".to_string(), vec![link.to_string()]);
        }
        HttpResponse::new(code, headers, body.to_string())
    }

    #[test]
    fn test_list_options_default_paginates_without_query() {
        let options = ListOptions::default();
        assert!(options.paginate);
        assert!(options.query.is_empty());
    }

    #[test]
    fn test_list_options_from_query_extracts_paginate() {
        for (value, expected) in [
            ("false", false),
            ("FALSE", false),
            ("0", false),
            ("no", false),
            ("true", true),
            ("1", true),
        ] {
            let mut raw = HashMap::new();
            raw.insert("paginate".to_string(), value.to_string());
            raw.insert("page".to_string(), "3".to_string());

            let options = ListOptions::from_query(raw);
            assert_eq!(options.paginate, expected, "paginate={value}");
            assert_eq!(options.query.get("page"), Some(&"3".to_string()));
            assert!(!options.query.contains_key("paginate"));
        }
    }

    #[test]
    fn test_list_options_from_query_without_paginate_defaults_true() {
        let options = ListOptions::from_query(HashMap::new());
        assert!(options.paginate);
    }

    #[test]
    fn test_classify_success_reads_results_and_links() {
        let outcome = PageOutcome::classify(&response(
            200,
            json!({"results": [{"id": "a"}, {"id": "b"}]}),
            Some(r#"<https://x/trip/?page=2>; rel="next""#),
        ))
        .unwrap();

        match outcome {
            PageOutcome::Success { records, links } => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0]["id"], "a");
                assert_eq!(links.next(), Some("https://x/trip/?page=2"));
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_success_without_results_is_empty_page() {
        let outcome = PageOutcome::classify(&response(200, json!({"_metadata": {}}), None)).unwrap();
        assert_eq!(
            outcome,
            PageOutcome::Success {
                records: Vec::new(),
                links: LinkSet::default(),
            }
        );
    }

    #[test]
    fn test_classify_success_skips_non_object_results() {
        let outcome =
            PageOutcome::classify(&response(200, json!({"results": [{"id": "a"}, 7, null]}), None))
                .unwrap();
        assert!(matches!(outcome, PageOutcome::Success { records, .. } if records.len() == 1));
    }

    #[test]
    fn test_classify_malformed_success_body_is_decode_error() {
        let bad = HttpResponse::new(200, HashMap::new(), "{not json");
        assert!(matches!(
            PageOutcome::classify(&bad),
            Err(ResourceError::Decode(_))
        ));
    }

    #[test]
    fn test_classify_403_is_unauthorized_with_status_in_message() {
        let outcome = PageOutcome::classify(&response(403, json!({"error": "denied"}), None)).unwrap();
        match outcome {
            PageOutcome::Unauthorized { message } => {
                assert!(message.contains("403"));
                assert!(message.contains("denied"));
            }
            other => panic!("Expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_other_status_is_failed_with_actual_status() {
        let outcome = PageOutcome::classify(&response(500, json!({"error": "boom"}), None)).unwrap();
        assert_eq!(
            outcome,
            PageOutcome::Failed {
                status: 500,
                message: "500: boom".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_error_with_non_json_body_still_classified() {
        let outcome =
            PageOutcome::classify(&HttpResponse::new(502, HashMap::new(), "Bad Gateway")).unwrap();
        assert_eq!(
            outcome,
            PageOutcome::Failed {
                status: 502,
                message: "502: Request failed".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_other_2xx_is_not_success() {
        let outcome = PageOutcome::classify(&response(204, json!({}), None)).unwrap();
        assert!(matches!(outcome, PageOutcome::Failed { status: 204, .. }));
    }

    #[test]
    fn test_status_in_body_is_overridden_by_actual_status() {
        let message = describe_error(&response(404, json!({"status": 200, "error": "gone"}), None));
        assert_eq!(message, "404: gone");
    }
}
