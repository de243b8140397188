//! HTTP response type for the Automatic API client.
//!
//! [`HttpResponse`] carries the raw status, headers and body of a single
//! page fetch. Header names are normalized to lowercase on construction so
//! lookups are case-insensitive.

use std::collections::HashMap;

use crate::rest::LinkSet;

/// An HTTP response from the Automatic API.
///
/// The body is kept as raw text; callers decide when (and whether) to parse
/// it with [`HttpResponse::json`].
///
/// # Example
///
/// ```rust
/// use automatic_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert(
///     "Link".to_string(),
///     vec![r#"<https://api.automatic.com/trip/?page=2>; rel="next""#.to_string()],
/// );
///
/// let response = HttpResponse::new(200, headers, r#"{"results": []}"#);
/// assert!(response.is_ok());
/// assert_eq!(
///     response.links().uri("next"),
///     Some("https://api.automatic.com/trip/?page=2")
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, lowercasing header names.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the raw `Link` header value, if present.
    ///
    /// Repeated `Link` headers are joined with `", "`, which is equivalent
    /// to a single comma-separated header.
    #[must_use]
    pub fn link_header(&self) -> Option<String> {
        self.headers
            .get("link")
            .filter(|values| !values.is_empty())
            .map(|values| values.join(", "))
    }

    /// Parses the `Link` header into a [`LinkSet`].
    ///
    /// An absent header yields an empty set.
    #[must_use]
    pub fn links(&self) -> LinkSet {
        LinkSet::parse(self.link_header().as_deref())
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Parses the body as JSON.
    ///
    /// An empty (or all-whitespace) body parses as an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the body is not
    /// valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), "");
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 403, 404, 429, 500, 503] {
            assert!(!HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, "");
        assert_eq!(response.header("x-request-id"), Some("abc-123"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc-123"));
        assert_eq!(response.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_headers_differing_only_in_case_are_merged() {
        let mut headers = HashMap::new();
        headers.insert(
            "Link".to_string(),
            vec![r#"<https://x/y?page=2>; rel="next""#.to_string()],
        );
        headers.insert(
            "link".to_string(),
            vec![r#"<https://x/y?page=1>; rel="prev""#.to_string()],
        );

        let response = HttpResponse::new(200, headers, "");
        let links = response.links();
        assert!(links.has("next"));
        assert!(links.has("prev"));
    }

    #[test]
    fn test_links_empty_when_header_absent() {
        let response = HttpResponse::new(200, HashMap::new(), "");
        assert!(response.link_header().is_none());
        assert!(!response.links().has("next"));
    }

    #[test]
    fn test_json_parses_body() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"results":[{"id":"T1"}]}"#);
        assert_eq!(response.json().unwrap(), json!({"results": [{"id": "T1"}]}));
    }

    #[test]
    fn test_json_empty_body_is_empty_object() {
        let response = HttpResponse::new(204, HashMap::new(), "  ");
        assert_eq!(response.json().unwrap(), json!({}));
    }

    #[test]
    fn test_json_malformed_body_is_error() {
        let response = HttpResponse::new(200, HashMap::new(), "<html>oops</html>");
        assert!(response.json().is_err());
    }
}
