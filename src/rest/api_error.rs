//! Human-readable descriptions of API error bodies.
//!
//! Error responses from the Automatic API carry a small JSON object such as
//! `{"error": "err_unauthorized", "detail": "Invalid token."}`. The
//! pagination loop merges the HTTP status into that object and renders it
//! with [`ApiErrorBody::full_message`].

use serde_json::{Map, Value};

/// An error-shaped response body with the HTTP status merged in.
///
/// # Example
///
/// ```rust
/// use automatic_api::rest::ApiErrorBody;
/// use serde_json::json;
///
/// let body = json!({"error": "denied", "status": 403});
/// let error = ApiErrorBody::from_body(body.as_object().unwrap());
///
/// assert_eq!(error.status, Some(403));
/// assert_eq!(error.full_message(), "403: denied");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// The HTTP status code, if known.
    pub status: Option<u16>,
    /// The short error code or title (`error` field).
    pub error: Option<String>,
    /// A longer explanation (`detail`, `error_description` or `message`).
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Reads the known fields from an error body.
    ///
    /// Non-string values are rendered as compact JSON.
    #[must_use]
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let status = body.get("status").and_then(|status| match status {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.parse().ok(),
            _ => None,
        });

        let error = body.get("error").and_then(text_of);
        let detail = ["detail", "error_description", "message"]
            .iter()
            .find_map(|key| body.get(*key).and_then(text_of));

        Self {
            status,
            error,
            detail,
        }
    }

    /// Renders `"<status>: <error> (<detail>)"`, omitting absent parts.
    #[must_use]
    pub fn full_message(&self) -> String {
        let description = match (&self.error, &self.detail) {
            (Some(error), Some(detail)) => format!("{error} ({detail})"),
            (Some(text), None) | (None, Some(text)) => text.clone(),
            (None, None) => "Request failed".to_string(),
        };

        match self.status {
            Some(status) => format!("{status}: {description}"),
            None => description,
        }
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_from(value: Value) -> ApiErrorBody {
        ApiErrorBody::from_body(value.as_object().unwrap())
    }

    #[test]
    fn test_full_message_with_error_and_detail() {
        let error = error_from(json!({
            "status": 403,
            "error": "err_unauthorized",
            "detail": "Invalid token."
        }));
        assert_eq!(error.full_message(), "403: err_unauthorized (Invalid token.)");
    }

    #[test]
    fn test_detail_falls_back_to_error_description_and_message() {
        let error = error_from(json!({"status": 400, "error_description": "bad scope"}));
        assert_eq!(error.full_message(), "400: bad scope");

        let error = error_from(json!({"status": 500, "message": "boom"}));
        assert_eq!(error.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn test_full_message_without_fields_still_mentions_status() {
        let error = error_from(json!({"status": 502}));
        assert_eq!(error.full_message(), "502: Request failed");
    }

    #[test]
    fn test_full_message_without_status() {
        let error = error_from(json!({"error": "denied"}));
        assert_eq!(error.status, None);
        assert_eq!(error.full_message(), "denied");
    }

    #[test]
    fn test_non_string_fields_render_as_json() {
        let error = error_from(json!({"status": "422", "error": {"field": ["invalid"]}}));
        assert_eq!(error.status, Some(422));
        assert_eq!(error.error.as_deref(), Some(r#"{"field":["invalid"]}"#));
    }
}
