//! The page-fetching seam between the pagination loop and the transport.

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Issues a single GET and returns the raw response.
///
/// Implementations must return non-2xx responses as `Ok`: classifying the
/// status is the caller's job. Only transport failures are errors.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation; tests substitute scripted fetchers.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use automatic_api::clients::{HttpError, HttpRequest, HttpResponse, PageFetcher};
///
/// struct Empty;
///
/// impl PageFetcher for Empty {
///     async fn fetch(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(200, HashMap::new(), r#"{"results": []}"#))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Sends `request` and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or the transport fails.
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).fetch(request).await
    }
}
