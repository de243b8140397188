//! The API client handed to resource operations.
//!
//! [`ApiClient`] bundles a [`PageFetcher`] with the [`Routes`] table. It is
//! passed explicitly into every resource call; there is no process-wide
//! client.

use crate::clients::{HttpClient, HttpError, PageFetcher};
use crate::config::AutomaticConfig;
use crate::rest::Routes;

/// A fetcher plus the route table it resolves URLs against.
///
/// # Example
///
/// ```rust,ignore
/// use automatic_api::{ApiClient, AutomaticConfig, AccessToken};
/// use automatic_api::rest::{ListOptions, Resource};
/// use automatic_api::rest::resources::Trip;
///
/// let config = AutomaticConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(&config)?;
/// let trips = Trip::all(&client, ListOptions::default()).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient<F = HttpClient> {
    fetcher: F,
    routes: Routes,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient<HttpClient> {
    /// Creates a client backed by [`HttpClient`], with the default routes
    /// rooted at the configured API host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &AutomaticConfig) -> Result<Self, HttpError> {
        let fetcher = HttpClient::new(config)?;
        let routes = Routes::new(config.api_host());

        tracing::debug!("Automatic API client targeting {}", config.api_host());

        Ok(Self { fetcher, routes })
    }
}

impl<F: PageFetcher> ApiClient<F> {
    /// Creates a client from any fetcher and route table.
    #[must_use]
    pub const fn with_fetcher(fetcher: F, routes: Routes) -> Self {
        Self { fetcher, routes }
    }

    /// Returns the fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the route table.
    #[must_use]
    pub const fn routes(&self) -> &Routes {
        &self.routes
    }
}
