//! Configuration types for the Automatic API client.
//!
//! # Overview
//!
//! - [`AutomaticConfig`]: The configuration struct holding all client settings
//! - [`AutomaticConfigBuilder`]: A builder for constructing [`AutomaticConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`ApiHost`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use automatic_api::{AutomaticConfig, AccessToken, ApiHost};
//!
//! let config = AutomaticConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .api_host(ApiHost::new("https://api.automatic.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiHost};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Automatic API client.
///
/// # Thread Safety
///
/// `AutomaticConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use automatic_api::{AutomaticConfig, AccessToken};
///
/// let config = AutomaticConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .user_agent_prefix("TripSync/2.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_host().as_ref(), "https://api.automatic.com");
/// assert_eq!(config.user_agent_prefix(), Some("TripSync/2.0"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomaticConfig {
    access_token: Option<AccessToken>,
    api_host: ApiHost,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AutomaticConfig {
    /// Creates a new builder for constructing an `AutomaticConfig`.
    #[must_use]
    pub fn builder() -> AutomaticConfigBuilder {
        AutomaticConfigBuilder::new()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify AutomaticConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AutomaticConfig>();
};

/// Builder for constructing [`AutomaticConfig`] instances.
///
/// # Defaults
///
/// - `access_token`: `None` (requests are sent without `Authorization`)
/// - `api_host`: [`ApiHost::DEFAULT`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (transport default)
#[derive(Debug, Default)]
pub struct AutomaticConfigBuilder {
    access_token: Option<AccessToken>,
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AutomaticConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout applied by the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`AutomaticConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<AutomaticConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(AutomaticConfig {
            access_token: self.access_token,
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
