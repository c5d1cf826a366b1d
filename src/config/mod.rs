//! Configuration types for the Spotify Web API client.
//!
//! This module provides [`ClientConfig`] and [`ClientConfigBuilder`] for
//! configuring the retry behavior of the HTTP client.
//!
//! # Example
//!
//! ```rust
//! use spotify_web_api::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .retry_times_on_5xx(2)
//!     .retry_delay_on_5xx_ms(500)
//!     .retry_on_rate_limit(true)
//!     .build();
//!
//! assert_eq!(config.retry_times_on_5xx(), 2);
//! ```

/// The default API origin for the Spotify Web API.
pub const DEFAULT_API_ORIGIN: &str = "https://api.spotify.com/v1";

/// Configuration for the Spotify Web API client.
///
/// Holds the retry policy applied to every request made by the client, plus
/// an optional API origin override. Set once at construction; read-only
/// thereafter.
///
/// # Defaults
///
/// The default configuration performs no automatic recovery: zero retries
/// on 5xx responses, no delay, and no waiting on rate-limit responses.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    retry_times_on_5xx: u32,
    retry_delay_on_5xx_ms: u64,
    retry_on_rate_limit: bool,
    api_origin: String,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Returns the number of times a request is retried on a 5xx response.
    #[must_use]
    pub const fn retry_times_on_5xx(&self) -> u32 {
        self.retry_times_on_5xx
    }

    /// Returns the delay in milliseconds before each 5xx retry.
    #[must_use]
    pub const fn retry_delay_on_5xx_ms(&self) -> u64 {
        self.retry_delay_on_5xx_ms
    }

    /// Returns whether the client waits and retries on rate-limited (429)
    /// responses carrying a `Retry-After` hint.
    #[must_use]
    pub const fn retry_on_rate_limit(&self) -> bool {
        self.retry_on_rate_limit
    }

    /// Returns the API origin requests are issued against.
    #[must_use]
    pub fn api_origin(&self) -> &str {
        &self.api_origin
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Every field has a default, so [`build`](Self::build) is infallible.
///
/// # Defaults
///
/// - `retry_times_on_5xx`: 0 (no retries)
/// - `retry_delay_on_5xx_ms`: 0 (no delay)
/// - `retry_on_rate_limit`: `false`
/// - `api_origin`: [`DEFAULT_API_ORIGIN`]
///
/// # Example
///
/// ```rust
/// use spotify_web_api::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .retry_on_rate_limit(true)
///     .api_origin("http://localhost:8080/v1")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    retry_times_on_5xx: Option<u32>,
    retry_delay_on_5xx_ms: Option<u64>,
    retry_on_rate_limit: Option<bool>,
    api_origin: Option<String>,
}

impl ClientConfigBuilder {
    /// Sets the number of times a request is retried on a 5xx response.
    #[must_use]
    pub const fn retry_times_on_5xx(mut self, times: u32) -> Self {
        self.retry_times_on_5xx = Some(times);
        self
    }

    /// Sets the delay in milliseconds before each 5xx retry.
    #[must_use]
    pub const fn retry_delay_on_5xx_ms(mut self, delay_ms: u64) -> Self {
        self.retry_delay_on_5xx_ms = Some(delay_ms);
        self
    }

    /// Enables or disables waiting and retrying on rate-limited responses.
    #[must_use]
    pub const fn retry_on_rate_limit(mut self, enabled: bool) -> Self {
        self.retry_on_rate_limit = Some(enabled);
        self
    }

    /// Overrides the API origin (scheme, host, and base path).
    ///
    /// Useful for routing requests through a proxy or a mock server in
    /// tests. A trailing slash is trimmed.
    #[must_use]
    pub fn api_origin(mut self, origin: impl Into<String>) -> Self {
        self.api_origin = Some(origin.into());
        self
    }

    /// Builds the [`ClientConfig`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let api_origin = self
            .api_origin
            .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());

        ClientConfig {
            retry_times_on_5xx: self.retry_times_on_5xx.unwrap_or(0),
            retry_delay_on_5xx_ms: self.retry_delay_on_5xx_ms.unwrap_or(0),
            retry_on_rate_limit: self.retry_on_rate_limit.unwrap_or(false),
            api_origin: api_origin.trim_end_matches('/').to_string(),
        }
    }
}
