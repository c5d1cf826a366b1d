//! HTTP client for Spotify Web API communication.
//!
//! This module provides the [`HttpClient`] type: the single request
//! executor that owns the retry/backoff policy, the token-refresh protocol,
//! and the error classification deciding whether a failed call is retried,
//! re-authenticated, or surfaced to the caller.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::auth::TokenSource;
use crate::clients::errors::{ApiResponseError, HttpError};
use crate::clients::http_request::RequestOptions;
use crate::config::ClientConfig;

/// The media type used for request and response bodies.
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for making authenticated requests to the Spotify Web API.
///
/// The client handles:
/// - URL construction from the configured API origin and a relative path
/// - Default JSON headers and bearer-token authorization
/// - Automatic token refresh on 401 (at most once per logical call)
/// - Rate-limit waits driven by the `Retry-After` header (opt-in)
/// - Bounded retries with optional delay on 5xx responses
///
/// # Concurrency
///
/// `HttpClient` is `Send + Sync`; multiple logical calls may be in flight
/// concurrently and are fully independent. The only shared state is the
/// token source, and the client does not serialize refreshes across
/// concurrent calls: simultaneous 401s each trigger their own refresh (see
/// [`TokenProvider`](crate::TokenProvider)). Retry delays are non-blocking
/// timed suspensions. There is no cancellation threaded through the retry
/// loop: once a call begins it runs to success or a terminal failure, so
/// callers wanting cancellation must race the call against an external
/// timeout.
///
/// # Example
///
/// ```rust,ignore
/// use spotify_web_api::{ClientConfig, HttpClient, RequestOptions};
///
/// let config = ClientConfig::builder().retry_on_rate_limit(true).build();
/// let client = HttpClient::new("access-token", config);
///
/// let profile: serde_json::Value = client
///     .request("me", RequestOptions::default())
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Client configuration, including the retry policy and API origin.
    config: ClientConfig,
    /// The token source, swappable at any time via `set_token_source`.
    token_source: RwLock<TokenSource>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with the given token source and
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(token_source: impl Into<TokenSource>, config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            token_source: RwLock::new(token_source.into()),
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replaces the token source used by all subsequent calls.
    ///
    /// In-flight calls that have already resolved a token for their current
    /// attempt are unaffected; they pick up the new source on their next
    /// physical attempt, if any.
    ///
    /// # Panics
    ///
    /// Panics if the token source lock is poisoned.
    pub fn set_token_source(&self, source: impl Into<TokenSource>) {
        *self
            .token_source
            .write()
            .expect("token source lock poisoned") = source.into();
    }

    /// Sends a request and deserializes the response body.
    ///
    /// `path` is a resource path relative to the configured API origin
    /// (e.g., `"me/player/devices"`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The final attempt received a non-successful status
    ///   (`Response`, carrying the extracted message and status code)
    /// - The successful response carried no body (`EmptyBody`)
    /// - The body could not be deserialized (`Deserialize`)
    /// - A token refresh failed (`TokenRefresh`)
    /// - A network error occurred (`Network`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let album: serde_json::Value = client
    ///     .request("albums/0sNOF9WDwhWunNAHPD3Baj", RequestOptions::default())
    ///     .await?;
    /// ```
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let response = self.execute(path, options).await?;
        let body = response.text().await?;
        if body.is_empty() {
            return Err(HttpError::EmptyBody);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends a request whose response carries no meaningful body.
    ///
    /// The response body, if any, is released without being read.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] under the same conditions as
    /// [`request`](Self::request), except that an empty body is expected
    /// and never an error.
    pub async fn request_empty(&self, path: &str, options: RequestOptions) -> Result<(), HttpError> {
        let response = self.execute(path, options).await?;
        // Dropping the response releases the connection and any unread body.
        drop(response);
        Ok(())
    }

    /// Runs the retry/refresh state machine for one logical call and
    /// returns the first successful response.
    ///
    /// Per logical call, at most one token refresh occurs (a second 401
    /// falls through to the terminal-error path), rate-limit waits never
    /// consume the 5xx retry budget, and the budget is decremented once per
    /// 5xx retry.
    async fn execute(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response, HttpError> {
        let RequestOptions {
            method,
            json,
            body,
            query,
            headers,
        } = options;

        let url = self.build_url(path);
        let headers = Self::merge_headers(headers.as_ref());
        // Explicit raw body wins over a structured payload.
        let body = body.or_else(|| json.as_ref().map(serde_json::Value::to_string));

        let mut refresh_attempted = false;
        let mut remaining_retries = self.config.retry_times_on_5xx();
        // Set after a refresh so the immediate retry uses the new token even
        // if the provider has not finished persisting it.
        let mut refreshed_token: Option<String> = None;

        loop {
            let token = refreshed_token
                .take()
                .unwrap_or_else(|| self.current_token());

            let mut builder = self
                .client
                .request(method.as_reqwest(), &url)
                .bearer_auth(&token);

            for (key, value) in &headers {
                builder = builder.header(key, value);
            }
            if let Some(query) = &query {
                builder = builder.query(query);
            }
            if let Some(body) = &body {
                builder = builder.body(body.clone());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();

            if status < 400 {
                return Ok(response);
            }

            if status == 401 && !refresh_attempted && self.can_refresh() {
                refresh_attempted = true;
                tracing::debug!(path, "Received 401, attempting token refresh");
                drop(response);
                refreshed_token = Some(self.refresh_token().await?);
                continue;
            }

            if status == 429 && self.config.retry_on_rate_limit() {
                let wait_seconds = Self::retry_after_seconds(&response);
                if wait_seconds > 0 {
                    tracing::debug!(path, wait_seconds, "Rate limited, waiting before retry");
                    drop(response);
                    tokio::time::sleep(Duration::from_secs(wait_seconds)).await;
                    continue;
                }
                // No usable Retry-After hint; fall through to the terminal path.
            }

            if (500..600).contains(&status) && remaining_retries > 0 {
                remaining_retries -= 1;
                tracing::debug!(path, status, remaining_retries, "Server error, retrying");
                drop(response);
                let delay_ms = self.config.retry_delay_on_5xx_ms();
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                continue;
            }

            // Terminal failure: reading the body consumes the stream.
            let body_text = response.text().await?;
            return Err(ApiResponseError::from_body(status, &body_text).into());
        }
    }

    /// Builds the target URL from the configured origin and a relative path.
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_origin(),
            path.trim_start_matches('/')
        )
    }

    /// Merges the base JSON headers with caller-supplied overrides.
    ///
    /// Caller headers win on name collisions.
    fn merge_headers(overrides: Option<&HashMap<String, String>>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());

        if let Some(extra) = overrides {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        headers
    }

    /// Reads the `Retry-After` header as whole seconds, defaulting to zero
    /// when absent or unparseable.
    fn retry_after_seconds(response: &reqwest::Response) -> u64 {
        response
            .headers()
            .get("Retry-After")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    /// Resolves the current bearer token from the token source.
    fn current_token(&self) -> String {
        self.token_source
            .read()
            .expect("token source lock poisoned")
            .current_token()
    }

    /// Returns `true` if the current token source supports refresh.
    fn can_refresh(&self) -> bool {
        self.token_source
            .read()
            .expect("token source lock poisoned")
            .can_refresh()
    }

    /// Performs one token refresh against the current token source.
    ///
    /// The provider is cloned out of the lock before awaiting so the lock
    /// is never held across a suspension point.
    async fn refresh_token(&self) -> Result<String, HttpError> {
        let provider = self
            .token_source
            .read()
            .expect("token source lock poisoned")
            .provider();

        match provider {
            Some(provider) => provider
                .refresh_access_token()
                .await
                .map_err(HttpError::TokenRefresh),
            // Guarded by can_refresh(); a concurrent swap to a static token
            // loses the refresh capability, so treat it as a failed refresh.
            None => Err(HttpError::TokenRefresh(
                "token source was replaced with a static token during refresh".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction_with_static_token() {
        let client = HttpClient::new("test-token", ClientConfig::default());
        assert_eq!(client.config().api_origin(), "https://api.spotify.com/v1");
    }

    #[test]
    fn test_build_url_joins_origin_and_path() {
        let client = HttpClient::new("test-token", ClientConfig::default());
        assert_eq!(
            client.build_url("me/player"),
            "https://api.spotify.com/v1/me/player"
        );
    }

    #[test]
    fn test_build_url_trims_leading_slash() {
        let client = HttpClient::new("test-token", ClientConfig::default());
        assert_eq!(
            client.build_url("/me/player"),
            "https://api.spotify.com/v1/me/player"
        );
    }

    #[test]
    fn test_merge_headers_defaults_to_json() {
        let headers = HttpClient::merge_headers(None);
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_merge_headers_caller_overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert("Content-Type".to_string(), "image/jpeg".to_string());
        overrides.insert("X-Custom".to_string(), "value".to_string());

        let headers = HttpClient::merge_headers(Some(&overrides));
        assert_eq!(headers.get("Content-Type"), Some(&"image/jpeg".to_string()));
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(headers.get("X-Custom"), Some(&"value".to_string()));
    }

    #[test]
    fn test_set_token_source_swaps_token() {
        let client = HttpClient::new("old-token", ClientConfig::default());
        client.set_token_source("new-token");
        assert_eq!(client.current_token(), "new-token");
    }

    #[test]
    fn test_static_token_source_cannot_refresh() {
        let client = HttpClient::new("test-token", ClientConfig::default());
        assert!(!client.can_refresh());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
