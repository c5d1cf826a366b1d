//! Token source types for bearer authentication.
//!
//! This module provides the [`TokenSource`] enum and the [`TokenProvider`]
//! trait used by the HTTP client to resolve and refresh bearer tokens.
//!
//! # Token Sources
//!
//! The client accepts two kinds of token sources:
//!
//! - **Static tokens**: a plain bearer-token string with no refresh
//!   capability. A 401 response is never retried via refresh.
//!
//! - **Providers**: a caller-supplied [`TokenProvider`] implementation that
//!   exposes the current best-known token and an asynchronous refresh
//!   operation (typically backed by an OAuth refresh-token grant).
//!
//! # Security
//!
//! [`TokenSource`] implements a custom [`Debug`] that masks the token value,
//! preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use spotify_web_api::TokenSource;
//!
//! let source = TokenSource::from("BQDe...token");
//! assert_eq!(source.current_token(), "BQDe...token");
//! assert!(!source.can_refresh());
//!
//! // Debug output masks the token value
//! let debug_output = format!("{source:?}");
//! assert!(debug_output.contains("*****"));
//! assert!(!debug_output.contains("BQDe"));
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::BoxError;

/// A source of bearer tokens with an asynchronous refresh capability.
///
/// Implementations own their token state: a successful
/// [`refresh_access_token`](Self::refresh_access_token) must persist the new
/// token so that subsequent [`access_token`](Self::access_token) calls
/// return it. The client re-reads `access_token()` before every physical
/// attempt, so a refreshed token is picked up automatically.
///
/// # Concurrency
///
/// The client does not serialize refreshes across concurrent logical calls:
/// if several in-flight requests receive 401 at the same time, each triggers
/// its own refresh. Implementations that cannot tolerate concurrent refresh
/// requests must deduplicate internally.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use spotify_web_api::{BoxError, TokenProvider};
/// use std::sync::Mutex;
///
/// struct RefreshingProvider {
///     token: Mutex<String>,
/// }
///
/// #[async_trait]
/// impl TokenProvider for RefreshingProvider {
///     fn access_token(&self) -> String {
///         self.token.lock().unwrap().clone()
///     }
///
///     async fn refresh_access_token(&self) -> Result<String, BoxError> {
///         // Perform the refresh grant here.
///         let new_token = "new-token".to_string();
///         *self.token.lock().unwrap() = new_token.clone();
///         Ok(new_token)
///     }
/// }
/// ```
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the current best-known access token.
    fn access_token(&self) -> String;

    /// Performs a token refresh and returns the new access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh itself fails (for example, a revoked
    /// refresh grant or an unreachable authorization server).
    async fn refresh_access_token(&self) -> Result<String, BoxError>;
}

/// The token source used by the HTTP client for bearer authentication.
///
/// Either a static token string or a shared [`TokenProvider`]. The client
/// holds the source behind a lock and callers may swap it at any time via
/// [`HttpClient::set_token_source`](crate::HttpClient::set_token_source).
#[derive(Clone)]
pub enum TokenSource {
    /// A fixed bearer token with no refresh capability.
    Static(String),
    /// A dynamic provider that can refresh its token.
    Provider(Arc<dyn TokenProvider>),
}

impl TokenSource {
    /// Returns the current best-known access token.
    #[must_use]
    pub fn current_token(&self) -> String {
        match self {
            Self::Static(token) => token.clone(),
            Self::Provider(provider) => provider.access_token(),
        }
    }

    /// Returns `true` if this source can refresh its token.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        matches!(self, Self::Provider(_))
    }

    /// Returns the underlying provider, if this source has one.
    #[must_use]
    pub fn provider(&self) -> Option<Arc<dyn TokenProvider>> {
        match self {
            Self::Static(_) => None,
            Self::Provider(provider) => Some(Arc::clone(provider)),
        }
    }
}

impl From<String> for TokenSource {
    fn from(token: String) -> Self {
        Self::Static(token)
    }
}

impl From<&str> for TokenSource {
    fn from(token: &str) -> Self {
        Self::Static(token.to_string())
    }
}

impl From<Arc<dyn TokenProvider>> for TokenSource {
    fn from(provider: Arc<dyn TokenProvider>) -> Self {
        Self::Provider(provider)
    }
}

impl fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(_) => f.write_str("TokenSource::Static(*****)"),
            Self::Provider(_) => f.write_str("TokenSource::Provider(*****)"),
        }
    }
}
