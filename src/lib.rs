//! # Spotify Web API Client Core
//!
//! A resilient, authenticated HTTP client core for the Spotify Web API,
//! providing bearer-token authentication, automatic token refresh,
//! rate-limit handling, and bounded retries on transient server errors.
//!
//! ## Overview
//!
//! This crate provides:
//! - An async request executor with per-call retry/refresh state via
//!   [`HttpClient`]
//! - Swappable token sources (static tokens or refreshable providers) via
//!   [`TokenSource`] and [`TokenProvider`]
//! - A retry policy configured once at construction via [`ClientConfig`]
//! - Best-effort extraction of the API's error envelope into
//!   [`ApiResponseError`]
//!
//! Token acquisition itself (the OAuth authorization-code, PKCE, and
//! client-credentials grants) is out of scope: callers supply tokens
//! through the [`TokenSource`] seam.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spotify_web_api::{ClientConfig, HttpClient, RequestOptions};
//!
//! let config = ClientConfig::builder()
//!     .retry_on_rate_limit(true)
//!     .retry_times_on_5xx(2)
//!     .build();
//!
//! let client = HttpClient::new("access-token", config);
//!
//! // Fetch a resource as structured data
//! let profile: serde_json::Value = client
//!     .request("me", RequestOptions::default())
//!     .await?;
//!
//! // Issue a call whose response has no body
//! use spotify_web_api::HttpMethod;
//! client
//!     .request_empty(
//!         "me/player/pause",
//!         RequestOptions::builder().method(HttpMethod::Put).build(),
//!     )
//!     .await?;
//! ```
//!
//! ## Refreshable Tokens
//!
//! For long-running applications, implement [`TokenProvider`] so the client
//! can recover from expired tokens automatically:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spotify_web_api::{HttpClient, ClientConfig, TokenProvider, TokenSource};
//!
//! let provider: Arc<dyn TokenProvider> = Arc::new(my_oauth_provider);
//! let client = HttpClient::new(TokenSource::Provider(provider), ClientConfig::default());
//!
//! // The first 401 on any call triggers one refresh and a retry.
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Failures surface**: Retries are invisible on success; the final
//!   failure always reaches the caller

pub mod auth;
pub mod clients;
pub mod config;

// Re-export public types at crate root for convenience
pub use auth::{TokenProvider, TokenSource};
pub use clients::{
    ApiResponseError, BoxError, HttpClient, HttpError, HttpMethod, RequestOptions,
    RequestOptionsBuilder,
};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_API_ORIGIN};
