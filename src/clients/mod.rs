//! HTTP client types for Spotify Web API communication.
//!
//! This module provides the request-execution layer for making
//! authenticated requests to the Spotify Web API. It handles URL and body
//! construction, bearer authorization, retry logic, and error
//! classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async request executor
//! - [`RequestOptions`]: Options describing a single call
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE, PATCH)
//! - [`HttpError`]: Unified error type for all request failures
//! - [`ApiResponseError`]: The terminal, caller-visible API failure
//!
//! # Retry Behavior
//!
//! The client implements automatic recovery for transient failures,
//! tracked per logical call:
//!
//! - **401 (Unauthorized)**: when the token source can refresh, one refresh
//!   is attempted and the request retried with the new token. A second 401
//!   surfaces as an error (no refresh loop).
//! - **429 (Rate Limited)**: when enabled via
//!   [`ClientConfig::retry_on_rate_limit`](crate::ClientConfig), waits for
//!   the `Retry-After` hint (seconds) and retries, without limit and
//!   without consuming the 5xx retry budget. Absent or zero hints surface
//!   the error instead.
//! - **5xx (Server Error)**: retried up to the configured count, with an
//!   optional fixed delay between attempts.
//! - **Other errors (4xx)**: surfaced immediately without retry.
//!
//! Recovery is invisible to the caller except for added latency; only the
//! final, non-recoverable failure crosses the boundary.

mod errors;
mod http_client;
mod http_request;

pub use errors::{ApiResponseError, BoxError, HttpError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, RequestOptions, RequestOptionsBuilder};
