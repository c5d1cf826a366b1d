//! HTTP-specific error types for the Spotify Web API client.
//!
//! This module contains error types for HTTP operations, including API
//! response errors, token refresh failures, and protocol violations.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`ApiResponseError`]: A terminal non-2xx response from the API, after
//!   all applicable recovery paths (token refresh, rate-limit wait, server
//!   error retries) have been exhausted or were not applicable
//! - [`HttpError`]: Unified error type encompassing all failures a request
//!   can surface
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_web_api::{HttpClient, HttpError, RequestOptions};
//!
//! match client.request::<serde_json::Value>("me", RequestOptions::default()).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.status, e.message);
//!     }
//!     Err(HttpError::EmptyBody) => {
//!         println!("Server returned a successful but empty response");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Boxed error type used for failures originating in caller-supplied
/// token providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The wire format of the Spotify Web API error envelope.
///
/// Used only as a best-effort parse target for extracting a human-readable
/// failure message; any parse failure falls back to the raw response text.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// The inner object of the API error envelope.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    status: Option<u16>,
}

/// Error returned when a request terminates with a non-successful response.
///
/// This error carries the HTTP status code of the final attempt and a
/// best-effort human-readable message extracted from the response body.
///
/// # Message Extraction
///
/// - An empty response body produces the literal message `"null"`
/// - A body matching the API error envelope
///   (`{"error":{"message":...,"status":...}}`) produces the envelope's
///   `message` field
/// - Any other body is used verbatim as the message
///
/// # Example
///
/// ```rust
/// use spotify_web_api::ApiResponseError;
///
/// let error = ApiResponseError {
///     status: 404,
///     message: "Not found".to_string(),
/// };
///
/// println!("Status {}: {}", error.status, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the final response.
    pub status: u16,
    /// Human-readable error message extracted from the response body.
    pub message: String,
}

impl ApiResponseError {
    /// Builds an error from a terminal response's status code and body text.
    ///
    /// Applies the message-extraction rules described on the type: empty
    /// body becomes `"null"`, an error envelope yields its inner message,
    /// and anything else is used as-is.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            "null".to_string()
        } else {
            serde_json::from_str::<ErrorEnvelope>(body)
                .map_or_else(|_| body.to_string(), |envelope| envelope.error.message)
        };

        Self { status, message }
    }
}

/// Unified error type for all request failures.
///
/// This enum provides a single error type for the request executor, making
/// it easier to handle errors at API boundaries. Use pattern matching to
/// handle specific failure types; retries and token refreshes that succeed
/// never surface here.
///
/// # Example
///
/// ```rust,ignore
/// use spotify_web_api::HttpError;
///
/// match result {
///     Ok(body) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* inspect e.status */ }
///     Err(HttpError::TokenRefresh(e)) => { /* re-authenticate */ }
///     Err(HttpError::Network(e)) => { /* handle transport failure */ }
///     Err(e) => { /* protocol violation or bad body */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// A terminal API response error (status >= 400, not recovered).
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// A successful response was expected to carry a body but carried none.
    ///
    /// This signals a contract violation between client and server rather
    /// than an API-reported failure.
    #[error("Expected a response body, but the server returned none.")]
    EmptyBody,

    /// A successful response body could not be deserialized.
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The token provider's refresh operation itself failed.
    #[error("Token refresh failed: {0}")]
    TokenRefresh(#[source] BoxError),

    /// Network or connection error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_with_empty_body_uses_null_literal() {
        let error = ApiResponseError::from_body(403, "");
        assert_eq!(error.status, 403);
        assert_eq!(error.message, "null");
    }

    #[test]
    fn test_from_body_extracts_envelope_message() {
        let body = r#"{"error":{"message":"Not found","status":404}}"#;
        let error = ApiResponseError::from_body(404, body);
        assert_eq!(error.status, 404);
        assert_eq!(error.message, "Not found");
    }

    #[test]
    fn test_from_body_with_unparseable_body_uses_raw_text() {
        let error = ApiResponseError::from_body(500, "Internal Server Error");
        assert_eq!(error.status, 500);
        assert_eq!(error.message, "Internal Server Error");
    }

    #[test]
    fn test_from_body_with_json_missing_envelope_uses_raw_text() {
        let body = r#"{"detail":"unexpected shape"}"#;
        let error = ApiResponseError::from_body(400, body);
        assert_eq!(error.message, body);
    }

    #[test]
    fn test_from_body_accepts_envelope_without_status_field() {
        let body = r#"{"error":{"message":"invalid id"}}"#;
        let error = ApiResponseError::from_body(400, body);
        assert_eq!(error.message, "invalid id");
    }

    #[test]
    fn test_api_response_error_displays_message() {
        let error = ApiResponseError {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(error.to_string(), "Not found");
    }

    #[test]
    fn test_empty_body_error_message() {
        let error = HttpError::EmptyBody;
        assert!(error.to_string().contains("Expected a response body"));
    }

    #[test]
    fn test_token_refresh_error_wraps_source() {
        let source: BoxError = "grant revoked".into();
        let error = HttpError::TokenRefresh(source);
        assert!(error.to_string().contains("grant revoked"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &ApiResponseError {
            status: 400,
            message: "test".to_string(),
        };
        let _ = response_error;

        let http_error: &dyn std::error::Error = &HttpError::EmptyBody;
        let _ = http_error;
    }
}
