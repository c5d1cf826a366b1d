//! Request option types for the Spotify Web API client.
//!
//! This module provides the [`RequestOptions`] type and its builder for
//! describing a single API call.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods supported by the Spotify Web API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
    /// HTTP PATCH method for partial updates.
    Patch,
}

impl HttpMethod {
    /// Returns the equivalent `reqwest` method.
    #[must_use]
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Patch => reqwest::Method::PATCH,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
            Self::Patch => write!(f, "PATCH"),
        }
    }
}

/// Options for a single API request.
///
/// Describes everything about one logical call apart from the path and the
/// expected response shape: method, payload, query parameters, and header
/// overrides. Immutable once built.
///
/// The default options describe a bare GET request with no payload.
///
/// # Body Precedence
///
/// If both a raw `body` and a `json` payload are set, the raw body wins and
/// the JSON payload is ignored.
///
/// # Example
///
/// ```rust
/// use spotify_web_api::{HttpMethod, RequestOptions};
/// use serde_json::json;
///
/// // GET with query parameters
/// let search = RequestOptions::builder()
///     .query_param("q", "daft punk")
///     .query_param("type", "artist")
///     .build();
///
/// // PUT with a JSON payload
/// let play = RequestOptions::builder()
///     .method(HttpMethod::Put)
///     .json(json!({"context_uri": "spotify:album:5ht7ItJgpBH7W6vJ5BqpPr"}))
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// JSON payload to serialize as the request body.
    pub json: Option<serde_json::Value>,
    /// Raw request body; takes precedence over `json` when both are set.
    pub body: Option<String>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Header overrides, applied on top of the client's base headers.
    pub headers: Option<HashMap<String, String>>,
}

impl RequestOptions {
    /// Creates a new builder for constructing `RequestOptions`.
    #[must_use]
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }
}

/// Builder for constructing [`RequestOptions`] instances.
///
/// Provides a fluent API for building request options. Every field is
/// optional, so [`build`](Self::build) is infallible.
#[derive(Debug, Default)]
pub struct RequestOptionsBuilder {
    method: HttpMethod,
    json: Option<serde_json::Value>,
    body: Option<String>,
    query: Option<HashMap<String, String>>,
    headers: Option<HashMap<String, String>>,
}

impl RequestOptionsBuilder {
    /// Sets the HTTP method. Defaults to GET.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets a JSON payload to serialize as the request body.
    #[must_use]
    pub fn json(mut self, json: impl Into<serde_json::Value>) -> Self {
        self.json = Some(json.into());
        self
    }

    /// Sets a raw request body, overriding any JSON payload.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all header overrides at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds a single header override.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`RequestOptions`].
    #[must_use]
    pub fn build(self) -> RequestOptions {
        RequestOptions {
            method: self.method,
            json: self.json,
            body: self.body,
            query: self.query,
            headers: self.headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_http_method_maps_to_reqwest() {
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Patch.as_reqwest(), reqwest::Method::PATCH);
    }

    #[test]
    fn test_default_options_are_bare_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, HttpMethod::Get);
        assert!(options.json.is_none());
        assert!(options.body.is_none());
        assert!(options.query.is_none());
        assert!(options.headers.is_none());
    }

    #[test]
    fn test_builder_with_json_payload() {
        let options = RequestOptions::builder()
            .method(HttpMethod::Post)
            .json(json!({"uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"]}))
            .build();

        assert_eq!(options.method, HttpMethod::Post);
        assert!(options.json.is_some());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_builder_with_query_params() {
        let options = RequestOptions::builder()
            .query_param("limit", "50")
            .query_param("offset", "100")
            .build();

        let query = options.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("offset"), Some(&"100".to_string()));
    }

    #[test]
    fn test_builder_with_header_overrides() {
        let options = RequestOptions::builder()
            .header("Content-Type", "image/jpeg")
            .build();

        let headers = options.headers.unwrap();
        assert_eq!(headers.get("Content-Type"), Some(&"image/jpeg".to_string()));
    }

    #[test]
    fn test_raw_body_and_json_can_coexist() {
        // Precedence is resolved by the client: raw body wins.
        let options = RequestOptions::builder()
            .json(json!({"ignored": true}))
            .body("raw payload")
            .build();

        assert!(options.json.is_some());
        assert_eq!(options.body.as_deref(), Some("raw payload"));
    }
}
