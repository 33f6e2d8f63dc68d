//! HTTP request types for the Battle.net API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, along with
//! [`HttpMethod`] and [`RequestPath`].

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::clients::errors::ArgumentError;
use crate::config::AccessToken;

/// HTTP methods accepted by the request pipeline.
///
/// Parsing is case-insensitive and display is always uppercase, so a method
/// is normalized the moment it becomes an `HttpMethod`.
///
/// # Example
///
/// ```rust
/// use battlenet_api::HttpMethod;
///
/// let method: HttpMethod = "get".parse().unwrap();
/// assert_eq!(method, HttpMethod::Get);
/// assert_eq!(method.to_string(), "GET");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method.
    Get,
    /// HTTP POST method.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP HEAD method.
    Head,
    /// HTTP DELETE method.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Head => "HEAD",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if request data is sent as a JSON body rather than
    /// as query parameters.
    #[must_use]
    pub const fn sends_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "HEAD" => Ok(Self::Head),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ArgumentError::Invalid {
                field: "method",
                reason: format!("unsupported HTTP method '{s}'"),
            }),
        }
    }
}

/// The path of a request, relative to the API base URL.
///
/// Segments are percent-encoded one by one when the URL is built, so a
/// segment containing `/` stays a single path level. A raw path is used as-is.
///
/// # Example
///
/// ```rust
/// use battlenet_api::RequestPath;
///
/// let path = RequestPath::from(["wow", "guild", "a/b"]);
/// assert_eq!(path.render(), "wow/guild/a%2Fb");
///
/// let raw = RequestPath::from("wow/realm/status");
/// assert_eq!(raw.render(), "wow/realm/status");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestPath {
    /// Individual path segments, encoded independently.
    Segments(Vec<String>),
    /// A pre-joined path, passed through unchanged.
    Raw(String),
}

impl RequestPath {
    /// Renders the path without a leading slash.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Segments(segments) => segments
                .iter()
                .map(|segment| urlencoding::encode(segment))
                .collect::<Vec<_>>()
                .join("/"),
            Self::Raw(path) => path.trim_start_matches('/').to_string(),
        }
    }
}

impl From<Vec<String>> for RequestPath {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl<const N: usize> From<[&str; N]> for RequestPath {
    fn from(segments: [&str; N]) -> Self {
        Self::Segments(segments.iter().map(ToString::to_string).collect())
    }
}

impl From<&str> for RequestPath {
    fn from(path: &str) -> Self {
        Self::Raw(path.to_string())
    }
}

impl From<String> for RequestPath {
    fn from(path: String) -> Self {
        Self::Raw(path)
    }
}

/// A request to be sent through the pipeline.
///
/// Built fresh for each call with [`HttpRequest::builder`] and consumed once.
///
/// # Example
///
/// ```rust
/// use battlenet_api::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, ["wow", "character", "medivh", "Uther"])
///     .param("fields", "items,stats")
///     .build();
///
/// assert_eq!(request.data["fields"], "items,stats");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base URL.
    pub path: RequestPath,
    /// Query parameters for read methods, or the JSON body for `POST`/`PUT`.
    pub data: Map<String, Value>,
    /// A per-user token sent as a bearer `Authorization` header.
    pub token: Option<AccessToken>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<RequestPath>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: RequestPath,
    data: Map<String, Value>,
    token: Option<AccessToken>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<RequestPath>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            data: Map::new(),
            token: None,
        }
    }

    /// Merges a map of parameters into the request data.
    ///
    /// Later values overwrite earlier ones with the same key.
    #[must_use]
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data.extend(data);
        self
    }

    /// Adds a single parameter to the request data.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Sets the per-user bearer token.
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            data: self.data,
            token: self.token,
        }
    }
}
