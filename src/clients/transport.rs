//! The transport seam between the request pipeline and the network.
//!
//! The pipeline never talks to the network directly. It assembles a
//! [`TransportRequest`] and hands it to a [`Transport`], which returns either an
//! [`HttpResponse`] or a [`TransportError`]. [`ReqwestTransport`] is the
//! default implementation; tests substitute their own.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::future::Future;
//!
//! use battlenet_api::clients::{HttpResponse, Transport, TransportError, TransportRequest};
//!
//! /// Answers every request with an empty JSON object.
//! struct Canned;
//!
//! impl Transport for Canned {
//!     fn send(
//!         &self,
//!         _request: TransportRequest,
//!     ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
//!         async {
//!             Ok(HttpResponse::new(200, HashMap::new(), "{}")
//!                 .with_header("content-type", "application/json"))
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// A fully assembled request, ready to go on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The complete URL, query string included.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// The JSON body text for `POST` and `PUT` requests.
    pub body: Option<String>,
}

/// Performs the network call for a [`TransportRequest`].
///
/// Implementations must not interpret the response: any status code and any
/// body are returned as an [`HttpResponse`]. Only failures that prevent a
/// response from being received become a [`TransportError`].
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// The default [`Transport`], backed by a `reqwest` client with rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default reqwest client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Creates a transport around an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        async move {
            let mut req_builder = self
                .client
                .request(Self::to_reqwest_method(request.method), &request.url);

            for (key, value) in &request.headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(body) = request.body {
                req_builder = req_builder.body(body);
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let body = res.text().await?;

            Ok(HttpResponse::new(code, headers, body))
        }
    }
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};
