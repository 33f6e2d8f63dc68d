//! HTTP client types for Battle.net API communication.
//!
//! This module provides the shared request pipeline that every resource
//! accessor goes through. It builds request URLs, places request data,
//! attaches credentials, calls a pluggable transport and classifies the
//! response into a payload or a structured error.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async client that runs the pipeline
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response, classified by [`HttpResponse::classify`]
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`UrlBuilder`]: Appends `locale` and `apikey` to every request URL
//! - [`encode_fields`]: Encodes optional response fields
//! - [`Transport`]: The network seam, implemented by [`ReqwestTransport`]
//! - [`ApiError`]: The error every request can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use battlenet_api::{ApiKey, BattleNetConfig, HttpClient, HttpMethod, HttpRequest};
//!
//! let config = BattleNetConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, ["wow", "realm", "status"]).build();
//! let realms = client.request(request).await?;
//! ```
//!
//! # Failures
//!
//! Each request has exactly one outcome. There are no automatic retries: a
//! transport failure, a non-JSON body, a bad status code and a `"nok"`
//! envelope are all returned to the caller as an [`ApiError`].

mod errors;
mod fields;
mod http_client;
mod http_request;
mod http_response;
mod transport;
mod url;

pub use errors::{ApiError, ArgumentError, ErrorKind, TransportError};
pub use fields::{encode_fields, FIELDS_PARAM};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestPath};
pub use http_response::{HttpResponse, JSON_CONTENT_TYPE};
pub use transport::{ReqwestTransport, Transport, TransportRequest};
pub use url::{UrlBuilder, API_KEY_PARAM, LOCALE_PARAM};
