//! The request pipeline.
//!
//! This module provides the [`HttpClient`] type. Every resource accessor in the
//! crate funnels through [`HttpClient::request`], which builds the URL, places
//! the request data, attaches credentials, calls the transport once and
//! classifies the response.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::errors::{ApiError, TransportError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestPath};
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::clients::url::UrlBuilder;
use crate::config::{BattleNetConfig, Locale};
use crate::warcraft::WarcraftClient;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Battle.net API.
///
/// The client handles:
/// - URL construction with `locale` and `apikey` on every request
/// - Default headers including User-Agent and content type
/// - Query/body placement by HTTP method
/// - Bearer token injection for per-user requests
/// - Response classification into a payload or an [`ApiError`]
///
/// There are no retries. Every failure is final for that call.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and keeps no per-request state, so one client
/// can serve concurrent requests from many tasks.
///
/// # Example
///
/// ```rust,ignore
/// use battlenet_api::{ApiKey, BattleNetConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let config = BattleNetConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, ["wow", "boss", "24723"]).build();
/// let boss = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient<T = ReqwestTransport> {
    transport: T,
    config: BattleNetConfig,
    url_builder: UrlBuilder,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient<ReqwestTransport> {
    /// Creates a client that sends requests with the default reqwest transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. See
    /// [`ReqwestTransport::new`].
    #[must_use]
    pub fn new(config: BattleNetConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> HttpClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: BattleNetConfig, transport: T) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}battlenet-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            url_builder: UrlBuilder::from_config(&config),
            transport,
            config,
            default_headers,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &BattleNetConfig {
        &self.config
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.url_builder.base_uri()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a new client that is identical except for its locale.
    ///
    /// The existing client is not modified, so requests already in flight
    /// keep the locale they started with.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self
    where
        T: Clone,
    {
        Self::with_transport(self.config.with_locale(locale), self.transport.clone())
    }

    /// Returns the World of Warcraft accessors, borrowing this client.
    #[must_use]
    pub const fn warcraft(&self) -> WarcraftClient<'_, T> {
        WarcraftClient::new(self)
    }

    /// Assembles the wire-level request without sending it.
    ///
    /// - `POST` and `PUT` send `data` as a JSON body; every other method
    ///   sends it as query parameters.
    /// - A token becomes an `Authorization: Bearer` header, never a query
    ///   parameter.
    #[must_use]
    pub fn prepare(&self, request: HttpRequest) -> TransportRequest {
        let HttpRequest {
            http_method,
            path,
            data,
            token,
        } = request;

        let (url, body) = if http_method.sends_body() {
            (
                self.url_builder.build(&path, &Map::new()),
                Some(Value::Object(data).to_string()),
            )
        } else {
            (self.url_builder.build(&path, &data), None)
        };

        let mut headers = self.default_headers.clone();
        if let Some(token) = token {
            headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        TransportRequest {
            method: http_method,
            url,
            headers,
            body,
        }
    }

    /// Sends a request through the pipeline.
    ///
    /// The transport is called exactly once. A transport failure is returned
    /// immediately without decoding; otherwise the response is classified
    /// by [`HttpResponse::classify`](crate::clients::HttpResponse::classify).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - The transport fails or times out (`Transport`)
    /// - A JSON body does not parse (`Decode`)
    /// - A successful response is not JSON (`UnsupportedContentType`)
    /// - The status is 300 or more with no reason (`HttpStatus`)
    /// - The API reports a failure in its envelope (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<Value, ApiError> {
        let method = request.http_method;
        let path = request.path.render();

        tracing::debug!("Sending {} request to {}", method, path);

        let prepared = self.prepare(request);
        let sent = self.transport.send(prepared);

        let response = match self.config.timeout() {
            Some(timeout) => tokio::time::timeout(timeout, sent)
                .await
                .map_err(|_| TransportError::Timeout(timeout))?,
            None => sent.await,
        };

        let response = response.map_err(|e| {
            tracing::debug!("{} {} failed in transport: {}", method, path, e);
            ApiError::Transport(e)
        })?;

        response.classify().map_err(|e| {
            tracing::debug!("{} {} failed: {}", method, path, e);
            e
        })
    }

    /// Sends a `GET` request with the given query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        path: impl Into<RequestPath>,
        query: Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .data(query)
            .build();
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ErrorKind;
    use crate::clients::HttpResponse;
    use crate::config::{AccessToken, ApiKey, Region};
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;

    /// Returns a canned response (or a transport failure) and records requests.
    #[derive(Debug, Default)]
    struct RecordingTransport {
        response: Option<HttpResponse>,
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl RecordingTransport {
        fn responding(code: u16, body: &str) -> Self {
            Self {
                response: Some(
                    HttpResponse::new(code, HashMap::new(), body)
                        .with_header("content-type", "application/json;charset=UTF-8"),
                ),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<TransportRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn send(
            &self,
            request: TransportRequest,
        ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
            self.requests.lock().unwrap().push(request);
            let result = self
                .response
                .clone()
                .ok_or_else(|| TransportError::Other("connection refused".to_string()));
            async move { result }
        }
    }

    fn create_test_config() -> BattleNetConfig {
        BattleNetConfig::builder()
            .api_key(ApiKey::new("123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_region_endpoint() {
        let config = BattleNetConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .region(Region::Eu)
            .build()
            .unwrap();
        let client = HttpClient::with_transport(config, RecordingTransport::default());

        assert_eq!(client.base_uri(), "https://eu.api.battle.net");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("battlenet-api-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BattleNetConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::with_transport(config, RecordingTransport::default());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | battlenet-api-rust"));
    }

    #[test]
    fn test_get_places_data_in_query() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());
        let request = HttpRequest::builder(HttpMethod::Get, ["this", "that"])
            .param("hey", "there")
            .build();

        let prepared = client.prepare(request);

        assert_eq!(prepared.method, HttpMethod::Get);
        assert_eq!(
            prepared.url,
            "https://us.api.battle.net/this/that?hey=there&locale=en_US&apikey=123"
        );
        assert!(prepared.body.is_none());
    }

    #[test]
    fn test_post_and_put_place_data_in_body() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());

        for method in [HttpMethod::Post, HttpMethod::Put] {
            let request = HttpRequest::builder(method, "wow/thing")
                .param("name", "Uther")
                .build();
            let prepared = client.prepare(request);

            assert_eq!(
                prepared.url,
                "https://us.api.battle.net/wow/thing?locale=en_US&apikey=123"
            );
            let body: Value = serde_json::from_str(prepared.body.as_deref().unwrap()).unwrap();
            assert_eq!(body, json!({"name": "Uther"}));
        }
    }

    #[test]
    fn test_post_without_data_sends_empty_object() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());
        let prepared = client.prepare(HttpRequest::builder(HttpMethod::Post, "x").build());
        assert_eq!(prepared.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_token_becomes_bearer_header_not_query() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());
        let request = HttpRequest::builder(HttpMethod::Get, ["wow", "user", "characters"])
            .token(AccessToken::new("user-token").unwrap())
            .build();

        let prepared = client.prepare(request);

        assert_eq!(
            prepared.headers.get("Authorization"),
            Some(&"Bearer user-token".to_string())
        );
        assert!(!prepared.url.contains("user-token"));
        assert!(prepared.url.contains("apikey=123"));
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());
        let prepared = client.prepare(HttpRequest::builder(HttpMethod::Get, "x").build());
        assert!(!prepared.headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn test_request_returns_payload_and_calls_transport_once() {
        let client = HttpClient::with_transport(
            create_test_config(),
            RecordingTransport::responding(200, r#"{"id": 24723, "name": "Skarmtail"}"#),
        );

        let payload = client
            .get(["wow", "boss", "24723"], Map::new())
            .await
            .unwrap();

        assert_eq!(payload["name"], "Skarmtail");
        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].url,
            "https://us.api.battle.net/wow/boss/24723?locale=en_US&apikey=123"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_short_circuits() {
        let client = HttpClient::with_transport(create_test_config(), RecordingTransport::default());

        let error = client.get("wow/boss", Map::new()).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Transport);
        assert!(error.to_string().contains("connection refused"));
        assert_eq!(client.transport().sent().len(), 1);
    }

    #[tokio::test]
    async fn test_nok_envelope_surfaces_as_api_error() {
        let client = HttpClient::with_transport(
            create_test_config(),
            RecordingTransport::responding(200, r#"{"status":"nok","reason":"account not active"}"#),
        );

        let error = client.get("wow/user/characters", Map::new()).await.unwrap_err();
        assert!(matches!(
            error,
            ApiError::Api { code: 200, ref reason } if reason == "account not active"
        ));
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_interfere() {
        let client = HttpClient::with_transport(
            create_test_config(),
            RecordingTransport::responding(200, r#"{"ok": true}"#),
        );

        let (a, b) = tokio::join!(
            client.get(["wow", "item", "18803"], Map::new()),
            client.get(["wow", "spell", "8056"], Map::new()),
        );

        assert!(a.is_ok());
        assert!(b.is_ok());

        let mut urls: Vec<String> = client.transport().sent().into_iter().map(|r| r.url).collect();
        urls.sort();
        assert!(urls[0].contains("/wow/item/18803?"));
        assert!(urls[1].contains("/wow/spell/8056?"));
    }

    #[test]
    fn test_with_locale_returns_new_client() {
        let config = create_test_config();
        let client = HttpClient::new(config);
        let french = client.with_locale(Locale::new("fr_FR").unwrap());

        let request = || HttpRequest::builder(HttpMethod::Get, "wow/zone").build();
        assert!(client.prepare(request()).url.contains("locale=en_US"));
        assert!(french.prepare(request()).url.contains("locale=fr_FR"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
