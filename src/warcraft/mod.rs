//! World of Warcraft resource accessors.
//!
//! [`WarcraftClient`] wraps an [`HttpClient`] and exposes one async method per
//! API resource. Each method checks its arguments, fixes the resource path and
//! hands off to [`HttpClient::request`]. Nothing here touches the network
//! directly, so every accessor shares the same URL building, credential
//! handling and error classification.
//!
//! # Example
//!
//! ```rust,ignore
//! use battlenet_api::{ApiKey, BattleNetConfig, HttpClient};
//! use battlenet_api::warcraft::CharacterField;
//!
//! let config = BattleNetConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(config);
//! let wow = client.warcraft();
//!
//! let boss = wow.boss(24723).await?;
//! let uther = wow
//!     .character("Emerald Dream", "Uther", &[CharacterField::Items, CharacterField::Stats])
//!     .await?;
//! ```
//!
//! # Argument errors
//!
//! Realm names, character and guild names and tokens must be non-empty. An
//! empty value fails with [`ApiError::InvalidArgument`] before any request is
//! made.

mod characters;
mod data;
mod fields;
mod game;
mod guilds;
mod items;
mod params;
mod pets;

pub use fields::{CharacterField, GuildField};
pub use params::{PetStatsQuery, PvpBracket};

use serde_json::{Map, Value};

use crate::clients::{
    ApiError, ArgumentError, HttpClient, HttpRequest, ReqwestTransport, RequestPath, Transport,
};

/// Accessors for the World of Warcraft community API.
///
/// Obtained from [`HttpClient::warcraft`]. The accessor borrows the client, so
/// it is cheap to create and can be created per call.
#[derive(Debug)]
pub struct WarcraftClient<'a, T = ReqwestTransport> {
    http: &'a HttpClient<T>,
}

impl<'a, T: Transport> WarcraftClient<'a, T> {
    /// Creates accessors that send requests through `http`.
    #[must_use]
    pub const fn new(http: &'a HttpClient<T>) -> Self {
        Self { http }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn http(&self) -> &'a HttpClient<T> {
        self.http
    }

    async fn get(
        &self,
        path: impl Into<RequestPath>,
        query: Map<String, Value>,
    ) -> Result<Value, ApiError> {
        self.http.get(path, query).await
    }

    async fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        self.http.request(request).await
    }
}

impl<T> Clone for WarcraftClient<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WarcraftClient<'_, T> {}

/// Turns a realm name into the form used in resource paths.
///
/// Every space becomes a hyphen and the result is lowercased.
///
/// # Example
///
/// ```rust
/// use battlenet_api::warcraft::normalize_realm;
///
/// assert_eq!(normalize_realm("Emerald Dream"), "emerald-dream");
/// assert_eq!(normalize_realm("Twisting Nether EU"), "twisting-nether-eu");
/// ```
#[must_use]
pub fn normalize_realm(realm: &str) -> String {
    realm.replace(' ', "-").to_lowercase()
}

/// Fails with [`ArgumentError::Empty`] if `value` is empty or whitespace.
fn require_non_empty<'v>(field: &'static str, value: &'v str) -> Result<&'v str, ArgumentError> {
    if value.trim().is_empty() {
        tracing::debug!("Rejected empty \"{}\" argument", field);
        return Err(ArgumentError::Empty { field });
    }
    Ok(value)
}

/// Validates a realm argument and normalizes it.
fn realm_segment(realm: &str) -> Result<String, ArgumentError> {
    require_non_empty("realm", realm).map(normalize_realm)
}
