//! # Battle.net API Rust Client
//!
//! An async client for the Battle.net community API, with typed configuration,
//! a single shared request pipeline and World of Warcraft resource accessors.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BattleNetConfig`] and [`BattleNetConfigBuilder`]
//! - Validated newtypes for API keys, tokens, locales and host overrides
//! - Regional endpoints via [`Region`]
//! - A request pipeline ([`HttpClient`]) that appends `locale` and `apikey`,
//!   places data in the query or body, and classifies every response
//! - Resource accessors for World of Warcraft via [`warcraft`]
//! - OAuth authorize URL and state handling via [`auth::oauth`]
//!
//! ## Quick Start
//!
//! ```rust
//! use battlenet_api::{ApiKey, BattleNetConfig, Locale, Region};
//!
//! let config = BattleNetConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .region(Region::Eu)
//!     .locale(Locale::new("de_DE").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://eu.api.battle.net");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use battlenet_api::{ApiError, HttpClient};
//! use battlenet_api::warcraft::GuildField;
//!
//! let client = HttpClient::new(config);
//!
//! let guild = client
//!     .warcraft()
//!     .guild("Argent Dawn", "The Sentinels", &[GuildField::News])
//!     .await?;
//!
//! match client.warcraft().realm_leaderboard("nonexistent").await {
//!     Err(ApiError::Api { code, reason }) => eprintln!("{code}: {reason}"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Raw Requests
//!
//! Any path can be requested through the same pipeline:
//!
//! ```rust,ignore
//! use battlenet_api::{HttpMethod, HttpRequest};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, ["wow", "data", "battlegroups"]).build();
//! let battlegroups = client.request(request).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events for requests and
//! failures. It never installs a subscriber and never logs the API key.
//!
//! ## Design Principles
//!
//! - **Immutable configuration**: a client is fixed after construction; use
//!   [`HttpClient::with_locale`] to get a client for another locale
//! - **Fail-fast validation**: bad configuration and bad accessor arguments
//!   fail before any request is sent
//! - **One outcome per request**: every call resolves to exactly one
//!   `Result<serde_json::Value, ApiError>`
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod warcraft;

// Re-export public types at crate root for convenience
pub use auth::AuthScopes;
pub use config::{
    AccessToken, ApiKey, BattleNetConfig, BattleNetConfigBuilder, HostUrl, Locale, Region,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    encode_fields, ApiError, ArgumentError, ErrorKind, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, RequestPath, TransportError, UrlBuilder,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{begin_auth, BeginAuthResult, OAuthError, StateParam};

// Re-export the accessor entry point
pub use warcraft::WarcraftClient;
