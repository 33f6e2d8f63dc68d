//! Authorize URL generation.
//!
//! [`begin_auth`] is the first step of the authorization code flow. It
//! generates a [`StateParam`] and the URL to send the user to on the regional
//! Battle.net login host.
//!
//! # Example
//!
//! ```rust
//! use battlenet_api::{ApiKey, BattleNetConfig, Region};
//! use battlenet_api::auth::oauth::begin_auth;
//!
//! let config = BattleNetConfig::builder()
//!     .api_key(ApiKey::new("your-client-id").unwrap())
//!     .region(Region::Eu)
//!     .build()
//!     .unwrap();
//!
//! let scopes = "wow.profile".parse().unwrap();
//! let result = begin_auth(&config, "https://myapp.example.com/callback", &scopes).unwrap();
//!
//! assert!(result.auth_url.starts_with("https://eu.battle.net/oauth/authorize?"));
//! // Store result.state, then redirect the user to result.auth_url
//! ```

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::AuthScopes;
use crate::config::BattleNetConfig;

/// Result of starting the authorization flow.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// The URL to redirect the user to.
    pub auth_url: String,

    /// The state embedded in `auth_url`. Keep it to check the redirect with
    /// [`StateParam::verify`].
    pub state: StateParam,
}

/// Builds the authorize URL for `config`'s region and a fresh state.
///
/// The API key is sent as the OAuth `client_id`, and scopes are sent comma
/// separated in sorted order.
///
/// The URL points at the region's login host over HTTPS. When the config sets
/// an `api_host` override, the login host is that base URL with its `api.`
/// label removed instead, so proxies and mock servers receive the redirect too.
///
/// # Errors
///
/// Returns [`OAuthError::EmptyRedirectUri`] if `redirect_uri` is empty.
pub fn begin_auth(
    config: &BattleNetConfig,
    redirect_uri: &str,
    scopes: &AuthScopes,
) -> Result<BeginAuthResult, OAuthError> {
    begin_auth_with_state(config, redirect_uri, scopes, StateParam::new())
}

/// Like [`begin_auth`], but with a caller-supplied state, such as one built
/// with [`StateParam::with_data`].
///
/// # Errors
///
/// Returns [`OAuthError::EmptyRedirectUri`] if `redirect_uri` is empty.
pub fn begin_auth_with_state(
    config: &BattleNetConfig,
    redirect_uri: &str,
    scopes: &AuthScopes,
    state: StateParam,
) -> Result<BeginAuthResult, OAuthError> {
    let redirect_uri = redirect_uri.trim();
    if redirect_uri.is_empty() {
        return Err(OAuthError::EmptyRedirectUri);
    }

    let params = [
        ("client_id", config.api_key().as_ref().to_string()),
        ("redirect_uri", redirect_uri.to_string()),
        ("response_type", "code".to_string()),
        ("scope", scopes.to_string()),
        ("state", state.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let auth_url = format!("{}/oauth/authorize?{}", login_base(config), query_string);

    tracing::debug!(
        "Built authorize URL for region {} with scopes '{}'",
        config.region(),
        scopes
    );

    Ok(BeginAuthResult { auth_url, state })
}

/// Returns the scheme and host that serve `/oauth/authorize`.
fn login_base(config: &BattleNetConfig) -> String {
    config.api_host().map_or_else(
        || format!("https://{}", config.region().oauth_host()),
        |host| host.base().replacen("api.", "", 1),
    )
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};
