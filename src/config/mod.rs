//! Configuration types for the Battle.net API client.
//!
//! This module provides the core configuration types used to initialize
//! a client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BattleNetConfig`]: The immutable configuration for a client
//! - [`BattleNetConfigBuilder`]: A builder for constructing [`BattleNetConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`AccessToken`]: A validated per-user bearer token with masked debug output
//! - [`Locale`]: The response locale
//! - [`Region`]: One of the known regional endpoints
//! - [`HostUrl`]: A validated base URL override
//!
//! # Example
//!
//! ```rust
//! use battlenet_api::{ApiKey, BattleNetConfig, Region};
//!
//! let config = BattleNetConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .region(Region::Eu)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.locale().as_ref(), "en_US");
//! ```

mod newtypes;
mod region;

pub use newtypes::{AccessToken, ApiKey, HostUrl, Locale};
pub use region::Region;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a Battle.net API client.
///
/// # Thread Safety
///
/// `BattleNetConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Endpoint Selection
///
/// By default requests go to the region's API host (see [`Region::api_host`])
/// over HTTPS, or plain HTTP when `use_ssl` is `false`. Setting `api_host`
/// replaces the regional endpoint entirely.
#[derive(Clone, Debug)]
pub struct BattleNetConfig {
    api_key: ApiKey,
    region: Region,
    locale: Locale,
    use_ssl: bool,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl BattleNetConfig {
    /// Creates a new builder for constructing a `BattleNetConfig`.
    #[must_use]
    pub fn builder() -> BattleNetConfigBuilder {
        BattleNetConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the response locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns whether requests use HTTPS.
    #[must_use]
    pub const fn use_ssl(&self) -> bool {
        self.use_ssl
    }

    /// Returns the endpoint override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the base URL that request paths are appended to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use battlenet_api::{ApiKey, BattleNetConfig, Region};
    ///
    /// let config = BattleNetConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .region(Region::Cn)
    ///     .use_ssl(false)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.base_uri(), "http://api.battlenet.com.cn");
    /// ```
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || {
                let scheme = if self.use_ssl { "https" } else { "http" };
                format!("{scheme}://{}", self.region.api_host())
            },
            |host| host.base().to_string(),
        )
    }

    /// Returns a copy of this configuration with a different locale.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            locale,
            ..self.clone()
        }
    }
}

// Verify BattleNetConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BattleNetConfig>();
};

/// Builder for constructing [`BattleNetConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `region`: [`Region::Us`]
/// - `locale`: `en_US`
/// - `use_ssl`: `true`
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use battlenet_api::{ApiKey, BattleNetConfig, Locale, Region};
/// use std::time::Duration;
///
/// let config = BattleNetConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .region(Region::Kr)
///     .locale(Locale::new("ko_KR").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct BattleNetConfigBuilder {
    api_key: Option<ApiKey>,
    region: Option<Region>,
    locale: Option<Locale>,
    use_ssl: Option<bool>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl BattleNetConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the region.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the response locale.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets whether requests use HTTPS.
    #[must_use]
    pub const fn use_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = Some(use_ssl);
        self
    }

    /// Replaces the regional endpoint with a custom base URL.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to each transport call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`BattleNetConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<BattleNetConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(BattleNetConfig {
            api_key,
            region: self.region.unwrap_or_default(),
            locale: self.locale.unwrap_or_default(),
            use_ssl: self.use_ssl.unwrap_or(true),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = BattleNetConfigBuilder::new().region(Region::Eu).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = BattleNetConfig::builder().api_key(key()).build().unwrap();

        assert_eq!(config.region(), Region::Us);
        assert_eq!(config.locale().as_ref(), "en_US");
        assert!(config.use_ssl());
        assert!(config.api_host().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_base_uri_uses_region_and_scheme() {
        let config = BattleNetConfig::builder().api_key(key()).build().unwrap();
        assert_eq!(config.base_uri(), "https://us.api.battle.net");

        let config = BattleNetConfig::builder()
            .api_key(key())
            .region(Region::Eu)
            .use_ssl(false)
            .build()
            .unwrap();
        assert_eq!(config.base_uri(), "http://eu.api.battle.net");
    }

    #[test]
    fn test_api_host_overrides_region() {
        let config = BattleNetConfig::builder()
            .api_key(key())
            .region(Region::Kr)
            .api_host(HostUrl::new("http://127.0.0.1:9000/").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_with_locale_leaves_original_untouched() {
        let config = BattleNetConfig::builder().api_key(key()).build().unwrap();
        let german = config.with_locale(Locale::new("de_DE").unwrap());

        assert_eq!(config.locale().as_ref(), "en_US");
        assert_eq!(german.locale().as_ref(), "de_DE");
        assert_eq!(german.api_key(), config.api_key());
    }

    #[test]
    fn test_config_debug_does_not_leak_api_key() {
        let config = BattleNetConfig::builder()
            .api_key(ApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("BattleNetConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BattleNetConfig>();
    }
}
