//! Integration tests for configuration and the OAuth authorize flow.

use battlenet_api::auth::oauth::{begin_auth_with_state, StateParam};
use battlenet_api::{
    begin_auth, ApiKey, AuthScopes, BattleNetConfig, ConfigError, HostUrl, HttpClient, Locale,
    OAuthError, Region,
};

#[test]
fn test_missing_api_key_fails_at_build() {
    let result = BattleNetConfig::builder().region(Region::Eu).build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_unknown_region_fails_at_parse() {
    let err = "gepetto".parse::<Region>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownRegion { ref region } if region == "gepetto"));
}

#[test]
fn test_every_region_has_a_client_endpoint() {
    for region in Region::all() {
        let config = BattleNetConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .region(region)
            .build()
            .unwrap();
        let client = HttpClient::new(config);

        assert!(client.base_uri().starts_with("https://"));
        assert!(client.base_uri().ends_with(region.api_host()));
    }
}

#[test]
fn test_defaults() {
    let config = BattleNetConfig::builder()
        .api_key(ApiKey::new("k").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.region(), Region::Us);
    assert_eq!(config.locale(), &Locale::default());
    assert!(config.use_ssl());
    assert_eq!(config.base_uri(), "https://us.api.battle.net");
}

#[test]
fn test_api_host_overrides_region_and_ssl() {
    let config = BattleNetConfig::builder()
        .api_key(ApiKey::new("k").unwrap())
        .region(Region::Kr)
        .use_ssl(false)
        .api_host(HostUrl::new("https://proxy.example.com/").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.base_uri(), "https://proxy.example.com");
}

#[test]
fn test_api_key_is_masked_in_debug_output() {
    let config = BattleNetConfig::builder()
        .api_key(ApiKey::new("super-secret-key").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(config);

    assert!(!format!("{:?}", client.config()).contains("super-secret-key"));
}

#[test]
fn test_authorize_flow_round_trip() {
    let config = BattleNetConfig::builder()
        .api_key(ApiKey::new("client-id").unwrap())
        .region(Region::Tw)
        .build()
        .unwrap();
    let scopes: AuthScopes = "wow.profile".parse().unwrap();

    let result = begin_auth(&config, "https://app.example.com/cb", &scopes).unwrap();
    assert!(result
        .auth_url
        .starts_with("https://tw.battle.net/oauth/authorize?client_id=client-id&"));

    // The redirect carries the state back unchanged.
    let returned = result.state.to_string();
    assert!(result.state.verify(&returned).is_ok());

    let forged = StateParam::new();
    assert!(matches!(
        result.state.verify(forged.as_ref()),
        Err(OAuthError::StateMismatch { .. })
    ));
}

#[test]
fn test_authorize_flow_with_data_in_state() {
    let config = BattleNetConfig::builder()
        .api_key(ApiKey::new("client-id").unwrap())
        .build()
        .unwrap();
    let scopes: AuthScopes = "wow.profile,sc2.profile".parse().unwrap();

    let result = begin_auth_with_state(
        &config,
        "https://app.example.com/cb",
        &scopes,
        StateParam::with_data(&"/characters"),
    )
    .unwrap();

    let stored = StateParam::from_raw(result.state.to_string());
    assert_eq!(stored.extract_data::<String>().as_deref(), Some("/characters"));
    assert!(result.state.verify(stored.as_ref()).is_ok());
    assert_eq!(result.state.extract_nonce().len(), 15);
}
