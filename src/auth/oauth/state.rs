//! The OAuth `state` parameter.
//!
//! [`StateParam`] is generated when the authorize URL is built, stored by the
//! application, and compared against the `state` Battle.net sends back to the
//! redirect URI. A mismatch means the callback did not come from a flow this
//! application started.
//!
//! Two forms are supported:
//!
//! - **Nonce**: [`StateParam::new()`] produces a 15-character alphanumeric
//!   string.
//! - **Nonce with data**: [`StateParam::with_data()`] base64-encodes a JSON
//!   object holding a nonce and caller data, for example the page to return
//!   to after login.
//!
//! # Example
//!
//! ```rust
//! use battlenet_api::auth::oauth::StateParam;
//! use serde::{Serialize, Deserialize};
//!
//! let state = StateParam::new();
//! assert_eq!(state.nonce().len(), 15);
//! assert!(state.verify(state.as_ref()).is_ok());
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct ReturnTo {
//!     path: String,
//! }
//!
//! let state = StateParam::with_data(&ReturnTo { path: "/armory".to_string() });
//! let data: Option<ReturnTo> = state.extract_data();
//! assert_eq!(data.unwrap().path, "/armory");
//! ```

use base64::prelude::*;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::auth::oauth::error::OAuthError;

/// OAuth state parameter for CSRF protection and data round-tripping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
    is_structured: bool,
}

#[derive(Serialize, Deserialize)]
struct StructuredState<T> {
    nonce: String,
    data: T,
}

#[derive(Deserialize)]
struct NonceOnly {
    nonce: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    fn generate_nonce() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Creates a state holding a fresh random nonce.
    ///
    /// # Example
    ///
    /// ```rust
    /// use battlenet_api::auth::oauth::StateParam;
    ///
    /// let state = StateParam::new();
    /// assert!(state.nonce().chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Self::generate_nonce(),
            is_structured: false,
        }
    }

    /// Creates a state holding a fresh nonce and `data`.
    ///
    /// The result is base64-encoded JSON and is safe to place in a URL once
    /// percent-encoded.
    #[must_use]
    pub fn with_data<T: Serialize>(data: &T) -> Self {
        let structured = StructuredState {
            nonce: Self::generate_nonce(),
            data,
        };
        let json = serde_json::to_string(&structured).unwrap_or_default();

        Self {
            value: BASE64_STANDARD.encode(json.as_bytes()),
            is_structured: true,
        }
    }

    /// Wraps an existing state string, such as one loaded from a session store.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            value: raw.into(),
            is_structured: false,
        }
    }

    /// Returns the raw state value.
    ///
    /// For a state built with [`with_data()`](Self::with_data) this is the whole
    /// encoded value; use [`extract_nonce()`](Self::extract_nonce) for the nonce
    /// alone.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.value
    }

    /// Decodes the data embedded by [`with_data()`](Self::with_data).
    ///
    /// Returns `None` for a plain nonce, or if the data does not deserialize
    /// into `T`.
    #[must_use]
    pub fn extract_data<T: DeserializeOwned>(&self) -> Option<T> {
        let decoded = BASE64_STANDARD.decode(self.value.as_bytes()).ok()?;
        let json_str = String::from_utf8(decoded).ok()?;

        let structured: StructuredState<T> = serde_json::from_str(&json_str).ok()?;
        Some(structured.data)
    }

    /// Returns the nonce, decoding it from a structured state if needed.
    ///
    /// Falls back to the full value if a structured state fails to decode.
    #[must_use]
    pub fn extract_nonce(&self) -> String {
        if !self.is_structured {
            return self.value.clone();
        }

        BASE64_STANDARD
            .decode(self.value.as_bytes())
            .ok()
            .and_then(|decoded| String::from_utf8(decoded).ok())
            .and_then(|json| serde_json::from_str::<NonceOnly>(&json).ok())
            .map_or_else(|| self.value.clone(), |state| state.nonce)
    }

    /// Checks the `state` received on the redirect URI against this one.
    ///
    /// The comparison runs in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::StateMismatch`] if the values differ.
    ///
    /// # Example
    ///
    /// ```rust
    /// use battlenet_api::auth::oauth::{OAuthError, StateParam};
    ///
    /// let state = StateParam::from_raw("expected");
    /// assert!(state.verify("expected").is_ok());
    /// assert!(matches!(
    ///     state.verify("forged"),
    ///     Err(OAuthError::StateMismatch { .. })
    /// ));
    /// ```
    pub fn verify(&self, received: &str) -> Result<(), OAuthError> {
        let matches: bool = self.value.as_bytes().ct_eq(received.as_bytes()).into();
        if matches {
            return Ok(());
        }

        tracing::warn!("OAuth state mismatch on redirect");
        Err(OAuthError::StateMismatch {
            expected: self.value.clone(),
            received: received.to_string(),
        })
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_new_generates_15_char_alphanumeric_nonce() {
        let state = StateParam::new();
        let nonce = state.nonce();

        assert_eq!(nonce.len(), 15);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_new_generates_unique_nonces() {
        assert_ne!(StateParam::new().nonce(), StateParam::new().nonce());
    }

    #[test]
    fn test_with_data_embeds_json_in_base64() {
        let state = StateParam::with_data(&"/armory");

        let decoded = BASE64_STANDARD.decode(state.as_ref().as_bytes()).unwrap();
        let json_str = String::from_utf8(decoded).unwrap();
        assert!(json_str.contains("\"nonce\""));
        assert!(json_str.contains("/armory"));
    }

    #[test]
    fn test_extract_data_round_trips_struct() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct FlowData {
            character: String,
            realm: String,
        }

        let original = FlowData {
            character: "Uther".to_string(),
            realm: "emerald-dream".to_string(),
        };
        let state = StateParam::with_data(&original);

        assert_eq!(state.extract_data::<FlowData>(), Some(original));
    }

    #[test]
    fn test_extract_data_returns_none_for_plain_nonce() {
        let state = StateParam::new();
        assert!(state.extract_data::<String>().is_none());
    }

    #[test]
    fn test_extract_nonce_from_structured_state() {
        let state = StateParam::with_data(&42);
        let nonce = state.extract_nonce();

        assert_eq!(nonce.len(), 15);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(state.nonce().len() > 15);
    }

    #[test]
    fn test_extract_nonce_falls_back_for_plain_state() {
        let state = StateParam::from_raw("custom");
        assert_eq!(state.extract_nonce(), "custom");
    }

    #[test]
    fn test_verify_accepts_identical_state() {
        let state = StateParam::new();
        let received = state.to_string();
        assert!(state.verify(&received).is_ok());
    }

    #[test]
    fn test_verify_rejects_different_state() {
        let state = StateParam::from_raw("abc123");
        let err = state.verify("xyz789").unwrap_err();

        match err {
            OAuthError::StateMismatch { expected, received } => {
                assert_eq!(expected, "abc123");
                assert_eq!(received, "xyz789");
            }
            OAuthError::EmptyRedirectUri => panic!("Expected StateMismatch"),
        }
    }

    #[test]
    fn test_verify_rejects_prefix_and_empty() {
        let state = StateParam::from_raw("abc123");
        assert!(state.verify("abc").is_err());
        assert!(state.verify("").is_err());
    }

    #[test]
    fn test_state_param_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StateParam>();
    }
}
