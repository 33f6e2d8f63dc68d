//! OAuth error types.
//!
//! # Example
//!
//! ```rust
//! use battlenet_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use thiserror::Error;

/// Errors that can occur while starting or completing the authorization flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuthError {
    /// The redirect URI passed to `begin_auth()` was empty.
    ///
    /// Battle.net requires a redirect URI registered for the application.
    #[error("Redirect URI cannot be empty. Provide the URI registered for your Battle.net application.")]
    EmptyRedirectUri,

    /// OAuth state parameter mismatch.
    ///
    /// The `state` received on the redirect URI does not match the one
    /// generated by `begin_auth()`.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The expected state value that was generated.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_redirect_uri_message() {
        let message = OAuthError::EmptyRedirectUri.to_string();
        assert!(message.contains("Redirect URI cannot be empty"));
    }

    #[test]
    fn test_state_mismatch_includes_expected_and_received() {
        let error = OAuthError::StateMismatch {
            expected: "abc123".to_string(),
            received: "xyz789".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("expected 'abc123'"));
        assert!(message.contains("received 'xyz789'"));
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::EmptyRedirectUri;
        let _ = error;
    }
}
