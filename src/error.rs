//! Error types for the Battle.net API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors. Request-time failures live in
//! [`ApiError`](crate::clients::ApiError).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A client can never be built from an invalid region,
//! an empty API key or an empty locale.
//!
//! # Example
//!
//! ```rust
//! use battlenet_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Battle.net API key.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty.")]
    EmptyAccessToken,

    /// Locale cannot be empty.
    #[error("Locale cannot be empty. Expected a value such as 'en_US'.")]
    EmptyLocale,

    /// Region is not one of the known endpoints.
    #[error("Unknown region '{region}'. Expected one of: us, eu, kr, tw, cn, sea.")]
    UnknownRegion {
        /// The region string that was provided.
        region: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An OAuth scope is malformed.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },
}
