//! Error types for requests made through the client.
//!
//! Every request resolves to exactly one `Result<serde_json::Value, ApiError>`.
//! The variants of [`ApiError`] classify what went wrong:
//!
//! - [`ApiError::InvalidArgument`]: A caller argument was rejected before any I/O
//! - [`ApiError::Transport`]: The request never produced an HTTP response
//! - [`ApiError::Decode`]: The body claimed to be JSON but did not parse
//! - [`ApiError::UnsupportedContentType`]: A successful response that was not JSON
//! - [`ApiError::HttpStatus`]: A status code of 300 or more with no usable reason
//! - [`ApiError::Api`]: The API reported a failure, with a human-readable reason
//!
//! # Example
//!
//! ```rust,ignore
//! use battlenet_api::ApiError;
//!
//! match client.warcraft().achievement(2144).await {
//!     Ok(achievement) => println!("{}", achievement["title"]),
//!     Err(ApiError::Api { code, reason }) => println!("API said no ({code}): {reason}"),
//!     Err(ApiError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// The category of an [`ApiError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad caller input, rejected before any I/O.
    InvalidArgument,
    /// Network or connection failure.
    Transport,
    /// A JSON body failed to parse.
    Decode,
    /// A non-JSON, non-error response.
    UnsupportedContentType,
    /// A status of 300 or more without a recognizable reason.
    HttpStatus,
    /// A failure declared by the API itself.
    Api,
}

/// An accessor argument that failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A required string argument was empty.
    #[error("\"{field}\" must be a non-empty string")]
    Empty {
        /// The name of the argument.
        field: &'static str,
    },

    /// An argument had the right type but an unusable value.
    #[error("\"{field}\" is invalid: {reason}")]
    Invalid {
        /// The name of the argument.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A failure below the HTTP layer.
///
/// Transport errors are never decoded or classified; they are passed to the
/// caller as-is inside [`ApiError::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The reqwest client failed to send the request or read the response.
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// The transport did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Other(String),
}

/// Unified error type for all request failures.
///
/// All variants carry a message (their `Display` output). `HttpStatus` and
/// `Api` also carry the HTTP status code of the response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A caller argument was rejected before the request was sent.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response claimed to be JSON but could not be parsed.
    #[error("{message}")]
    Decode {
        /// The JSON parser's message, verbatim.
        message: String,
    },

    /// A successful response carried a content type other than JSON.
    #[error("{content_type}: content type not supported")]
    UnsupportedContentType {
        /// The content type, without parameters.
        content_type: String,
    },

    /// The status code was 300 or more and the body held no reason.
    #[error("bad status code: {code}")]
    HttpStatus {
        /// The HTTP status code of the response.
        code: u16,
    },

    /// The API reported a failure in its response envelope.
    #[error("{reason}")]
    Api {
        /// The HTTP status code of the response.
        code: u16,
        /// The reason given by the API.
        reason: String,
    },
}

impl ApiError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::UnsupportedContentType { .. } => ErrorKind::UnsupportedContentType,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Api { .. } => ErrorKind::Api,
        }
    }

    /// Returns the HTTP status code for `HttpStatus` and `Api` errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code } | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
