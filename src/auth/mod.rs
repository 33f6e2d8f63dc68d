//! Authentication types for user-authorized requests.
//!
//! - [`AuthScopes`]: The scopes requested from the user
//! - [`oauth`]: Authorize URL generation and state verification
//!
//! # Example
//!
//! ```rust
//! use battlenet_api::AuthScopes;
//!
//! let scopes: AuthScopes = "wow.profile".parse().unwrap();
//! assert_eq!(scopes.to_string(), "wow.profile");
//! ```

pub mod oauth;
mod scopes;

pub use scopes::AuthScopes;
