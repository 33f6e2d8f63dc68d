//! OAuth 2.0 authorization code flow for Battle.net.
//!
//! Per-user resources, such as the characters on an account, need an access
//! token granted by the user. This module covers the part of the flow that
//! happens in this application:
//!
//! 1. [`begin_auth`] builds the authorize URL and a [`StateParam`].
//! 2. The user logs in on Battle.net and is redirected back with `code` and
//!    `state`.
//! 3. [`StateParam::verify`] checks the returned `state`.
//!
//! Exchanging `code` for an access token happens on Battle.net's token
//! endpoint with the application secret and is left to the application. The
//! resulting token is passed to accessors such as
//! [`WarcraftClient::user_characters`](crate::warcraft::WarcraftClient::user_characters).

mod begin_auth;
mod error;
mod state;

pub use begin_auth::{begin_auth, begin_auth_with_state, BeginAuthResult};
pub use error::OAuthError;
pub use state::StateParam;
