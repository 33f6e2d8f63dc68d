//! Character profiles, including the characters on a user's account.

use serde_json::Value;

use super::{realm_segment, require_non_empty, CharacterField, WarcraftClient};
use crate::clients::{encode_fields, ApiError, ArgumentError, HttpMethod, HttpRequest, Transport};
use crate::config::AccessToken;

impl<T: Transport> WarcraftClient<'_, T> {
    /// Fetches a character profile.
    ///
    /// `fields` selects optional sections. An empty slice returns only the
    /// basic profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `realm` or `name` is empty, or
    /// [`ApiError`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use battlenet_api::warcraft::CharacterField;
    ///
    /// let profile = client
    ///     .warcraft()
    ///     .character("Emerald Dream", "Uther", &[CharacterField::Items])
    ///     .await?;
    /// println!("{}", profile["items"]["averageItemLevel"]);
    /// ```
    pub async fn character(
        &self,
        realm: &str,
        name: &str,
        fields: &[CharacterField],
    ) -> Result<Value, ApiError> {
        let realm = realm_segment(realm)?;
        let name = require_non_empty("name", name)?;
        let query = encode_fields(fields.iter().map(CharacterField::as_str));

        self.get(["wow", "character", realm.as_str(), name], query).await
    }

    /// Lists the characters on the account that granted `token`.
    ///
    /// The token is sent as a bearer `Authorization` header alongside the
    /// usual `apikey` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `token` is empty, or
    /// [`ApiError`] if the request fails.
    pub async fn user_characters(&self, token: &str) -> Result<Value, ApiError> {
        let token = require_non_empty("token", token)?;
        let token = AccessToken::new(token).map_err(|_| ArgumentError::Empty { field: "token" })?;

        let request = HttpRequest::builder(HttpMethod::Get, ["wow", "user", "characters"])
            .token(token)
            .build();
        self.send(request).await
    }
}
