use serde_json::Value;

use super::{realm_segment, require_non_empty, GuildField, WarcraftClient};
use crate::clients::{encode_fields, ApiError, Transport};

impl<T: Transport> WarcraftClient<'_, T> {
    /// Fetches a guild profile.
    ///
    /// `fields` selects optional sections. An empty slice returns only the
    /// basic profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `realm` or `name` is empty, or
    /// [`ApiError`] if the request fails.
    pub async fn guild(
        &self,
        realm: &str,
        name: &str,
        fields: &[GuildField],
    ) -> Result<Value, ApiError> {
        let realm = realm_segment(realm)?;
        let name = require_non_empty("name", name)?;
        let query = encode_fields(fields.iter().map(GuildField::as_str));

        self.get(["wow", "guild", realm.as_str(), name], query).await
    }
}
