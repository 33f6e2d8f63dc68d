use serde_json::{Map, Value};

use super::WarcraftClient;
use crate::clients::{ApiError, Transport};

impl<T: Transport> WarcraftClient<'_, T> {
    /// Fetches an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn item(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "item", id.to_string().as_str()], Map::new()).await
    }

    /// Fetches an item set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn item_set(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "item", "set", id.to_string().as_str()], Map::new())
            .await
    }
}
