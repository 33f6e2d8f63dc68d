//! Static game data: battlegroups, races, classes, perks, rewards and
//! related reference lists.

use serde_json::{Map, Value};

use super::WarcraftClient;
use crate::clients::{ApiError, Transport};

impl<T: Transport> WarcraftClient<'_, T> {
    /// Lists the battlegroups in the region.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn battlegroups(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "battlegroups"], Map::new()).await
    }

    /// Lists the playable races.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn character_races(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "character", "races"], Map::new())
            .await
    }

    /// Lists the playable classes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn character_classes(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "character", "classes"], Map::new())
            .await
    }

    /// Lists every character achievement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn character_achievements(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "character", "achievements"], Map::new())
            .await
    }

    /// Lists the guild rewards.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn guild_rewards(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "guild", "rewards"], Map::new())
            .await
    }

    /// Lists the guild perks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn guild_perks(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "guild", "perks"], Map::new())
            .await
    }

    /// Lists every guild achievement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn guild_achievements(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "guild", "achievements"], Map::new())
            .await
    }

    /// Lists the item classes and subclasses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn item_classes(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "item", "classes"], Map::new())
            .await
    }

    /// Lists the talents of every class.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn talents(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "talents"], Map::new()).await
    }

    /// Lists the battle pet types.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn pet_types(&self) -> Result<Value, ApiError> {
        self.get(["wow", "data", "pet", "types"], Map::new()).await
    }
}
