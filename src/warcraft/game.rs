//! Game world resources: achievements, auctions, bosses, leaderboards,
//! quests, realms, recipes, spells and zones.

use serde_json::{Map, Value};

use super::{realm_segment, PvpBracket, WarcraftClient};
use crate::clients::{ApiError, Transport};

impl<T: Transport> WarcraftClient<'_, T> {
    /// Fetches an achievement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn achievement(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "achievement", id.to_string().as_str()], Map::new())
            .await
    }

    /// Fetches the location of the latest auction house dump for a realm.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `realm` is empty, or
    /// [`ApiError`] if the request fails.
    pub async fn auction_status(&self, realm: &str) -> Result<Value, ApiError> {
        let realm = realm_segment(realm)?;
        self.get(["wow", "auction", "data", realm.as_str()], Map::new())
            .await
    }

    /// Lists every boss.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn bosses(&self) -> Result<Value, ApiError> {
        self.get(["wow", "boss"], Map::new()).await
    }

    /// Fetches a boss.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn boss(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "boss", id.to_string().as_str()], Map::new()).await
    }

    /// Fetches the challenge mode leaderboard for a realm.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `realm` is empty, or
    /// [`ApiError`] if the request fails.
    pub async fn realm_leaderboard(&self, realm: &str) -> Result<Value, ApiError> {
        let realm = realm_segment(realm)?;
        self.get(["wow", "challenge", realm.as_str()], Map::new()).await
    }

    /// Fetches the challenge mode leaderboard for the whole region.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn region_leaderboard(&self) -> Result<Value, ApiError> {
        self.get(["wow", "challenge", "region"], Map::new()).await
    }

    /// Fetches the rated PvP leaderboard for a bracket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn pvp_leaderboard(&self, bracket: PvpBracket) -> Result<Value, ApiError> {
        self.get(["wow", "leaderboard", bracket.as_str()], Map::new())
            .await
    }

    /// Fetches a quest.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn quest(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "quest", id.to_string().as_str()], Map::new()).await
    }

    /// Fetches the status of every realm in the region.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn realm_status(&self) -> Result<Value, ApiError> {
        self.get(["wow", "realm", "status"], Map::new()).await
    }

    /// Fetches a profession recipe.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn recipe(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "recipe", id.to_string().as_str()], Map::new()).await
    }

    /// Fetches a spell.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn spell(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "spell", id.to_string().as_str()], Map::new()).await
    }

    /// Lists every zone.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn zones(&self) -> Result<Value, ApiError> {
        self.get(["wow", "zone"], Map::new()).await
    }

    /// Fetches a zone.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn zone(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "zone", id.to_string().as_str()], Map::new()).await
    }
}
