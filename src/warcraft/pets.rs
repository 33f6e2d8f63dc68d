//! Battle pets and mounts.

use serde_json::{Map, Value};

use super::{PetStatsQuery, WarcraftClient};
use crate::clients::{ApiError, ArgumentError, Transport};

impl<T: Transport> WarcraftClient<'_, T> {
    /// Lists every mount.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn mounts(&self) -> Result<Value, ApiError> {
        self.get(["wow", "mount"], Map::new()).await
    }

    /// Lists every battle and vanity pet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn pets(&self) -> Result<Value, ApiError> {
        self.get(["wow", "pet"], Map::new()).await
    }

    /// Fetches a battle pet ability.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn pet_ability(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "pet", "ability", id.to_string().as_str()], Map::new())
            .await
    }

    /// Fetches a battle pet species.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn pet_species(&self, id: u64) -> Result<Value, ApiError> {
        self.get(["wow", "pet", "species", id.to_string().as_str()], Map::new())
            .await
    }

    /// Fetches the stats of a pet species, optionally at a given level,
    /// breed and quality.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use battlenet_api::warcraft::PetStatsQuery;
    ///
    /// let stats = client
    ///     .warcraft()
    ///     .pet_stats(258, Some(PetStatsQuery::new().level(25).quality_id(4)))
    ///     .await?;
    /// ```
    pub async fn pet_stats(
        &self,
        species_id: u64,
        query: Option<PetStatsQuery>,
    ) -> Result<Value, ApiError> {
        let query = match query {
            Some(query) => pet_stats_params(query)?,
            None => Map::new(),
        };

        self.get(["wow", "pet", "stats", species_id.to_string().as_str()], query)
            .await
    }
}

fn pet_stats_params(query: PetStatsQuery) -> Result<Map<String, Value>, ArgumentError> {
    match serde_json::to_value(query) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(e) => Err(ArgumentError::Invalid {
            field: "query",
            reason: e.to_string(),
        }),
    }
}
