//! Typed parameters for accessors that take more than an ID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clients::ArgumentError;

/// A rated PvP bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PvpBracket {
    /// Two versus two arena.
    #[serde(rename = "2v2")]
    TwoVsTwo,
    /// Three versus three arena.
    #[serde(rename = "3v3")]
    ThreeVsThree,
    /// Five versus five arena.
    #[serde(rename = "5v5")]
    FiveVsFive,
    /// Rated battlegrounds.
    #[serde(rename = "rbg")]
    RatedBattleground,
}

impl PvpBracket {
    /// Every bracket.
    pub const ALL: [Self; 4] = [
        Self::TwoVsTwo,
        Self::ThreeVsThree,
        Self::FiveVsFive,
        Self::RatedBattleground,
    ];

    /// Returns the bracket's path segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwoVsTwo => "2v2",
            Self::ThreeVsThree => "3v3",
            Self::FiveVsFive => "5v5",
            Self::RatedBattleground => "rbg",
        }
    }
}

impl fmt::Display for PvpBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PvpBracket {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.as_str() == s)
            .ok_or_else(|| ArgumentError::Invalid {
                field: "bracket",
                reason: format!("expected one of 2v2, 3v3, 5v5, rbg but got '{s}'"),
            })
    }
}

/// Optional inputs for the pet stats resource.
///
/// Unset values are left out of the request, and the API falls back to its
/// own defaults for them.
///
/// # Example
///
/// ```rust
/// use battlenet_api::warcraft::PetStatsQuery;
///
/// let query = PetStatsQuery::new().level(25).quality_id(3);
/// assert_eq!(query.level, Some(25));
/// assert_eq!(query.breed_id, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStatsQuery {
    /// The pet's level.
    pub level: Option<u32>,
    /// The pet's breed.
    pub breed_id: Option<u32>,
    /// The pet's quality.
    pub quality_id: Option<u32>,
}

impl PetStatsQuery {
    /// Creates a query with nothing set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: None,
            breed_id: None,
            quality_id: None,
        }
    }

    /// Sets the level.
    #[must_use]
    pub const fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the breed.
    #[must_use]
    pub const fn breed_id(mut self, breed_id: u32) -> Self {
        self.breed_id = Some(breed_id);
        self
    }

    /// Sets the quality.
    #[must_use]
    pub const fn quality_id(mut self, quality_id: u32) -> Self {
        self.quality_id = Some(quality_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bracket_parsing_is_case_insensitive() {
        assert_eq!("RBG".parse::<PvpBracket>().unwrap(), PvpBracket::RatedBattleground);
        assert_eq!(" 3v3 ".parse::<PvpBracket>().unwrap(), PvpBracket::ThreeVsThree);
    }

    #[test]
    fn test_unknown_bracket_is_rejected() {
        let err = "4v4".parse::<PvpBracket>().unwrap_err();
        assert!(matches!(err, ArgumentError::Invalid { field: "bracket", .. }));
    }

    #[test]
    fn test_bracket_serde() {
        let json = serde_json::to_string(&PvpBracket::TwoVsTwo).unwrap();
        assert_eq!(json, r#""2v2""#);

        let bracket: PvpBracket = serde_json::from_str(r#""rbg""#).unwrap();
        assert_eq!(bracket, PvpBracket::RatedBattleground);

        assert!(serde_json::from_str::<PvpBracket>(r#""4v4""#).is_err());
    }

    #[test]
    fn test_pet_stats_query_serializes_camel_case() {
        let query = PetStatsQuery::new().level(25).breed_id(5);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({"level": 25, "breedId": 5, "qualityId": null})
        );
    }
}
