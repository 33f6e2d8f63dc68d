//! Optional response sections for characters and guilds.
//!
//! The profile resources return a small summary by default. Extra sections are
//! requested by name through the `fields` query parameter; these enums are the
//! names the API accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clients::ArgumentError;

/// An optional section of a character profile.
///
/// # Example
///
/// ```rust
/// use battlenet_api::warcraft::CharacterField;
///
/// let field: CharacterField = "hunterPets".parse().unwrap();
/// assert_eq!(field, CharacterField::HunterPets);
/// assert_eq!(field.as_str(), "hunterPets");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterField {
    Achievements,
    Appearance,
    Feed,
    Guild,
    HunterPets,
    Items,
    Mounts,
    Pets,
    PetSlots,
    Professions,
    Progression,
    Pvp,
    Quests,
    Reputation,
    Statistics,
    Stats,
    Talents,
    Titles,
    Audit,
}

impl CharacterField {
    /// Every character field, in the API's documented order.
    pub const ALL: [Self; 19] = [
        Self::Achievements,
        Self::Appearance,
        Self::Feed,
        Self::Guild,
        Self::HunterPets,
        Self::Items,
        Self::Mounts,
        Self::Pets,
        Self::PetSlots,
        Self::Professions,
        Self::Progression,
        Self::Pvp,
        Self::Quests,
        Self::Reputation,
        Self::Statistics,
        Self::Stats,
        Self::Talents,
        Self::Titles,
        Self::Audit,
    ];

    /// Returns the name the API expects in the `fields` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Achievements => "achievements",
            Self::Appearance => "appearance",
            Self::Feed => "feed",
            Self::Guild => "guild",
            Self::HunterPets => "hunterPets",
            Self::Items => "items",
            Self::Mounts => "mounts",
            Self::Pets => "pets",
            Self::PetSlots => "petSlots",
            Self::Professions => "professions",
            Self::Progression => "progression",
            Self::Pvp => "pvp",
            Self::Quests => "quests",
            Self::Reputation => "reputation",
            Self::Statistics => "statistics",
            Self::Stats => "stats",
            Self::Talents => "talents",
            Self::Titles => "titles",
            Self::Audit => "audit",
        }
    }
}

impl fmt::Display for CharacterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterField {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or_else(|| ArgumentError::Invalid {
                field: "fields",
                reason: format!("unknown character field '{s}'"),
            })
    }
}

/// An optional section of a guild profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuildField {
    Achievements,
    Challenge,
    News,
}

impl GuildField {
    /// Every guild field.
    pub const ALL: [Self; 3] = [Self::Achievements, Self::Challenge, Self::News];

    /// Returns the name the API expects in the `fields` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Achievements => "achievements",
            Self::Challenge => "challenge",
            Self::News => "news",
        }
    }
}

impl fmt::Display for GuildField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuildField {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or_else(|| ArgumentError::Invalid {
                field: "fields",
                reason: format!("unknown guild field '{s}'"),
            })
    }
}
