//! Battle.net API regions.
//!
//! This module provides the [`Region`] enum. Each region maps to a fixed API
//! endpoint, so an unknown region is rejected when the string is parsed and
//! can never reach the request pipeline.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Battle.net API region.
///
/// # Example
///
/// ```rust
/// use battlenet_api::Region;
///
/// let region: Region = "EU".parse().unwrap();
/// assert_eq!(region, Region::Eu);
/// assert_eq!(region.api_host(), "eu.api.battle.net");
/// assert_eq!(region.oauth_host(), "eu.battle.net");
///
/// assert!("gepetto".parse::<Region>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    /// North America.
    #[default]
    Us,
    /// Europe.
    Eu,
    /// Korea.
    Kr,
    /// Taiwan.
    Tw,
    /// China. Served from a separate domain.
    Cn,
    /// South-East Asia.
    Sea,
}

impl Region {
    /// Returns every known region, in endpoint table order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [Self::Us, Self::Eu, Self::Kr, Self::Tw, Self::Cn, Self::Sea]
    }

    /// Returns the short region code used in configuration (e.g. `"us"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
            Self::Sea => "sea",
        }
    }

    /// Returns the data API host name for this region.
    #[must_use]
    pub const fn api_host(&self) -> &'static str {
        match self {
            Self::Us => "us.api.battle.net",
            Self::Eu => "eu.api.battle.net",
            Self::Kr => "kr.api.battle.net",
            Self::Tw => "tw.api.battle.net",
            Self::Cn => "api.battlenet.com.cn",
            Self::Sea => "sea.api.battle.net",
        }
    }

    /// Returns the OAuth host name for this region.
    ///
    /// This is the API host without the `api.` label.
    #[must_use]
    pub const fn oauth_host(&self) -> &'static str {
        match self {
            Self::Us => "us.battle.net",
            Self::Eu => "eu.battle.net",
            Self::Kr => "kr.battle.net",
            Self::Tw => "tw.battle.net",
            Self::Cn => "www.battlenet.com.cn",
            Self::Sea => "sea.battle.net",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        Self::all()
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or(ConfigError::UnknownRegion { region: s })
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parses_known_regions_case_insensitively() {
        assert_eq!("us".parse::<Region>().unwrap(), Region::Us);
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!(" kr ".parse::<Region>().unwrap(), Region::Kr);
        assert_eq!("tw".parse::<Region>().unwrap(), Region::Tw);
        assert_eq!("cn".parse::<Region>().unwrap(), Region::Cn);
        assert_eq!("sea".parse::<Region>().unwrap(), Region::Sea);
    }

    #[test]
    fn test_region_rejects_unknown() {
        let result = "gepetto".parse::<Region>();
        assert!(matches!(
            result,
            Err(ConfigError::UnknownRegion { region }) if region == "gepetto"
        ));
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_default_region_is_us() {
        assert_eq!(Region::default(), Region::Us);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for region in Region::all() {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_api_hosts() {
        assert_eq!(Region::Us.api_host(), "us.api.battle.net");
        assert_eq!(Region::Sea.api_host(), "sea.api.battle.net");
        assert_eq!(Region::Cn.api_host(), "api.battlenet.com.cn");
    }

    #[test]
    fn test_oauth_hosts_drop_api_label() {
        for region in Region::all() {
            assert!(!region.oauth_host().contains("api."));
        }
        assert_eq!(Region::Tw.oauth_host(), "tw.battle.net");
    }

    #[test]
    fn test_region_serde() {
        let json = serde_json::to_string(&Region::Kr).unwrap();
        assert_eq!(json, r#""kr""#);

        let region: Region = serde_json::from_str(r#""sea""#).unwrap();
        assert_eq!(region, Region::Sea);

        assert!(serde_json::from_str::<Region>(r#""mars""#).is_err());
    }
}
