use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Acrylic color coat options offered for court surfaces
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PaintColor {
    DarkBlue,
    LightBlue,
    #[default]
    DarkGreen,
    LightGreen,
    ForestGreen,
    Red,
    Maroon,
    Gray,
    Beige,
}

impl PaintColor {
    pub const ALL: [PaintColor; 9] = [
        PaintColor::DarkBlue,
        PaintColor::LightBlue,
        PaintColor::DarkGreen,
        PaintColor::LightGreen,
        PaintColor::ForestGreen,
        PaintColor::Red,
        PaintColor::Maroon,
        PaintColor::Gray,
        PaintColor::Beige,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DarkBlue => "dark-blue",
            Self::LightBlue => "light-blue",
            Self::DarkGreen => "dark-green",
            Self::LightGreen => "light-green",
            Self::ForestGreen => "forest-green",
            Self::Red => "red",
            Self::Maroon => "maroon",
            Self::Gray => "gray",
            Self::Beige => "beige",
        }
    }
}

impl fmt::Display for PaintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown paint color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for PaintColor {
    type Err = UnknownColor;

    /// Accepts the kebab-case id as well as display forms like "Dark Blue".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '_'], "-");

        let normalized = if normalized == "grey" {
            "gray".to_string()
        } else {
            normalized
        };

        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for PaintColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
