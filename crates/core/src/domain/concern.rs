use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Display-oriented concern vocabulary matched against product metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConcernLabel {
    Wrinkles,
    DarkSpots,
    Acne,
    UnevenTexture,
    Dryness,
    OilySkin,
    ExcessOil,
    LargePores,
    Redness,
    DarkCircles,
}

impl ConcernLabel {
    pub const ALL: [ConcernLabel; 10] = [
        Self::Wrinkles,
        Self::DarkSpots,
        Self::Acne,
        Self::UnevenTexture,
        Self::Dryness,
        Self::OilySkin,
        Self::ExcessOil,
        Self::LargePores,
        Self::Redness,
        Self::DarkCircles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrinkles => "Wrinkles",
            Self::DarkSpots => "Dark Spots",
            Self::Acne => "Acne",
            Self::UnevenTexture => "Uneven Texture",
            Self::Dryness => "Dryness",
            Self::OilySkin => "Oily Skin",
            Self::ExcessOil => "Excess Oil",
            Self::LargePores => "Large Pores",
            Self::Redness => "Redness",
            Self::DarkCircles => "Dark Circles",
        }
    }
}

impl fmt::Display for ConcernLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcernLabel {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownEnumerant {
                kind: "concern label",
                value: value.to_string(),
                expected: "Wrinkles|Dark Spots|Acne|Uneven Texture|Dryness|Oily Skin|Excess Oil|Large Pores|Redness|Dark Circles",
            })
    }
}

impl Serialize for ConcernLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConcernLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
