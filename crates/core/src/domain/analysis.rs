use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::concerns::derive_concerns;
use crate::domain::concern::ConcernLabel;
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] =
        [Self::Normal, Self::Dry, Self::Oily, Self::Combination, Self::Sensitive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dry => "dry",
            Self::Oily => "oily",
            Self::Combination => "combination",
            Self::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|skin_type| skin_type.as_str() == normalized).ok_or_else(|| {
            DomainError::UnknownEnumerant {
                kind: "skin type",
                value: value.to_string(),
                expected: "normal|dry|oily|combination|sensitive",
            }
        })
    }
}

/// Skin attributes scored by the assessment, in canonical traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinAttribute {
    Wrinkles,
    Spots,
    Acne,
    Texture,
    Hydration,
    Sebum,
    Pores,
    Redness,
    DarkCircles,
}

impl SkinAttribute {
    pub const CANONICAL_ORDER: [SkinAttribute; 9] = [
        Self::Wrinkles,
        Self::Spots,
        Self::Acne,
        Self::Texture,
        Self::Hydration,
        Self::Sebum,
        Self::Pores,
        Self::Redness,
        Self::DarkCircles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrinkles => "wrinkles",
            Self::Spots => "spots",
            Self::Acne => "acne",
            Self::Texture => "texture",
            Self::Hydration => "hydration",
            Self::Sebum => "sebum",
            Self::Pores => "pores",
            Self::Redness => "redness",
            Self::DarkCircles => "dark_circles",
        }
    }
}

impl fmt::Display for SkinAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinAttribute {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|attribute| attribute.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownEnumerant {
                kind: "skin attribute",
                value: value.to_string(),
                expected: "wrinkles|spots|acne|texture|hydration|sebum|pores|redness|dark_circles",
            })
    }
}

/// Severity of a skin attribute, 1 (barely present) to 10 (most pronounced).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(attribute: SkinAttribute, value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::SeverityOutOfRange { attribute: attribute.to_string(), value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSeverities(BTreeMap<SkinAttribute, Severity>);

impl AttributeSeverities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (SkinAttribute, i64)>,
    ) -> Result<Self, DomainError> {
        let mut severities = Self::new();
        for (attribute, value) in pairs {
            severities.set(attribute, value)?;
        }
        Ok(severities)
    }

    pub fn set(&mut self, attribute: SkinAttribute, value: i64) -> Result<(), DomainError> {
        let severity = Severity::new(attribute, value)?;
        self.0.insert(attribute, severity);
        Ok(())
    }

    pub fn get(&self, attribute: SkinAttribute) -> Option<Severity> {
        self.0.get(&attribute).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkinAttribute, Severity)> + '_ {
        self.0.iter().map(|(attribute, severity)| (*attribute, *severity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validated result of an external skin assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub skin_type: SkinType,
    pub attribute_severities: AttributeSeverities,
}

impl AnalysisSummary {
    pub fn new(skin_type: SkinType, attribute_severities: AttributeSeverities) -> Self {
        Self { skin_type, attribute_severities }
    }

    pub fn concerns(&self) -> Vec<ConcernLabel> {
        derive_concerns(&self.attribute_severities)
    }
}

/// Loosely-typed assessment payload as it arrives from the assessment gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(alias = "skinType")]
    pub skin_type: String,
    #[serde(default, alias = "attributeSeverities")]
    pub attribute_severities: BTreeMap<String, i64>,
}

impl AnalysisInput {
    pub fn validate(&self) -> Result<AnalysisSummary, DomainError> {
        let skin_type = self.skin_type.parse::<SkinType>()?;
        let mut severities = AttributeSeverities::new();
        for (name, value) in &self.attribute_severities {
            let attribute = name.parse::<SkinAttribute>()?;
            severities.set(attribute, *value)?;
        }
        Ok(AnalysisSummary::new(skin_type, severities))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{AnalysisInput, AttributeSeverities, Severity, SkinAttribute, SkinType};
    use crate::domain::concern::ConcernLabel;
    use crate::errors::DomainError;

    #[test]
    fn skin_type_parses_case_insensitively() {
        assert_eq!("Oily".parse::<SkinType>(), Ok(SkinType::Oily));
        assert_eq!(" combination ".parse::<SkinType>(), Ok(SkinType::Combination));
        assert!(matches!(
            "scaly".parse::<SkinType>(),
            Err(DomainError::UnknownEnumerant { kind: "skin type", .. })
        ));
    }

    #[test]
    fn severity_bounds_are_inclusive() {
        assert_eq!(Severity::new(SkinAttribute::Acne, 1).map(Severity::value), Ok(1));
        assert_eq!(Severity::new(SkinAttribute::Acne, 10).map(Severity::value), Ok(10));
        assert_eq!(
            Severity::new(SkinAttribute::Acne, 0),
            Err(DomainError::SeverityOutOfRange { attribute: "acne".to_string(), value: 0 })
        );
        assert!(Severity::new(SkinAttribute::Pores, 11).is_err());
    }

    #[test]
    fn severities_iterate_in_canonical_order() {
        let severities = AttributeSeverities::from_pairs([
            (SkinAttribute::DarkCircles, 3),
            (SkinAttribute::Wrinkles, 6),
            (SkinAttribute::Sebum, 8),
        ])
        .expect("valid severities");

        let order: Vec<SkinAttribute> = severities.iter().map(|(attribute, _)| attribute).collect();
        assert_eq!(
            order,
            vec![SkinAttribute::Wrinkles, SkinAttribute::Sebum, SkinAttribute::DarkCircles]
        );
    }

    #[test]
    fn analysis_input_validates_at_boundary() {
        let input = AnalysisInput {
            skin_type: "dry".to_string(),
            attribute_severities: BTreeMap::from([
                ("hydration".to_string(), 7),
                ("dark_circles".to_string(), 2),
            ]),
        };

        let summary = input.validate().expect("valid analysis");
        assert_eq!(summary.skin_type, SkinType::Dry);
        assert_eq!(
            summary.attribute_severities.get(SkinAttribute::Hydration).map(Severity::value),
            Some(7)
        );
        assert_eq!(summary.concerns(), vec![ConcernLabel::Dryness]);
        assert_eq!(summary.attribute_severities.get(SkinAttribute::Acne), None);
    }

    #[test]
    fn analysis_input_rejects_unknown_attribute_and_out_of_range() {
        let unknown = AnalysisInput {
            skin_type: "oily".to_string(),
            attribute_severities: BTreeMap::from([("freckles".to_string(), 4)]),
        };
        assert!(matches!(
            unknown.validate(),
            Err(DomainError::UnknownEnumerant { kind: "skin attribute", .. })
        ));

        let out_of_range = AnalysisInput {
            skin_type: "oily".to_string(),
            attribute_severities: BTreeMap::from([("sebum".to_string(), 12)]),
        };
        assert!(matches!(out_of_range.validate(), Err(DomainError::SeverityOutOfRange { .. })));
    }

    #[test]
    fn analysis_input_accepts_camel_case_payload() {
        let input: AnalysisInput = serde_json::from_str(
            r#"{"skinType":"sensitive","attributeSeverities":{"redness":9}}"#,
        )
        .expect("payload should parse");

        let summary = input.validate().expect("valid analysis");
        assert_eq!(summary.skin_type, SkinType::Sensitive);
        assert_eq!(summary.attribute_severities.len(), 1);
    }
}
