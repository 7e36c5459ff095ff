use serde::{Deserialize, Serialize};

use super::analysis::SkinType;
use super::concern::ConcernLabel;
use super::product::Product;

/// Unrounded sub-scores that sum to the recommendation score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub skin_type: f64,
    pub concern_overlap: f64,
    pub rating: f64,
    pub popularity: f64,
}

impl ComponentScores {
    pub fn total(&self) -> f64 {
        self.skin_type + self.concern_overlap + self.rating + self.popularity
    }
}

/// Coarse badge tier derived from the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PriorityLevel {
    TopPick,
    Recommended,
    Consider,
}

impl PriorityLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            PriorityLevel::TopPick
        } else if score >= 60 {
            PriorityLevel::Recommended
        } else {
            PriorityLevel::Consider
        }
    }

    pub fn tier(self) -> u8 {
        match self {
            PriorityLevel::TopPick => 1,
            PriorityLevel::Recommended => 2,
            PriorityLevel::Consider => 3,
        }
    }
}

impl From<PriorityLevel> for u8 {
    fn from(value: PriorityLevel) -> Self {
        value.tier()
    }
}

impl TryFrom<u8> for PriorityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PriorityLevel::TopPick),
            2 => Ok(PriorityLevel::Recommended),
            3 => Ok(PriorityLevel::Consider),
            other => Err(format!("priority level must be 1, 2 or 3, got {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub recommendation_score: u32,
    pub recommendation_reason: String,
    pub priority_level: PriorityLevel,
    pub component_scores: ComponentScores,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub total_count: usize,
    pub skin_type: SkinType,
    pub primary_concerns: Vec<ConcernLabel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub products: Vec<ScoredProduct>,
    pub summary: RecommendationSummary,
}

#[cfg(test)]
mod tests {
    use super::PriorityLevel;

    #[test]
    fn priority_thresholds() {
        assert_eq!(PriorityLevel::from_score(100), PriorityLevel::TopPick);
        assert_eq!(PriorityLevel::from_score(80), PriorityLevel::TopPick);
        assert_eq!(PriorityLevel::from_score(79), PriorityLevel::Recommended);
        assert_eq!(PriorityLevel::from_score(60), PriorityLevel::Recommended);
        assert_eq!(PriorityLevel::from_score(59), PriorityLevel::Consider);
        assert_eq!(PriorityLevel::from_score(0), PriorityLevel::Consider);
    }

    #[test]
    fn priority_serializes_as_tier_number() {
        let json = serde_json::to_string(&PriorityLevel::Recommended).expect("serializes");
        assert_eq!(json, "2");
        let parsed: PriorityLevel = serde_json::from_str("1").expect("parses");
        assert_eq!(parsed, PriorityLevel::TopPick);
        assert!(serde_json::from_str::<PriorityLevel>("4").is_err());
    }
}
