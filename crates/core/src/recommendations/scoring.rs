//! Scoring algorithms for product recommendations

use super::{POPULAR_REVIEW_COUNT, TRENDING_REVIEW_COUNT};
use crate::domain::analysis::SkinType;
use crate::domain::concern::ConcernLabel;
use crate::domain::product::Product;
use crate::domain::recommendation::ComponentScores;
use crate::matching::{matched_concerns, matches_skin_type};

/// Point weights for scoring components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// All-or-nothing skin-type bonus (default: 40)
    pub skin_type_match: f64,
    /// Points per matched product concern (default: 10)
    pub per_concern_match: f64,
    /// Ceiling for the concern overlap component (default: 40)
    pub concern_overlap_cap: f64,
    /// Bonus for a perfect 5-star rating (default: 10)
    pub max_rating_bonus: f64,
    /// Bonus above the popular review threshold (default: 10)
    pub popular_bonus: f64,
    /// Bonus above the trending review threshold (default: 5)
    pub trending_bonus: f64,
}

impl ScoringWeights {
    /// Highest total a product can reach.
    pub fn max_total(&self) -> f64 {
        self.skin_type_match + self.concern_overlap_cap + self.max_rating_bonus + self.popular_bonus
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Score calculator for product recommendations
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn skin_type_score(&self, product: &Product, skin_type: SkinType) -> f64 {
        if matches_skin_type(product, skin_type) {
            self.weights.skin_type_match
        } else {
            0.0
        }
    }

    pub fn concern_overlap_score(&self, product: &Product, concerns: &[ConcernLabel]) -> f64 {
        let match_count = matched_concerns(product, concerns).len() as f64;
        (match_count * self.weights.per_concern_match).min(self.weights.concern_overlap_cap)
    }

    pub fn rating_score(&self, product: &Product) -> f64 {
        product
            .rating
            .map(|rating| rating / Product::MAX_RATING * self.weights.max_rating_bonus)
            .unwrap_or(0.0)
    }

    /// Tiers are exclusive: a popular product does not also earn the trending bonus.
    pub fn popularity_score(&self, product: &Product) -> f64 {
        if product.review_count > POPULAR_REVIEW_COUNT {
            self.weights.popular_bonus
        } else if product.review_count > TRENDING_REVIEW_COUNT {
            self.weights.trending_bonus
        } else {
            0.0
        }
    }

    pub fn component_scores(
        &self,
        product: &Product,
        skin_type: SkinType,
        concerns: &[ConcernLabel],
    ) -> ComponentScores {
        ComponentScores {
            skin_type: self.skin_type_score(product, skin_type),
            concern_overlap: self.concern_overlap_score(product, concerns),
            rating: self.rating_score(product),
            popularity: self.popularity_score(product),
        }
    }

    /// Rounds the summed components to the nearest integer.
    pub fn calculate_total_score(&self, component_scores: &ComponentScores) -> u32 {
        component_scores.total().max(0.0).round() as u32
    }
}
