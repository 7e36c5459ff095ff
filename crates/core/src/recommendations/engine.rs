//! Recommendation engine implementation

use tracing::debug;

use super::filter::CatalogFilter;
use super::scoring::ScoreCalculator;
use super::{DEFAULT_LIMIT, PRIMARY_CONCERN_COUNT};
use crate::domain::analysis::{AnalysisSummary, SkinType};
use crate::domain::concern::ConcernLabel;
use crate::domain::preferences::UserPreferences;
use crate::domain::product::Product;
use crate::domain::recommendation::{
    ComponentScores, PriorityLevel, RecommendationReport, RecommendationSummary, ScoredProduct,
};
use crate::rationale::explain;

/// Ranks catalog products for one analysed skin profile.
pub fn recommend(
    catalog: &[Product],
    skin_type: SkinType,
    concerns: &[ConcernLabel],
    preferences: &UserPreferences,
    limit: usize,
) -> Vec<ScoredProduct> {
    RecommendationEngine::new().recommend(catalog, skin_type, concerns, preferences, Some(limit))
}

pub fn summarize(
    products: &[ScoredProduct],
    skin_type: SkinType,
    concerns: &[ConcernLabel],
) -> RecommendationSummary {
    RecommendationSummary {
        total_count: products.len(),
        skin_type,
        primary_concerns: concerns.iter().take(PRIMARY_CONCERN_COUNT).copied().collect(),
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    calculator: ScoreCalculator,
    default_limit: usize,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self { calculator: ScoreCalculator::new(), default_limit: DEFAULT_LIMIT }
    }

    pub fn with_default_limit(default_limit: usize) -> Self {
        Self { calculator: ScoreCalculator::new(), default_limit }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Filter, score, stable-rank and truncate. Ties keep catalog order.
    pub fn recommend(
        &self,
        catalog: &[Product],
        skin_type: SkinType,
        concerns: &[ConcernLabel],
        preferences: &UserPreferences,
        limit: Option<usize>,
    ) -> Vec<ScoredProduct> {
        let limit = limit.unwrap_or(self.default_limit);
        let filter = CatalogFilter::new(preferences);

        let mut ranked: Vec<(&Product, ComponentScores, u32)> = catalog
            .iter()
            .filter(|product| filter.accepts(product))
            .map(|product| {
                let components = self.calculator.component_scores(product, skin_type, concerns);
                let score = self.calculator.calculate_total_score(&components);
                (product, components, score)
            })
            .collect();

        debug!(
            event_name = "recommendation.filtered",
            catalog_size = catalog.len(),
            surviving = ranked.len(),
            budget_tier = %preferences.budget_tier,
            product_preference = %preferences.product_preference,
            "catalog filtered"
        );

        // sort_by is stable, which keeps catalog order for equal scores
        ranked.sort_by(|left, right| right.2.cmp(&left.2));
        ranked.truncate(limit);

        let results: Vec<ScoredProduct> = ranked
            .into_iter()
            .map(|(product, components, score)| ScoredProduct {
                product: product.clone(),
                recommendation_score: score,
                recommendation_reason: explain(product, skin_type, concerns),
                priority_level: PriorityLevel::from_score(score),
                component_scores: components,
            })
            .collect();

        debug!(
            event_name = "recommendation.ranked",
            returned = results.len(),
            limit,
            top_score = results.first().map(|item| item.recommendation_score),
            "recommendations ranked"
        );

        results
    }

    /// Derives concerns from the analysis, ranks, and attaches the summary block.
    pub fn recommend_for(
        &self,
        catalog: &[Product],
        analysis: &AnalysisSummary,
        preferences: &UserPreferences,
        limit: Option<usize>,
    ) -> RecommendationReport {
        let concerns = analysis.concerns();
        let products = self.recommend(catalog, analysis.skin_type, &concerns, preferences, limit);
        let summary = summarize(&products, analysis.skin_type, &concerns);
        RecommendationReport { products, summary }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
