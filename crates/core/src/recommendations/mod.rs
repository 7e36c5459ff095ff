//! Product recommendation scorer
//!
//! Filters a read-only catalog by budget tier and ingredient philosophy, scores
//! the survivors against the caller's skin type and concerns, and returns a
//! stable, truncated ranking with priority tiers and rationale text.

mod engine;
mod filter;
mod scoring;

pub use engine::{recommend, summarize, RecommendationEngine};
pub use filter::{passes_budget, passes_preference, CatalogFilter};
pub use scoring::{ScoreCalculator, ScoringWeights};

/// Results returned when the caller does not pass a limit.
pub const DEFAULT_LIMIT: usize = 12;

/// Concern labels echoed in the summary.
pub const PRIMARY_CONCERN_COUNT: usize = 3;

/// Default scoring weights
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    skin_type_match: 40.0,
    per_concern_match: 10.0,
    concern_overlap_cap: 40.0,
    max_rating_bonus: 10.0,
    popular_bonus: 10.0,
    trending_bonus: 5.0,
};

/// Review count above which a product earns the full popularity bonus.
pub const POPULAR_REVIEW_COUNT: u32 = 1000;

/// Review count above which a product earns the reduced popularity bonus.
pub const TRENDING_REVIEW_COUNT: u32 = 500;
