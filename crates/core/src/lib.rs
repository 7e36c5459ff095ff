pub mod catalog;
pub mod concerns;
pub mod config;
pub mod domain;
pub mod errors;
pub mod matching;
pub mod rationale;
pub mod recommendations;

pub use catalog::{Catalog, CatalogError};
pub use concerns::{derive_concerns, CONCERN_THRESHOLD};
pub use domain::analysis::{
    AnalysisInput, AnalysisSummary, AttributeSeverities, Severity, SkinAttribute, SkinType,
};
pub use domain::concern::ConcernLabel;
pub use domain::preferences::{
    BudgetTier, PreferencesInput, PriceRange, ProductPreference, UserPreferences,
};
pub use domain::product::{Product, ProductId};
pub use domain::recommendation::{
    ComponentScores, PriorityLevel, RecommendationReport, RecommendationSummary, ScoredProduct,
};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use rationale::{explain, lookup_benefit};
pub use recommendations::{recommend, RecommendationEngine, DEFAULT_LIMIT};
