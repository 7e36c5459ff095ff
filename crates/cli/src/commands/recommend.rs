use std::path::PathBuf;

use clap::Args;
use glowmatch_core::config::MAX_RECOMMENDATION_LIMIT;
use glowmatch_core::{PreferencesInput, RecommendationEngine};
use tracing::info;

use super::input::{load_catalog, AnalysisArgs};
use super::{application_failure, load_config, to_data, CommandResult, Failure, EXIT_INPUT};

#[derive(Debug, Clone, Default, Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,
    #[arg(long, help = "Budget tier: low|medium|high|luxury")]
    pub budget: Option<String>,
    #[arg(long, help = "Ingredient philosophy: any|natural|scientific")]
    pub preference: Option<String>,
    #[arg(long, help = "Maximum number of products to return")]
    pub limit: Option<usize>,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON catalog file (defaults to configured or built-in catalog)"
    )]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: &RecommendArgs) -> CommandResult {
    match execute(args) {
        Ok((message, data)) => CommandResult::success_with_data("recommend", message, Some(data)),
        Err(failure) => CommandResult::from_failure("recommend", failure),
    }
}

fn execute(args: &RecommendArgs) -> Result<(String, serde_json::Value), Failure> {
    let config = load_config()?;

    if let Some(limit) = args.limit {
        if limit > MAX_RECOMMENDATION_LIMIT {
            return Err((
                "input_validation",
                format!("--limit must be at most {MAX_RECOMMENDATION_LIMIT}, got {limit}"),
                EXIT_INPUT,
            ));
        }
    }

    let preferences = PreferencesInput {
        budget_tier: args.budget.clone(),
        product_preference: args.preference.clone(),
    }
    .validate_with(config.recommendation.default_preferences())
    .map_err(application_failure)?;
    let analysis = args.analysis.resolve()?;
    let catalog = load_catalog(args.catalog.as_deref(), &config)?;

    let engine = RecommendationEngine::with_default_limit(config.recommendation.default_limit);
    let report = engine.recommend_for(catalog.products(), &analysis, &preferences, args.limit);

    info!(
        event_name = "cli.recommend.completed",
        skin_type = %analysis.skin_type,
        budget_tier = %preferences.budget_tier,
        product_preference = %preferences.product_preference,
        returned = report.summary.total_count,
        "recommendations produced"
    );

    let message = format!(
        "{} products recommended for {} skin within {} budget",
        report.summary.total_count,
        report.summary.skin_type,
        preferences.budget_tier.price_range().label()
    );
    Ok((message, to_data(&report)?))
}
