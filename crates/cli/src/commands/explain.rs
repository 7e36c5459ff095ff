use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use glowmatch_core::{explain, ConcernLabel, ProductId};

use super::input::{load_catalog, AnalysisArgs};
use super::{load_config, to_data, CommandResult, Failure, EXIT_INPUT};

#[derive(Debug, Clone, Args)]
pub struct ExplainArgs {
    #[arg(long, help = "Catalog product id")]
    pub product: String,
    #[command(flatten)]
    pub analysis: AnalysisArgs,
    #[arg(long, value_name = "FILE", help = "JSON catalog file")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExplainData {
    product_id: ProductId,
    product_name: String,
    concerns: Vec<ConcernLabel>,
    rationale: String,
}

pub fn run(args: &ExplainArgs) -> CommandResult {
    match execute(args) {
        Ok((message, data)) => CommandResult::success_with_data("explain", message, Some(data)),
        Err(failure) => CommandResult::from_failure("explain", failure),
    }
}

fn execute(args: &ExplainArgs) -> Result<(String, serde_json::Value), Failure> {
    let config = load_config()?;
    let analysis = args.analysis.resolve()?;
    let catalog = load_catalog(args.catalog.as_deref(), &config)?;

    let product_id = ProductId(args.product.trim().to_string());
    let product = catalog.find(&product_id).ok_or_else(|| {
        ("product_not_found", format!("product `{product_id}` is not in the catalog"), EXIT_INPUT)
    })?;

    let concerns = analysis.concerns();
    let data = ExplainData {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        rationale: explain(product, analysis.skin_type, &concerns),
        concerns,
    };

    Ok((format!("rationale for `{}`", data.product_id), to_data(&data)?))
}
