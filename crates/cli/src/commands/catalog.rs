use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use glowmatch_core::Product;

use super::input::load_catalog;
use super::{load_config, to_data, CommandResult, Failure};

#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    #[arg(long, help = "Filter by name, brand, category, or ingredient")]
    pub search: Option<String>,
    #[arg(long, value_name = "FILE", help = "JSON catalog file")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CatalogData<'a> {
    product_count: usize,
    categories: Vec<&'a str>,
    products: Vec<&'a Product>,
}

pub fn run(args: &CatalogArgs) -> CommandResult {
    match execute(args) {
        Ok((message, data)) => CommandResult::success_with_data("catalog", message, Some(data)),
        Err(failure) => CommandResult::from_failure("catalog", failure),
    }
}

fn execute(args: &CatalogArgs) -> Result<(String, serde_json::Value), Failure> {
    let config = load_config()?;
    let catalog = load_catalog(args.catalog.as_deref(), &config)?;

    let products = catalog.search(args.search.as_deref().unwrap_or_default());
    let data = CatalogData {
        product_count: products.len(),
        categories: catalog.categories(),
        products,
    };

    let message = match args.search.as_deref() {
        Some(query) => {
            format!("{} of {} products match `{query}`", data.product_count, catalog.len())
        }
        None => format!("{} products in catalog", data.product_count),
    };
    Ok((message, to_data(&data)?))
}
