use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Args;
use glowmatch_core::config::AppConfig;
use glowmatch_core::{AnalysisInput, AnalysisSummary, Catalog};

use super::{application_failure, Failure, EXIT_INPUT};

/// Assessment input: a JSON file, or an inline skin type with severities.
#[derive(Debug, Clone, Default, Args)]
pub struct AnalysisArgs {
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["skin_type", "severities"],
        help = "JSON assessment file with `skin_type` and `attribute_severities`"
    )]
    pub analysis: Option<PathBuf>,
    #[arg(long = "skin-type", help = "normal|dry|oily|combination|sensitive")]
    pub skin_type: Option<String>,
    #[arg(
        long = "severity",
        value_name = "ATTRIBUTE=VALUE",
        help = "Attribute severity 1-10, repeatable (e.g. --severity sebum=7)"
    )]
    pub severities: Vec<String>,
}

impl AnalysisArgs {
    pub fn resolve(&self) -> Result<AnalysisSummary, Failure> {
        let input = self.to_input().map_err(|error| {
            ("analysis_input", format!("could not read analysis input: {error:#}"), EXIT_INPUT)
        })?;
        input.validate().map_err(application_failure)
    }

    fn to_input(&self) -> anyhow::Result<AnalysisInput> {
        if let Some(path) = &self.analysis {
            return read_analysis_file(path);
        }

        let skin_type = self
            .skin_type
            .clone()
            .ok_or_else(|| anyhow!("either --analysis or --skin-type is required"))?;
        let mut attribute_severities = BTreeMap::new();
        for entry in &self.severities {
            let (attribute, value) = parse_severity(entry)?;
            attribute_severities.insert(attribute, value);
        }

        Ok(AnalysisInput { skin_type, attribute_severities })
    }
}

fn read_analysis_file(path: &Path) -> anyhow::Result<AnalysisInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse `{}`", path.display()))
}

pub fn parse_severity(entry: &str) -> anyhow::Result<(String, i64)> {
    let (attribute, value) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("severity `{entry}` must look like ATTRIBUTE=VALUE"))?;
    let value = value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("severity value for `{}` is not an integer", attribute.trim()))?;
    Ok((attribute.trim().to_string(), value))
}

/// `--catalog` wins over the configured catalog path; neither means the seed list.
pub fn load_catalog(explicit: Option<&Path>, config: &AppConfig) -> Result<Catalog, Failure> {
    let path = explicit.or(config.recommendation.catalog_path.as_deref());
    Catalog::load_or_seed(path).map_err(application_failure)
}
