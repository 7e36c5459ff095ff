use glowmatch_core::config::{AppConfig, LoadOptions};
use glowmatch_core::{
    AnalysisSummary, AttributeSeverities, Catalog, RecommendationEngine, SkinAttribute, SkinType,
};
use serde::Serialize;

use super::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match Catalog::load_or_seed(config.recommendation.catalog_path.as_deref()) {
                Ok(catalog) => {
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Pass,
                        details: format!("{} products available", catalog.len()),
                    });
                    checks.push(check_dry_run(&config, &catalog));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "catalog_load",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("recommendation_dry_run", "catalog"));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("catalog_load", "configuration"));
            checks.push(skipped("recommendation_dry_run", "configuration"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn skipped(name: &'static str, dependency: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {dependency} did not load"),
    }
}

/// Ranks the catalog for a fixed normal-skin profile using configured defaults.
fn check_dry_run(config: &AppConfig, catalog: &Catalog) -> DoctorCheck {
    let severities = AttributeSeverities::from_pairs([(SkinAttribute::Hydration, 6)]);
    let analysis = match severities {
        Ok(severities) => AnalysisSummary::new(SkinType::Normal, severities),
        Err(error) => {
            return DoctorCheck {
                name: "recommendation_dry_run",
                status: CheckStatus::Fail,
                details: error.to_string(),
            };
        }
    };

    let engine = RecommendationEngine::with_default_limit(config.recommendation.default_limit);
    let report = engine.recommend_for(
        catalog.products(),
        &analysis,
        &config.recommendation.default_preferences(),
        None,
    );

    DoctorCheck {
        name: "recommendation_dry_run",
        status: CheckStatus::Pass,
        details: format!(
            "{} products ranked for the {} budget tier",
            report.summary.total_count, config.recommendation.budget_tier
        ),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
