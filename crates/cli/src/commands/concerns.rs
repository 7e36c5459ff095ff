use serde::Serialize;

use glowmatch_core::{ConcernLabel, SkinType, CONCERN_THRESHOLD};

use super::input::AnalysisArgs;
use super::{to_data, CommandResult, Failure};

#[derive(Debug, Serialize)]
struct ConcernsData {
    skin_type: SkinType,
    threshold: u8,
    concerns: Vec<ConcernLabel>,
}

pub fn run(args: &AnalysisArgs) -> CommandResult {
    match execute(args) {
        Ok((message, data)) => CommandResult::success_with_data("concerns", message, Some(data)),
        Err(failure) => CommandResult::from_failure("concerns", failure),
    }
}

fn execute(args: &AnalysisArgs) -> Result<(String, serde_json::Value), Failure> {
    let analysis = args.resolve()?;
    let data = ConcernsData {
        skin_type: analysis.skin_type,
        threshold: CONCERN_THRESHOLD,
        concerns: analysis.concerns(),
    };

    let message = if data.concerns.is_empty() {
        "no attribute reached the concern threshold".to_string()
    } else {
        format!("{} concerns derived", data.concerns.len())
    };
    Ok((message, to_data(&data)?))
}
