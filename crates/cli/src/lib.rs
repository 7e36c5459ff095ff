pub mod commands;

use clap::{Parser, Subcommand};
use glowmatch_core::config::{AppConfig, LoadOptions, LogFormat};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "glowmatch",
    about = "GlowMatch skincare recommendation CLI",
    long_about = "Derive skin concerns from an assessment, rank catalog products, explain picks, and inspect configuration.",
    after_help = "Examples:\n  glowmatch recommend --skin-type oily --severity sebum=7 --severity acne=6\n  glowmatch recommend --analysis analysis.json --budget high --preference natural\n  glowmatch catalog --search niacinamide\n  glowmatch doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank catalog products for an analysed skin profile")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(about = "Derive concern labels from attribute severities")]
    Concerns(commands::input::AnalysisArgs),
    #[command(about = "Explain why a single catalog product suits an analysed skin profile")]
    Explain(commands::explain::ExplainArgs),
    #[command(about = "List or search catalog products")]
    Catalog(commands::catalog::CatalogArgs),
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config, catalog loading, and a recommendation dry run")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args),
        Command::Concerns(args) => commands::concerns::run(&args),
        Command::Explain(args) => commands::explain::run(&args),
        Command::Catalog(args) => commands::catalog::run(&args),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so command payloads on stdout stay machine-readable.
fn init_logging() {
    use tracing::Level;

    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
