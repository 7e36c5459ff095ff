pub mod catalog;
pub mod concerns;
pub mod config;
pub mod doctor;
pub mod explain;
pub mod input;
pub mod recommend;

use glowmatch_core::config::{AppConfig, ConfigError, LoadOptions};
use glowmatch_core::ApplicationError;
use serde::Serialize;
use serde_json::Value;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_INPUT: u8 = 3;
pub const EXIT_CATALOG: u8 = 4;
pub const EXIT_SERIALIZATION: u8 = 5;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

/// Error class, message and exit code for a failed command step.
pub type Failure = (&'static str, String, u8);

impl CommandResult {
    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_failure(command: &str, (error_class, message, exit_code): Failure) -> Self {
        Self::failure(command, error_class, message, exit_code)
    }
}

pub fn load_config() -> Result<AppConfig, Failure> {
    AppConfig::load(LoadOptions::default()).map_err(config_failure)
}

pub fn config_failure(error: ConfigError) -> Failure {
    ("config_validation", format!("configuration issue: {error}"), EXIT_CONFIG)
}

/// Maps core failures onto the interface error contract for user-facing output.
pub fn application_failure(error: impl Into<ApplicationError>) -> Failure {
    let error = error.into();
    let (error_class, exit_code) = match &error {
        ApplicationError::Domain(_) => ("input_validation", EXIT_INPUT),
        ApplicationError::Catalog(_) => ("catalog_load", EXIT_CATALOG),
        ApplicationError::Configuration(_) => ("config_validation", EXIT_CONFIG),
    };
    let interface = error.into_interface(correlation_id());
    (error_class, format!("{} ({interface})", interface.user_message()), exit_code)
}

pub fn to_data(value: &impl Serialize) -> Result<Value, Failure> {
    serde_json::to_value(value).map_err(|error| {
        ("serialization", format!("failed to serialize output: {error}"), EXIT_SERIALIZATION)
    })
}

fn correlation_id() -> String {
    format!("cli-{}", std::process::id())
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
