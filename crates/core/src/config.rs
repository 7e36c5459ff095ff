use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::preferences::{BudgetTier, ProductPreference, UserPreferences};
use crate::recommendations::DEFAULT_LIMIT;

pub const CONFIG_FILE_NAME: &str = "glowmatch.toml";
pub const NESTED_CONFIG_FILE: &str = "config/glowmatch.toml";

/// Upper bound on results a single call may request.
pub const MAX_RECOMMENDATION_LIMIT: usize = 100;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub recommendation: RecommendationConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct RecommendationConfig {
    pub default_limit: usize,
    pub budget_tier: BudgetTier,
    pub product_preference: ProductPreference,
    pub catalog_path: Option<PathBuf>,
}

impl RecommendationConfig {
    pub fn default_preferences(&self) -> UserPreferences {
        UserPreferences::new(self.budget_tier, self.product_preference)
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub default_limit: Option<usize>,
    pub budget_tier: Option<BudgetTier>,
    pub product_preference: Option<ProductPreference>,
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recommendation: RecommendationConfig {
                default_limit: DEFAULT_LIMIT,
                budget_tier: BudgetTier::default(),
                product_preference: ProductPreference::default(),
                catalog_path: None,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(recommendation) = patch.recommendation {
            if let Some(default_limit) = recommendation.default_limit {
                self.recommendation.default_limit = default_limit;
            }
            if let Some(budget_tier) = recommendation.budget_tier {
                self.recommendation.budget_tier = budget_tier;
            }
            if let Some(product_preference) = recommendation.product_preference {
                self.recommendation.product_preference = product_preference;
            }
            if let Some(catalog_path) = recommendation.catalog_path {
                self.recommendation.catalog_path = Some(catalog_path);
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("GLOWMATCH_RECOMMENDATION_LIMIT") {
            self.recommendation.default_limit =
                parse_usize("GLOWMATCH_RECOMMENDATION_LIMIT", &value)?;
        }
        if let Some(value) = read_env("GLOWMATCH_BUDGET_TIER") {
            self.recommendation.budget_tier = value.parse().map_err(|_| {
                ConfigError::InvalidEnvOverride {
                    key: "GLOWMATCH_BUDGET_TIER".to_string(),
                    value: value.clone(),
                }
            })?;
        }
        if let Some(value) = read_env("GLOWMATCH_PRODUCT_PREFERENCE") {
            self.recommendation.product_preference = value.parse().map_err(|_| {
                ConfigError::InvalidEnvOverride {
                    key: "GLOWMATCH_PRODUCT_PREFERENCE".to_string(),
                    value: value.clone(),
                }
            })?;
        }
        if let Some(value) = read_env("GLOWMATCH_CATALOG_PATH") {
            self.recommendation.catalog_path = Some(PathBuf::from(value));
        }

        let log_level =
            read_env("GLOWMATCH_LOGGING_LEVEL").or_else(|| read_env("GLOWMATCH_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("GLOWMATCH_LOGGING_FORMAT").or_else(|| read_env("GLOWMATCH_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(default_limit) = overrides.default_limit {
            self.recommendation.default_limit = default_limit;
        }
        if let Some(budget_tier) = overrides.budget_tier {
            self.recommendation.budget_tier = budget_tier;
        }
        if let Some(product_preference) = overrides.product_preference {
            self.recommendation.product_preference = product_preference;
        }
        if let Some(catalog_path) = overrides.catalog_path {
            self.recommendation.catalog_path = Some(catalog_path);
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_recommendation(&self.recommendation)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

/// Explicit path when it exists, otherwise the first default location found.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from(CONFIG_FILE_NAME), PathBuf::from(NESTED_CONFIG_FILE)]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_recommendation(recommendation: &RecommendationConfig) -> Result<(), ConfigError> {
    if recommendation.default_limit == 0
        || recommendation.default_limit > MAX_RECOMMENDATION_LIMIT
    {
        return Err(ConfigError::Validation(format!(
            "recommendation.default_limit must be in range 1..={MAX_RECOMMENDATION_LIMIT}"
        )));
    }

    if let Some(path) = &recommendation.catalog_path {
        if !path.exists() {
            return Err(ConfigError::Validation(format!(
                "recommendation.catalog_path `{}` does not exist",
                path.display()
            )));
        }
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    recommendation: Option<RecommendationPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendationPatch {
    default_limit: Option<usize>,
    budget_tier: Option<BudgetTier>,
    product_preference: Option<ProductPreference>,
    catalog_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
