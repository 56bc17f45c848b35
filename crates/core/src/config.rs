use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::health::DEFAULT_STALE_AFTER_DAYS;
use crate::suggestions::{SuggestionLimits, DEFAULT_STYLIST_LIMIT, DEFAULT_WEATHER_LIMIT};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub suggestions: SuggestionsConfig,
    pub health: HealthConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct SuggestionsConfig {
    pub weather_limit: usize,
    pub stylist_limit: usize,
}

#[derive(Clone, Debug)]
pub struct HealthConfig {
    pub stale_after_days: i64,
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
    pub weather_limit: Option<usize>,
    pub stylist_limit: Option<usize>,
    pub stale_after_days: Option<i64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
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
            suggestions: SuggestionsConfig {
                weather_limit: DEFAULT_WEATHER_LIMIT,
                stylist_limit: DEFAULT_STYLIST_LIMIT,
            },
            health: HealthConfig { stale_after_days: DEFAULT_STALE_AFTER_DAYS },
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

impl SuggestionsConfig {
    pub fn limits(&self) -> SuggestionLimits {
        SuggestionLimits { weather: self.weather_limit, stylist: self.stylist_limit }
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
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("wardrobe.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(suggestions) = patch.suggestions {
            if let Some(weather_limit) = suggestions.weather_limit {
                self.suggestions.weather_limit = weather_limit;
            }
            if let Some(stylist_limit) = suggestions.stylist_limit {
                self.suggestions.stylist_limit = stylist_limit;
            }
        }

        if let Some(health) = patch.health {
            if let Some(stale_after_days) = health.stale_after_days {
                self.health.stale_after_days = stale_after_days;
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
        if let Some(value) = read_env("WARDROBE_SUGGESTIONS_WEATHER_LIMIT") {
            self.suggestions.weather_limit =
                parse_usize("WARDROBE_SUGGESTIONS_WEATHER_LIMIT", &value)?;
        }
        if let Some(value) = read_env("WARDROBE_SUGGESTIONS_STYLIST_LIMIT") {
            self.suggestions.stylist_limit =
                parse_usize("WARDROBE_SUGGESTIONS_STYLIST_LIMIT", &value)?;
        }
        if let Some(value) = read_env("WARDROBE_HEALTH_STALE_AFTER_DAYS") {
            self.health.stale_after_days = parse_i64("WARDROBE_HEALTH_STALE_AFTER_DAYS", &value)?;
        }

        let log_level =
            read_env("WARDROBE_LOGGING_LEVEL").or_else(|| read_env("WARDROBE_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("WARDROBE_LOGGING_FORMAT").or_else(|| read_env("WARDROBE_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(weather_limit) = overrides.weather_limit {
            self.suggestions.weather_limit = weather_limit;
        }
        if let Some(stylist_limit) = overrides.stylist_limit {
            self.suggestions.stylist_limit = stylist_limit;
        }
        if let Some(stale_after_days) = overrides.stale_after_days {
            self.health.stale_after_days = stale_after_days;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_suggestions(&self.suggestions)?;
        validate_health(&self.health)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("wardrobe.toml"), PathBuf::from("config/wardrobe.toml")]
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

fn validate_suggestions(suggestions: &SuggestionsConfig) -> Result<(), ConfigError> {
    if suggestions.weather_limit == 0 {
        return Err(ConfigError::Validation(
            "suggestions.weather_limit must be greater than zero".to_string(),
        ));
    }

    if suggestions.stylist_limit == 0 {
        return Err(ConfigError::Validation(
            "suggestions.stylist_limit must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_health(health: &HealthConfig) -> Result<(), ConfigError> {
    if health.stale_after_days < 1 {
        return Err(ConfigError::Validation(
            "health.stale_after_days must be at least 1".to_string(),
        ));
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

fn parse_i64(key: &str, value: &str) -> Result<i64, ConfigError> {
    value.trim().parse::<i64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    suggestions: Option<SuggestionsPatch>,
    health: Option<HealthPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct SuggestionsPatch {
    weather_limit: Option<usize>,
    stylist_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct HealthPatch {
    stale_after_days: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
