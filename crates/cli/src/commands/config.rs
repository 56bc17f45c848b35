use std::path::{Path, PathBuf};

use serde_json::json;

use crate::commands::{load_config, CommandResult};

pub fn run() -> CommandResult {
    let config = match load_config() {
        Ok(config) => config,
        Err(error) => return CommandResult::from_error("config", &error),
    };

    let source = detect_config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());

    let data = json!({
        "source": source,
        "suggestions.weather_limit": config.suggestions.weather_limit,
        "suggestions.stylist_limit": config.suggestions.stylist_limit,
        "health.stale_after_days": config.health.stale_after_days,
        "logging.level": config.logging.level,
        "logging.format": config.logging.format,
    });

    CommandResult::success(
        "config",
        "effective config (source precedence: overrides > env > file > default)",
        Some(data),
    )
}

fn detect_config_path() -> Option<PathBuf> {
    [Path::new("wardrobe.toml"), Path::new("config/wardrobe.toml")]
        .into_iter()
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}
