mod config;

pub use config::{Config, ProfileConfig, QuizConfig, TeamConfig, TimerConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/productivity-coach[-dev]/` based on PRODUCTIVITY_COACH_ENV.
///
/// Set PRODUCTIVITY_COACH_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PRODUCTIVITY_COACH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("productivity-coach-dev")
    } else {
        base_dir.join("productivity-coach")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
