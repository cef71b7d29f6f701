mod config;
pub mod database;

pub use config::{Config, MotivationConfig, StatsConfig};
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/taskquest[-dev]/` based on TASKQUEST_ENV.
///
/// Set TASKQUEST_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKQUEST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("taskquest-dev")
    } else {
        base_dir.join("taskquest")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
