//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ConsoleConfig;
use crate::routing::TableError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_table_errors(.0))]
    Validation(Vec<TableError>),
}

/// Load and validate configuration from a TOML file.
///
/// The selected profile's table is built once here so that a bad fallback
/// target is rejected at load time, not at first navigation.
pub fn load_config(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ConsoleConfig = toml::from_str(&content)?;

    config.build_router().map_err(ConfigError::Validation)?;

    tracing::info!(
        path = %path.display(),
        profile = %config.profile,
        "configuration loaded"
    );
    Ok(config)
}

fn format_table_errors(errors: &[TableError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
