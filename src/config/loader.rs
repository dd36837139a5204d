// SPDX-License-Identifier: MIT

//! Configuration loading and discovery.

use crate::error::{ConfigError, LintrcError, Result};
use std::path::{Path, PathBuf};

use super::presets;
use super::schema::ConfigDocument;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["lintrc.toml", ".lintrc.toml", ".config/lintrc.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("lintrc").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }

    None
}

/// Load configuration from the default locations.
///
/// Falls back to the standard preset when no file is found.
pub fn load_config() -> Result<ConfigDocument> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using the standard preset");
            Ok(presets::standard())
        }
    }
}

/// Load configuration from a specific path.
///
/// TOML by default; files with a `.json` extension parse as the
/// linter ecosystem's native JSON shape.
pub fn load_config_from(path: &Path) -> Result<ConfigDocument> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintrcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintrcError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_config_json(&content)
    } else {
        parse_config(&content)
    }
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<ConfigDocument> {
    toml::from_str(content).map_err(|e| {
        LintrcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Parse configuration from a JSON string.
pub fn parse_config_json(content: &str) -> Result<ConfigDocument> {
    serde_json::from_str(content).map_err(|e| {
        LintrcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })
}
