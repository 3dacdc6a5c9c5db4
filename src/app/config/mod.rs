//! Application configuration loading.
//!
//! The config file is optional; every API field has a default, so a missing
//! file yields a working configuration pointed at the hosted Groq endpoint.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, GroqApiConfig};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "COPYGEN_CONFIG";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: Option<GroqApiConfig>,
}

/// Resolve the config file path.
///
/// `$COPYGEN_CONFIG` wins when set; otherwise
/// `$HOME/.config/copygen/config.toml` for consistency across platforms and
/// tests.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("copygen").join("config.toml"))
}

/// Load the API configuration from the config file, if one exists.
pub fn load_api_config() -> Result<GroqApiConfig, AppError> {
    let Some(path) = config_path() else {
        return Ok(GroqApiConfig::default());
    };

    if !path.exists() {
        return Ok(GroqApiConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file.api.unwrap_or_default())
}
