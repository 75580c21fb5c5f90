use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumpError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "bump-version.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".bump-version.toml";

/// Returns the default build file, relative to the working directory.
fn default_build_file() -> String {
    "build.gradle".to_string()
}

/// Returns the default environment variable read when no argument is given.
fn default_version_env() -> String {
    "VERSION".to_string()
}

/// Represents the complete configuration for bump-version.
///
/// Every key is optional; missing keys fall back to the defaults, so an empty
/// file is the same as no file at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Build file holding the fallback version
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Environment variable consulted when no version argument is passed
    #[serde(default = "default_version_env")]
    pub version_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            build_file: default_build_file(),
            version_env: default_version_env(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bump-version.toml` in current directory
/// 3. `.bump-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path).map_err(|e| {
        BumpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&raw)
        .map_err(|e| BumpError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(raw: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(raw)
}
