use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for bump-version.
///
/// Holds the paths of the two documents kept in sync: the project manifest
/// with the canonical version declaration, and the package marker file with
/// the runtime-readable `__version__` copy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest_path")]
    pub manifest: String,

    #[serde(default = "default_marker_path")]
    pub marker: String,
}

/// Returns the default manifest path.
fn default_manifest_path() -> String {
    "pyproject.toml".to_string()
}

/// Returns the default version marker path.
fn default_marker_path() -> String {
    "__init__.py".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest_path(),
            marker: default_marker_path(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in current directory
/// 3. `.bumpversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumpversion.toml").exists() {
        fs::read_to_string("./bumpversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumpversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
