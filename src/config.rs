//! Theme configuration
//!
//! The report colors come from an optional TOML file mapping semantic labels
//! to color names. The file lives in the user config dir, with a packaged
//! copy under /usr/share as the system-wide fallback. A missing or malformed
//! file degrades to the built-in palette; config problems never abort a run.

use crate::error::{BoardcheckError, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SYSTEM_CONFIG_PATH: &str = "/usr/share/boardcheck/config.toml";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Semantic label -> named ANSI color or "#rrggbb"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DisplayConfig {
    pub separator: Option<String>,
    pub banner_path: Option<String>,
}

pub fn load_config() -> Config {
    let user_config_path = config_dir().map(|p| p.join("boardcheck/config.toml"));

    let config_path = match user_config_path {
        Some(path) if path.exists() => path,
        _ => PathBuf::from(SYSTEM_CONFIG_PATH),
    };

    if !config_path.exists() {
        return Config::default();
    }

    match read_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "Warning: ignoring config {}: {}",
                config_path.display(),
                err
            );
            Config::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)?;
    toml::de::from_str(&data).map_err(|err| BoardcheckError::Config(err.to_string()))
}
