//! Application configuration.

use crate::consts::cli_consts::api::{API_URL_ENV_VAR, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = ".restaurant-dashboard";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the menu API, e.g. `http://localhost:3333`
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_API_URL.to_string())
    }
}

impl Config {
    /// Create Config with the given API URL.
    pub fn new(api_url: String) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Delete the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if !path.ends_with(CONFIG_FILE) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path must end with {}", CONFIG_FILE),
            ));
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)
    }
}

/// Location of the config file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Pick the API URL: command-line flag, then environment, then config file, then default.
pub fn resolve_api_url(flag: Option<String>, config_path: &Path) -> String {
    let from_env = std::env::var(API_URL_ENV_VAR).ok();
    let from_file = if config_path.exists() {
        Config::load_from_file(config_path).ok().map(|c| c.api_url)
    } else {
        None
    };
    choose_api_url(flag, from_env, from_file)
}

fn choose_api_url(
    flag: Option<String>,
    from_env: Option<String>,
    from_file: Option<String>,
) -> String {
    [flag, from_env, from_file]
        .into_iter()
        .flatten()
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
