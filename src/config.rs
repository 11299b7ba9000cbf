use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::gate::Credential;

const APP_NAME: &str = "showcase-gate";
const CONFIG_FILE: &str = "config.json";

/// Credential baked in at build time; `SHOWCASE_PASSWORD` at compile time replaces it.
const BUILD_PASSWORD: &str = match option_env!("SHOWCASE_PASSWORD") {
    Some(password) => password,
    None => "ebhemh2026",
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Directory served as the embedded demo.
    pub demo_dir: PathBuf,
    /// Where the external redirect route and the hosted bank demo point.
    pub external_url: String,
    pub port: u16,
    /// Session database location. Defaults to the platform data directory.
    pub db_path: Option<PathBuf>,
    /// Runtime credential override, only ever taken from the environment.
    #[serde(skip)]
    password: Option<Credential>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            demo_dir: PathBuf::from("demos/flutter/build/web"),
            external_url: "https://ebhemh.com/neo-bank/".to_string(),
            port: 8080,
            db_path: None,
            password: None,
        }
    }
}

impl ShowcaseConfig {
    /// Load from the user's config directory, then apply environment overrides.
    /// Falls back to defaults if the file is missing or unreadable.
    pub fn load() -> Self {
        let mut config = match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn try_load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Apply `SHOWCASE_*` overrides from `lookup`. Unparsable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(password) = lookup("SHOWCASE_PASSWORD") {
            self.password = Some(Credential::new(password));
        }
        if let Some(path) = lookup("SHOWCASE_CATALOG") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = lookup("SHOWCASE_DEMO_DIR") {
            self.demo_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("SHOWCASE_EXTERNAL_URL") {
            self.external_url = url;
        }
        if let Some(port) = lookup("SHOWCASE_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!("Invalid SHOWCASE_PORT value {:?}: {}", port, e),
            }
        }
        if let Some(path) = lookup("SHOWCASE_DB") {
            self.db_path = Some(PathBuf::from(path));
        }
    }

    pub fn credential(&self) -> Credential {
        self.password
            .clone()
            .unwrap_or_else(|| Credential::new(BUILD_PASSWORD))
    }

    /// Save the current configuration to disk. The password is never written.
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
