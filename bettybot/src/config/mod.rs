//! Configuration management for bettybot
//!
//! Settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `BETTYBOT_` prefix, `__` for nesting)
//! 2. `./bettybot.toml`, or the file passed to [`Settings::load_from`]
//! 3. Hardcoded defaults (fallback)
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Example Configuration
//!
//! ```toml
//! # bettybot.toml
//! themes_dir = "./data/themes/"
//! templates = "./data/modules/*"
//!
//! [web]
//! host = "0.0.0.0"
//! port = 8000
//! ```
//!
//! # Usage
//!
//! ```rust
//! use bettybot::config::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.web.port, 8000);
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Local settings file picked up when no explicit file is given
pub const LOCAL_CONFIG_FILE: &str = "./bettybot.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "BETTYBOT_";

/// Web entry point configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WebSettings {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl WebSettings {
    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns an error if `host:port` does not parse as a socket address.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Complete bettybot configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one JSON file per theme
    pub themes_dir: PathBuf,

    /// Glob pattern selecting the template files
    pub templates: String,

    /// Web entry point settings
    pub web: WebSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from("./data/themes/"),
            templates: "./data/modules/*".to_string(),
            web: WebSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, `./bettybot.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default settings cannot be serialized to TOML
    /// - `./bettybot.toml` exists but cannot be parsed
    /// - Environment values fail type conversion
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let settings = figment.merge(Self::env()).extract()?;
        Ok(settings)
    }

    /// Load settings from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file contains invalid TOML syntax
    /// - Values fail type conversion
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("settings file not found: {}", path.display());
        }

        let settings = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()?;

        Ok(settings)
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }

    /// Override the themes directory
    #[must_use]
    pub fn with_themes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.themes_dir = dir.into();
        self
    }

    /// Override the template pattern
    #[must_use]
    pub fn with_templates(mut self, pattern: impl Into<String>) -> Self {
        self.templates = pattern.into();
        self
    }
}
