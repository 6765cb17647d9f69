//! CLI command implementations

pub mod build;
pub mod web;

pub use build::BuildCommand;
pub use web::WebCommand;

use anyhow::{Context, Result};
use bettybot::config::Settings;
use std::path::PathBuf;

/// Where to find settings, themes and templates
#[derive(Debug, Default, clap::Args)]
pub struct RegistryArgs {
    /// Settings file (defaults to ./bettybot.toml when present)
    #[arg(long = "settings", global = true)]
    pub settings_file: Option<PathBuf>,

    /// Directory of JSON theme files
    #[arg(long, global = true)]
    pub themes: Option<PathBuf>,

    /// Glob pattern selecting template files
    #[arg(long, global = true)]
    pub templates: Option<String>,
}

impl RegistryArgs {
    /// Resolve settings, with command-line flags taking precedence
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings_file {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))?,
            None => Settings::load().context("Failed to load settings")?,
        };

        if let Some(dir) = &self.themes {
            settings = settings.with_themes_dir(dir);
        }
        if let Some(pattern) = &self.templates {
            settings = settings.with_templates(pattern);
        }

        tracing::debug!(?settings, "Resolved settings");
        Ok(settings)
    }
}
