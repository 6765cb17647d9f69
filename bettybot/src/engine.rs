//! Loaded registries bundled for building
//!
//! The engine is created once at startup and shared read-only afterwards;
//! every build works on its own merged copy of the input.

use std::path::PathBuf;

use crate::build::Files;
use crate::config::Settings;
use crate::error::{BuildError, LoadError};
use crate::template::TemplateSet;
use crate::theme::ThemeSet;

/// Template and theme registries used to build a [`Files`] collection
#[derive(Debug, Clone)]
pub struct Engine {
    templates: TemplateSet,
    themes: ThemeSet,
}

impl Engine {
    /// Create an engine from already loaded registries
    #[must_use]
    pub const fn new(templates: TemplateSet, themes: ThemeSet) -> Self {
        Self { templates, themes }
    }

    /// Load both registries from the locations in `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if either registry fails to load.
    pub fn load(settings: &Settings) -> Result<Self, LoadError> {
        let templates = TemplateSet::load(&settings.templates)?;
        let themes = ThemeSet::load(&settings.themes_dir)?;
        Ok(Self::new(templates, themes))
    }

    /// Loaded templates
    #[must_use]
    pub const fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Loaded themes
    #[must_use]
    pub const fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    /// Build `files` into one text
    ///
    /// # Errors
    ///
    /// See [`Files::build`].
    pub fn build(&self, files: &Files) -> Result<String, BuildError> {
        files.build(self)
    }

    /// Build `files` and write each file to disk
    ///
    /// # Errors
    ///
    /// See [`Files::build_and_write`].
    pub fn build_and_write(&self, files: &Files) -> Result<Vec<PathBuf>, BuildError> {
        files.build_and_write(self)
    }
}
