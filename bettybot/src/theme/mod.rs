//! Theme registry
//!
//! A theme is a named, flat set of default variables. Themes are loaded once
//! from a directory of JSON files, keyed by file name (extension included),
//! and are read-only afterwards.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Variables carried by a single theme
pub type Theme = Map<String, Value>;

/// Immutable mapping from theme name to its variables
#[derive(Debug, Clone, Default)]
pub struct ThemeSet {
    themes: HashMap<String, Theme>,
}

impl ThemeSet {
    /// Load every theme file in `dir`
    ///
    /// Sub-directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed, or if any entry
    /// cannot be read or is not a JSON object.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| LoadError::ThemesDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut themes = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::ThemesDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.path().is_dir() {
                tracing::debug!(theme = %name, "Skipping directory in themes dir");
                continue;
            }

            let bytes = fs::read(entry.path()).map_err(|source| LoadError::ReadTheme {
                name: name.clone(),
                source,
            })?;
            let theme: Theme = serde_json::from_slice(&bytes).map_err(|source| {
                LoadError::DecodeTheme {
                    name: name.clone(),
                    source,
                }
            })?;

            themes.insert(name, theme);
        }

        tracing::info!(count = themes.len(), dir = %dir.display(), "Loaded themes");
        Ok(Self { themes })
    }

    /// Look up a theme by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Whether a theme with this name is loaded
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Number of loaded themes
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether no themes are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Loaded theme names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<(String, Theme)> for ThemeSet {
    fn from_iter<I: IntoIterator<Item = (String, Theme)>>(iter: I) -> Self {
        Self {
            themes: iter.into_iter().collect(),
        }
    }
}
