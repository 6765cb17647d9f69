use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::file::File;
use super::merge::{Scope, Values};
use super::null_as_default;
use crate::engine::Engine;
use crate::error::BuildError;
use crate::template::TemplateSet;
use crate::theme::ThemeSet;

/// Marker placed between the texts of consecutive files
pub const FILE_SEPARATOR: &str = "\n\nNEW FILE\n\n";

/// A collection of files sharing an output directory, globals and themes
///
/// This is the input configuration document:
///
/// ```json
/// {
///   "outputDir": "./out",
///   "globals": { "author": "Ann" },
///   "themes": ["dark.json"],
///   "files": [
///     {
///       "filename": "index.md",
///       "globals": {},
///       "themes": [],
///       "modules": [{ "name": "header.md", "values": { "title": "Hello" } }]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Files {
    /// Directory every file is written into
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_dir: PathBuf,

    /// Files in render order
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<File>,

    /// Variables applied to every module of every file
    #[serde(default, deserialize_with = "null_as_default")]
    pub globals: Values,

    /// Themes applied to every module of every file, earliest wins
    #[serde(default, deserialize_with = "null_as_default")]
    pub themes: Vec<String>,
}

impl Files {
    /// Decode a configuration document
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DecodeInput`] if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a configuration document from disk
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ReadInput`] or [`BuildError::DecodeInput`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BuildError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The collection-wide merge scope
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(&self.globals, &self.themes)
    }

    /// Working copy with every module's values merged and every file's
    /// output directory set
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownTheme`] on the first unknown theme.
    pub fn merge(&self, themes: &ThemeSet) -> Result<Self, BuildError> {
        let files = self
            .files
            .iter()
            .map(|file| file.merged(self.scope(), &self.output_dir, themes))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(files = files.len(), "Merged variables");
        Ok(Self {
            output_dir: self.output_dir.clone(),
            files,
            globals: self.globals.clone(),
            themes: self.themes.clone(),
        })
    }

    /// Render every file of an already merged collection, in order
    fn render(&self, templates: &TemplateSet) -> Result<Vec<String>, BuildError> {
        self.files.iter().map(|file| file.build(templates)).collect()
    }

    /// Merge, render and join every file's text with [`FILE_SEPARATOR`]
    ///
    /// # Errors
    ///
    /// Returns the first merge or render error; no text is produced then.
    pub fn build(&self, engine: &Engine) -> Result<String, BuildError> {
        let merged = self.merge(engine.themes())?;
        let outputs = merged.render(engine.templates())?;
        tracing::info!(files = outputs.len(), "Build complete");
        Ok(outputs.join(FILE_SEPARATOR))
    }

    /// Merge and render every file, then write each to its path
    ///
    /// Nothing is written unless every file renders. A write failure leaves
    /// the files written before it in place.
    ///
    /// # Errors
    ///
    /// Returns the first merge, render, missing-field or write error.
    pub fn build_and_write(&self, engine: &Engine) -> Result<Vec<PathBuf>, BuildError> {
        let merged = self.merge(engine.themes())?;
        let outputs = merged.render(engine.templates())?;

        merged
            .files
            .iter()
            .zip(&outputs)
            .map(|(file, output)| file.write(output))
            .collect()
    }
}
