//! Error types and error handling
//!
//! Loading failures ([`LoadError`]) happen once at startup and are fatal.
//! Build failures ([`BuildError`]) abort the current build; no partial
//! output is ever returned alongside one.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for bettybot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading the theme or template registries
#[derive(Debug, Error)]
pub enum LoadError {
    /// Themes directory could not be listed
    #[error("failed to read themes directory '{}': {source}", path.display())]
    ThemesDir {
        /// Directory that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A theme file could not be read
    #[error("failed to read theme '{name}': {source}")]
    ReadTheme {
        /// Theme name (file name)
        name: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A theme file is not a flat JSON object
    #[error("failed to decode json theme '{name}': {source}")]
    DecodeTheme {
        /// Theme name (file name)
        name: String,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// Template source pattern is not a valid glob
    #[error("invalid template pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Underlying glob error
        source: glob::PatternError,
    },

    /// Template source pattern matched nothing
    #[error("template pattern '{0}' matched no files")]
    NoTemplates(String),

    /// A template file could not be read
    #[error("failed to read template '{}': {source}", path.display())]
    ReadTemplate {
        /// Template file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The template delimiter configuration was rejected
    #[error("invalid template syntax configuration: {0}")]
    Syntax(minijinja::Error),

    /// A template failed to parse
    #[error("error parsing template '{name}': {source}")]
    ParseTemplate {
        /// Template name
        name: String,
        /// Underlying template engine error
        source: minijinja::Error,
    },
}

impl From<glob::GlobError> for LoadError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        Self::ReadTemplate {
            path,
            source: err.into_error(),
        }
    }
}

/// Errors raised while merging variables, rendering or writing output
#[derive(Debug, Error)]
pub enum BuildError {
    /// A file or collection referenced a theme that is not loaded
    #[error("theme '{name}' not found")]
    UnknownTheme {
        /// Theme name as referenced
        name: String,
    },

    /// A module's template is missing or failed to render
    #[error("error executing module '{module}': {source}")]
    Render {
        /// Module (template) name
        module: String,
        /// Underlying template engine error
        source: minijinja::Error,
    },

    /// Write requested for a file without a filename
    #[error("cannot write to file, missing filename")]
    MissingFilename,

    /// Write requested without an output directory
    #[error("cannot write to file, missing outputDir")]
    MissingOutputDir,

    /// Writing the rendered output failed
    #[error("error writing file '{}': {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input configuration document could not be read
    #[error("error reading JSON config '{}': {source}", path.display())]
    ReadInput {
        /// Path of the configuration document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input configuration document is not valid
    #[error("error decoding JSON config: {0}")]
    DecodeInput(#[from] serde_json::Error),
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Registry loading error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Build error
    #[error(transparent)]
    Build(#[from] BuildError),
}
