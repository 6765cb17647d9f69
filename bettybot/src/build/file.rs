use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use super::merge::{Scope, Values};
use super::module::Module;
use super::null_as_default;
use crate::error::BuildError;
use crate::template::TemplateSet;
use crate::theme::ThemeSet;

/// Permission bits for written output files (Unix only)
pub const OUTPUT_FILE_MODE: u32 = 0o664;

/// An ordered group of modules rendered into one output text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Modules in render order
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<Module>,

    /// Variables applied to every module in this file
    #[serde(default, deserialize_with = "null_as_default")]
    pub globals: Values,

    /// Themes applied to every module in this file, earliest wins
    #[serde(default, deserialize_with = "null_as_default")]
    pub themes: Vec<String>,

    /// Name of the output file, relative to the output directory
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,

    /// Output directory, injected by the owning collection
    #[serde(skip)]
    output_dir: PathBuf,
}

impl File {
    /// Create a file from its modules
    #[must_use]
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            ..Self::default()
        }
    }

    /// Set the file's globals
    #[must_use]
    pub fn with_globals(mut self, globals: Values) -> Self {
        self.globals = globals;
        self
    }

    /// Set the file's themes
    #[must_use]
    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output filename
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Output directory this file writes into
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// This file's own merge scope
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(&self.globals, &self.themes)
    }

    /// Copy of this file with every module merged against this file's scope
    /// and `collection`, writing into `output_dir`
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownTheme`] on the first unknown theme.
    pub fn merged(
        &self,
        collection: Scope<'_>,
        output_dir: &Path,
        themes: &ThemeSet,
    ) -> Result<Self, BuildError> {
        let modules = self
            .modules
            .iter()
            .map(|module| module.merged(self.scope(), collection, themes))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            modules,
            globals: self.globals.clone(),
            themes: self.themes.clone(),
            filename: self.filename.clone(),
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Render every module in order and concatenate the results
    ///
    /// Module values are used as they are; merging is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Render`] for the first module that fails.
    pub fn build(&self, templates: &TemplateSet) -> Result<String, BuildError> {
        let mut output = String::new();
        for module in &self.modules {
            output.push_str(&module.render(templates)?);
        }
        Ok(output)
    }

    /// Build this file and write it to `<output_dir>/<filename>`
    ///
    /// Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails, if `filename` or the output
    /// directory is empty, or if the write fails.
    pub fn build_and_write(&self, templates: &TemplateSet) -> Result<PathBuf, BuildError> {
        let output = self.build(templates)?;
        self.write(&output)
    }

    /// Path this file writes to
    ///
    /// `filename` is always joined under the output directory; a leading root
    /// or drive prefix on it is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingFilename`] or
    /// [`BuildError::MissingOutputDir`] when either part is empty.
    pub fn output_path(&self) -> Result<PathBuf, BuildError> {
        let relative: PathBuf = Path::new(&self.filename)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        if relative.as_os_str().is_empty() {
            return Err(BuildError::MissingFilename);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(BuildError::MissingOutputDir);
        }
        Ok(self.output_dir.join(relative))
    }

    /// Write already rendered `output` to this file's path, overwriting it
    pub(crate) fn write(&self, output: &str) -> Result<PathBuf, BuildError> {
        let path = self.output_path()?;
        write_output(&path, output).map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = output.len(), "Wrote file");
        Ok(path)
    }
}

fn write_output(path: &Path, output: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(output.as_bytes())?;
    file.flush()
}
