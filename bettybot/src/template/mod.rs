//! Template registry
//!
//! Every file matched by a glob pattern is parsed into a named template; the
//! name is the file's base name, extension included. Templates use the
//! square-bracket dialect described in [`syntax`].
//!
//! # Example
//!
//! ```rust
//! use bettybot::template::TemplateSet;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let templates = TemplateSet::from_sources([("greet", "Hello [[.name]]")])?;
//! let values = json!({ "name": "Ann" });
//! let text = templates.render("greet", values.as_object().unwrap())?;
//! assert_eq!(text, "Hello Ann");
//! # Ok(())
//! # }
//! ```

pub mod syntax;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::{Map, Value};
use std::fs;

use crate::error::LoadError;

/// Immutable collection of parsed, named templates
#[derive(Debug, Clone)]
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Parse every file matching `pattern`
    ///
    /// Directories matched by the pattern are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid, matches no files, or if a
    /// matched file cannot be read or parsed.
    pub fn load(pattern: &str) -> Result<Self, LoadError> {
        let paths = glob::glob(pattern).map_err(|source| LoadError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut sources = Vec::new();
        for path in paths {
            let path = path?;
            if path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|source| LoadError::ReadTemplate {
                path: path.clone(),
                source,
            })?;
            sources.push((name, source));
        }

        if sources.is_empty() {
            return Err(LoadError::NoTemplates(pattern.to_string()));
        }

        let set = Self::from_sources(sources)?;
        tracing::info!(count = set.len(), %pattern, "Loaded templates");
        Ok(set)
    }

    /// Parse templates from in-memory `(name, source)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to parse.
    pub fn from_sources<I, N, S>(sources: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let mut env = Self::environment().map_err(LoadError::Syntax)?;

        for (name, source) in sources {
            let name = name.into();
            let source = syntax::normalize_source(source.as_ref());
            env.add_template_owned(name.clone(), source)
                .map_err(|source| LoadError::ParseTemplate { name, source })?;
        }

        Ok(Self { env })
    }

    fn environment() -> Result<Environment<'static>, minijinja::Error> {
        let mut env = Environment::new();
        env.set_syntax(syntax::syntax_config()?);
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        Ok(env)
    }

    /// Render the named template against `values`
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not exist, or if rendering fails
    /// (undefined reference, invalid operation, ...).
    pub fn render(
        &self,
        name: &str,
        values: &Map<String, Value>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(values)
    }

    /// Whether a template with this name is loaded
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Loaded template names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.env.templates().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }

    /// Number of loaded templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.env.templates().count()
    }

    /// Whether no templates are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
