//! bettybot: layered variables and themed templates for generated documents
//!
//! A build takes a [`Files`] collection (usually decoded from a JSON
//! configuration document), merges the variables of every module with the
//! file-level and collection-level globals and themes, renders each module's
//! template and concatenates the results.
//!
//! # Quick Start
//!
//! ```rust
//! use bettybot::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let templates = TemplateSet::from_sources([("greet", "Hello [[.name]], color [[.color]]")])?;
//! let themes: ThemeSet = [(
//!     "dark".to_string(),
//!     json!({ "color": "black" }).as_object().cloned().unwrap_or_default(),
//! )]
//! .into_iter()
//! .collect();
//! let engine = Engine::new(templates, themes);
//!
//! let files = Files::from_json(
//!     r#"{ "files": [{ "themes": ["dark"], "modules": [{ "name": "greet", "values": { "name": "Ann" } }] }] }"#,
//! )?;
//! assert_eq!(engine.build(&files)?, "Hello Ann, color black");
//! # Ok(())
//! # }
//! ```
//!
//! # Variable precedence
//!
//! Merging never overwrites a key. For each module the scopes are applied in
//! this order, so earlier entries win:
//!
//! 1. the module's own `values`
//! 2. the file's `globals`
//! 3. the collection's `globals`
//! 4. the file's `themes`, in listed order
//! 5. the collection's `themes`, in listed order

pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod observability;
pub mod template;
pub mod theme;
pub mod web;

pub use build::{File, Files, Module, FILE_SEPARATOR};
pub use engine::Engine;
pub use error::{BuildError, Error, LoadError, Result};

pub mod prelude {
    //! Convenience re-exports for common types

    pub use crate::build::{File, Files, Module, Values, FILE_SEPARATOR};
    pub use crate::config::Settings;
    pub use crate::engine::Engine;
    pub use crate::error::{BuildError, LoadError};
    pub use crate::template::TemplateSet;
    pub use crate::theme::ThemeSet;
}
