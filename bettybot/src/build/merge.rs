//! Additive variable merging
//!
//! Merging only ever inserts missing keys: whichever scope sets a key first
//! keeps it. For one module the scopes are applied in this sequence:
//!
//! 1. the module's own values
//! 2. the file's globals
//! 3. the collection's globals
//! 4. the file's themes, in listed order
//! 5. the collection's themes, in listed order

use serde_json::{Map, Value};

use crate::error::BuildError;
use crate::theme::ThemeSet;

/// A flat variable namespace
pub type Values = Map<String, Value>;

/// Globals and theme names contributed by one level (file or collection)
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    /// Variables applied to every module in scope
    pub globals: &'a Values,
    /// Theme names applied to every module in scope
    pub themes: &'a [String],
}

impl<'a> Scope<'a> {
    /// Create a scope
    #[must_use]
    pub const fn new(globals: &'a Values, themes: &'a [String]) -> Self {
        Self { globals, themes }
    }
}

/// Insert every key of `overrides` that `target` does not already have
pub fn merge_into(target: &mut Values, overrides: &Values) {
    for (key, value) in overrides {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}

/// Merge the named themes into `target`, in order
///
/// Stops at the first unknown theme; themes listed after it are not applied.
///
/// # Errors
///
/// Returns [`BuildError::UnknownTheme`] if a name is not in `themes`.
pub fn apply_themes(
    target: &mut Values,
    names: &[String],
    themes: &ThemeSet,
) -> Result<(), BuildError> {
    for name in names {
        let theme = themes
            .get(name)
            .ok_or_else(|| BuildError::UnknownTheme { name: name.clone() })?;
        merge_into(target, theme);
    }
    Ok(())
}

/// Compute the final namespace of one module
///
/// # Errors
///
/// Returns [`BuildError::UnknownTheme`] if either scope names a theme that is
/// not loaded.
pub fn merge_scopes(
    values: &Values,
    file: Scope<'_>,
    collection: Scope<'_>,
    themes: &ThemeSet,
) -> Result<Values, BuildError> {
    let mut merged = values.clone();
    merge_into(&mut merged, file.globals);
    merge_into(&mut merged, collection.globals);
    apply_themes(&mut merged, file.themes, themes)?;
    apply_themes(&mut merged, collection.themes, themes)?;
    Ok(merged)
}
