//! Variable merging and document rendering
//!
//! A [`Files`] collection holds [`File`]s, each an ordered list of
//! [`Module`]s. Building runs in two phases:
//!
//! 1. **Merge**: every module's values are layered with its file's globals
//!    and the collection's globals, then the file's and the collection's
//!    themes. Existing keys are never overwritten (see [`merge`]).
//! 2. **Render**: modules render in order and concatenate into their file's
//!    text; file texts are joined with [`FILE_SEPARATOR`].
//!
//! The merge phase produces a working copy; the input collection is left
//! untouched, so one collection can be built any number of times.

mod file;
mod files;
pub mod merge;
mod module;

pub use file::{File, OUTPUT_FILE_MODE};
pub use files::{Files, FILE_SEPARATOR};
pub use merge::{Scope, Values};
pub use module::Module;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
