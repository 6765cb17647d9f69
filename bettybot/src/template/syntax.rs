//! Template directive syntax
//!
//! Generated documents are full of literal `{{ }}` and `{% %}`, so templates
//! use square-bracket delimiters instead:
//!
//! | Directive | Delimiters   |
//! |-----------|--------------|
//! | Variable  | `[[ ... ]]`  |
//! | Block     | `[% ... %]`  |
//! | Comment   | `[# ... #]`  |
//!
//! Field references inside variable and block tags may carry a leading dot
//! (`[[.name]]`, `[% if .draft %]`), which is read as the top-level
//! variable `name`.

use minijinja::syntax::SyntaxConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Variable start delimiter
pub const VARIABLE_START: &str = "[[";
/// Variable end delimiter
pub const VARIABLE_END: &str = "]]";
/// Block start delimiter
pub const BLOCK_START: &str = "[%";
/// Block end delimiter
pub const BLOCK_END: &str = "%]";
/// Comment start delimiter
pub const COMMENT_START: &str = "[#";
/// Comment end delimiter
pub const COMMENT_END: &str = "#]";

static DIRECTIVE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\[.*?\]\]|\[%.*?%\]").expect("valid directive tag regex")
});

// Either a quoted string literal, kept as is, or a dot that starts a path:
// not preceded by an identifier, a closing bracket/paren or another dot.
static ROOT_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<lit>"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*')|(?P<pre>^|[^\w)\].])\.(?P<head>[A-Za-z_])"#,
    )
    .expect("valid root field regex")
});

/// Build the delimiter configuration for the template environment
///
/// # Errors
///
/// Returns an error if the delimiters are rejected by the engine.
pub fn syntax_config() -> Result<SyntaxConfig, minijinja::Error> {
    SyntaxConfig::builder()
        .block_delimiters(BLOCK_START, BLOCK_END)
        .variable_delimiters(VARIABLE_START, VARIABLE_END)
        .comment_delimiters(COMMENT_START, COMMENT_END)
        .build()
}

/// Strip leading dots from root field references inside directive tags
///
/// Text outside `[[ ]]` and `[% %]` is returned untouched, and so are quoted
/// string literals inside them.
#[must_use]
pub fn normalize_source(source: &str) -> String {
    DIRECTIVE_TAG
        .replace_all(source, |caps: &regex::Captures<'_>| {
            ROOT_FIELD
                .replace_all(&caps[0], |field: &regex::Captures<'_>| {
                    if field.name("lit").is_some() {
                        field[0].to_string()
                    } else {
                        format!("{}{}", &field["pre"], &field["head"])
                    }
                })
                .into_owned()
        })
        .into_owned()
}
