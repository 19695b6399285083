//! Naming conventions shared by all dialects.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of non-letters, optionally wrapped in underscores, or runs of underscores.
static NON_LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(_*[^a-zA-Z]+_*|_+)").expect("valid identifier regex"));

/// Collapses every run of non-letter characters into a single `_`.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    NON_LETTER_RUN.replace_all(name, "_").into_owned()
}

/// Returns the baseline foreign key name, `<table>_<field>_<dest>_foreign`,
/// sanitized with [`sanitize_identifier`].
///
/// The result is not length-bounded; dialects shorten it as needed.
#[must_use]
pub fn foreign_key_name(table_name: &str, field: &str, dest: &str) -> String {
    sanitize_identifier(&format!("{table_name}_{field}_{dest}_foreign"))
}
