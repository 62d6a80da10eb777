//! Placeholder extraction and substitution for document templates
//!
//! Templates carry `{{name}}` tokens. Extraction returns each distinct name
//! in first-occurrence order; substitution resolves mapped names in a single
//! literal pass so that inserted values are never re-scanned.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A token is a double-brace pair around one or more non-`}` characters.
/// Unterminated or stray braces simply fail to match and pass through.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid"));

/// Extract all placeholder names from a template.
///
/// Names are returned exactly once each, in the order their first occurrence
/// appears. Malformed brace sequences produce no match and are ignored.
pub fn extract(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace placeholders in a template with values from the map.
///
/// Tokens whose name is absent from the map are left verbatim, so an
/// unfilled field stays visible as `{{name}}` in the output. A name mapped
/// to an empty string blanks its token. Replacement is a single pass over
/// the template; values containing `{{...}}` are inserted literally and
/// never re-substituted.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
