//! `{{name}}` placeholder substitution

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::EnvironmentMap;

/// `{{identifier}}` where identifier is one or more ASCII word characters
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid placeholder regex")
});

/// Replace every known placeholder with its value.
///
/// Unknown placeholders are kept verbatim. This is a single pass: a value that
/// itself contains `{{...}}` is inserted as-is and not expanded again.
pub fn resolve_placeholders(text: &str, env: &EnvironmentMap) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| match env.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Identifiers of the placeholders present in `text`, in order of first appearance
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
