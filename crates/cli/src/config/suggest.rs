// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key name suggestions for config validation.

use std::path::Path;

/// Suggest a known key for an unrecognized one.
///
/// Handles the camelCase spelling used by jest-junit options
/// (`suiteNameTemplate` -> `suite_name_template`) and prefix typos.
pub fn suggest_key<'a>(unknown: &str, known: &[&'a str]) -> Option<&'a str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    let snake = to_snake_case(unknown);
    if let Some(&name) = known.iter().find(|&&k| k == snake) {
        return Some(name);
    }

    // Try prefix matching (require at least 3 chars to avoid false positives)
    if snake.len() >= 3 {
        for &name in known {
            if name.starts_with(&snake) || snake.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        match c {
            '-' => out.push('_'),
            c if c.is_ascii_uppercase() => {
                if !out.is_empty() && !out.ends_with('_') {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
    out
}

/// Warn about an unknown config key with a suggestion.
pub fn warn_unknown_key(path: &Path, key: &str, known: &[&str]) {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    match suggest_key(leaf, known) {
        Some(suggested) => eprintln!(
            "junitize: warning: {}: unrecognized field `{}` (ignored). Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "junitize: warning: {}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
