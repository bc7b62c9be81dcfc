// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles junitize.toml parsing with version validation and unknown key warnings.

pub mod defaults;
mod suggest;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use suggest::warn_unknown_key;

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "junit", "output"];

/// Known keys of the `[junit]` table.
pub(crate) const JUNIT_KEYS: &[&str] = &[
    "suite_name",
    "use_path_for_suite_name",
    "suite_name_template",
    "class_name_template",
    "title_template",
    "ancestor_separator",
    "use_full_name",
    "include_console_output",
    "add_file_attribute",
    "no_stack_trace",
];

/// Known keys of the `[output]` table.
pub(crate) const OUTPUT_KEYS: &[&str] = &["path", "base_dir"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Naming and content options for the JUnit tree.
    #[serde(default)]
    pub junit: JunitOptions,

    /// Where the XML report goes.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            junit: JunitOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Options controlling how a test-run report becomes a JUnit tree.
///
/// Built once per invocation and passed by reference into the builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JunitOptions {
    /// Name of the root `<testsuites>` element.
    #[serde(default = "JunitOptions::default_suite_name")]
    pub suite_name: String,

    /// Name suites after their (relocated) file path.
    #[serde(default)]
    pub use_path_for_suite_name: bool,

    /// Suite name template (`{filepath}`, `{filename}`, `{title}`, `{displayName}`).
    #[serde(default = "JunitOptions::default_suite_name_template")]
    pub suite_name_template: String,

    /// Classname template (`{filepath}`, `{filename}`, `{title}`, `{classname}`, `{displayName}`).
    #[serde(default = "JunitOptions::default_class_name_template")]
    pub class_name_template: String,

    /// Test case name template; `{classname}` is the resolved classname.
    #[serde(default = "JunitOptions::default_title_template")]
    pub title_template: String,

    /// Joins ancestor titles in `{classname}`.
    #[serde(default = "JunitOptions::default_ancestor_separator")]
    pub ancestor_separator: String,

    /// Use the case's full name for `{title}` in the title template.
    #[serde(default)]
    pub use_full_name: bool,

    /// Attach captured console output as `<system-out>`.
    #[serde(default)]
    pub include_console_output: bool,

    /// Add a `file` attribute to every test case.
    #[serde(default)]
    pub add_file_attribute: bool,

    /// Remove stack frames from failure messages.
    #[serde(default)]
    pub no_stack_trace: bool,
}

impl Default for JunitOptions {
    fn default() -> Self {
        Self {
            suite_name: Self::default_suite_name(),
            use_path_for_suite_name: false,
            suite_name_template: Self::default_suite_name_template(),
            class_name_template: Self::default_class_name_template(),
            title_template: Self::default_title_template(),
            ancestor_separator: Self::default_ancestor_separator(),
            use_full_name: false,
            include_console_output: false,
            add_file_attribute: false,
            no_stack_trace: false,
        }
    }
}

impl JunitOptions {
    pub(crate) fn default_suite_name() -> String {
        defaults::output::SUITE_NAME.to_string()
    }

    pub(crate) fn default_suite_name_template() -> String {
        defaults::templates::SUITE_NAME.to_string()
    }

    pub(crate) fn default_class_name_template() -> String {
        defaults::templates::CLASS_NAME.to_string()
    }

    pub(crate) fn default_title_template() -> String {
        defaults::templates::TITLE.to_string()
    }

    pub(crate) fn default_ancestor_separator() -> String {
        defaults::templates::ANCESTOR_SEPARATOR.to_string()
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// XML report path (default: junit.xml).
    #[serde(default = "OutputConfig::default_path")]
    pub path: PathBuf,

    /// Prefix stripped from test file paths in `{filepath}`.
    #[serde(default)]
    pub base_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            base_dir: None,
        }
    }
}

impl OutputConfig {
    pub(crate) fn default_path() -> PathBuf {
        PathBuf::from(defaults::output::PATH)
    }
}

/// Load and parse config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Parse config, warning on unknown keys instead of rejecting them.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    let mut table: toml::Table = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    drop_unknown_keys(&mut table, KNOWN_KEYS, "", path);
    for (section, known) in [("junit", JUNIT_KEYS), ("output", OUTPUT_KEYS)] {
        if let Some(toml::Value::Table(inner)) = table.get_mut(section) {
            drop_unknown_keys(inner, known, section, path);
        }
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| Error::Config {
            message: e.to_string(),
            path: Some(path.to_path_buf()),
        })
}

fn check_version(content: &str, path: &Path) -> Result<()> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade junitize to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn drop_unknown_keys(table: &mut toml::Table, known: &[&str], section: &str, path: &Path) {
    let unknown: Vec<String> = table
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .cloned()
        .collect();

    for key in unknown {
        let qualified = if section.is_empty() {
            key.clone()
        } else {
            format!("{section}.{key}")
        };
        warn_unknown_key(path, &qualified, known);
        table.remove(&key);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
