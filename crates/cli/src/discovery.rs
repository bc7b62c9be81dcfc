// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for junitize.toml.
//! The directory holding the config is the project root: relative `[output]`
//! paths in the file are anchored there, not at the working directory.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::config::OutputConfig;
use crate::config::defaults::CONFIG_FILE;
use crate::error::{Error, Result};

/// Find junitize.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "JUNITIZE_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Anchor relative `[output]` paths at the directory of `config_path`.
///
/// `-` (stdout) and an empty `base_dir` are left alone. A relative
/// `base_dir` becomes an absolute prefix ending in a separator, so
/// `{filepath}` comes out relative.
pub fn anchor_output(output: OutputConfig, config_path: &Path) -> OutputConfig {
    let root = config_path.parent().unwrap_or(Path::new(""));

    let path = if output.path.is_relative() && output.path.as_os_str() != "-" {
        normalize(&root.join(&output.path))
    } else {
        output.path
    };

    let base_dir = output.base_dir.map(|base| {
        if !base.is_empty() && Path::new(&base).is_relative() {
            let mut anchored = normalize(&root.join(&base)).display().to_string();
            if !anchored.is_empty() && !anchored.ends_with(MAIN_SEPARATOR) {
                anchored.push(MAIN_SEPARATOR);
            }
            anchored
        } else {
            base
        }
    });

    OutputConfig { path, base_dir }
}

/// Drop `.` segments and fold `..` into the preceding segment.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir
                if matches!(out.components().next_back(), Some(Component::Normal(_))) =>
            {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
