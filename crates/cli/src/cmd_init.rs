// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `junitize init` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::InitArgs;
use crate::config::defaults::CONFIG_FILE;
use crate::error::ExitCode;

/// Starter config: every option at its default, commented.
pub const DEFAULT_CONFIG: &str = r#"version = 1

[junit]
# Name of the root <testsuites> element.
# suite_name = "jest tests"

# Tokens: {filepath} {filename} {title} {displayName}
# suite_name_template = "{title}"
# use_path_for_suite_name = false

# Tokens: {filepath} {filename} {title} {classname} {displayName}
# {classname} is the ancestor describe titles joined by ancestor_separator.
# class_name_template = "{classname} {title}"
# ancestor_separator = " "

# Tokens as above; {classname} is the resolved classname.
# title_template = "{title}"
# use_full_name = false

# include_console_output = false
# add_file_attribute = false
# no_stack_trace = false

[output]
# path = "junit.xml"
# base_dir = ""
"#;

/// Write the starter config into `dir`, returning false if one exists.
pub fn write_default_config(dir: &Path, force: bool) -> Result<bool> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !force {
        return Ok(false);
    }
    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("wrote {}", config_path.display());
    Ok(true)
}

/// Run the `init` command to create a junitize.toml configuration file.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    if write_default_config(&cwd, args.force)? {
        println!("Created {}", CONFIG_FILE);
        Ok(ExitCode::Success)
    } else {
        eprintln!("{} already exists. Use --force to overwrite.", CONFIG_FILE);
        Ok(ExitCode::ConfigError)
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
