// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::JunitOptions;

/// Convert Jest JSON test reports into JUnit XML for CI systems
#[derive(Parser)]
#[command(name = "junitize")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "JUNITIZE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a Jest JSON report to JUnit XML
    Convert(ConvertArgs),
    /// Write a default junitize.toml
    Init(InitArgs),
}

#[derive(clap::Args, Default)]
pub struct ConvertArgs {
    /// Jest JSON report (`-` or omitted reads stdin)
    #[arg(value_name = "REPORT")]
    pub report: Option<PathBuf>,

    /// XML output path (`-` writes stdout) [default: junit.xml]
    #[arg(short, long, value_name = "PATH", env = "JUNITIZE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Prefix removed from test file paths
    #[arg(long, value_name = "DIR", env = "JUNITIZE_BASE_DIR")]
    pub base_dir: Option<String>,

    /// Name of the root <testsuites> element
    #[arg(long, value_name = "NAME", env = "JUNITIZE_SUITE_NAME")]
    pub suite_name: Option<String>,

    /// Suite name template
    #[arg(long, value_name = "TEMPLATE", env = "JUNITIZE_SUITE_NAME_TEMPLATE")]
    pub suite_name_template: Option<String>,

    /// Test case classname template
    #[arg(long, value_name = "TEMPLATE", env = "JUNITIZE_CLASS_NAME_TEMPLATE")]
    pub class_name_template: Option<String>,

    /// Test case name template
    #[arg(long, value_name = "TEMPLATE", env = "JUNITIZE_TITLE_TEMPLATE")]
    pub title_template: Option<String>,

    /// Separator between ancestor titles in {classname}
    #[arg(long, value_name = "SEP", env = "JUNITIZE_ANCESTOR_SEPARATOR")]
    pub ancestor_separator: Option<String>,

    /// Name suites after their file path
    #[arg(long, env = "JUNITIZE_USE_PATH_FOR_SUITE_NAME")]
    pub use_path_for_suite_name: bool,

    /// Use the full test name for {title} in test case names
    #[arg(long, env = "JUNITIZE_USE_FULL_NAME")]
    pub use_full_name: bool,

    /// Attach captured console output to each suite
    #[arg(long, env = "JUNITIZE_INCLUDE_CONSOLE_OUTPUT")]
    pub include_console_output: bool,

    /// Add a file attribute to every test case
    #[arg(long, env = "JUNITIZE_ADD_FILE_ATTRIBUTE")]
    pub add_file_attribute: bool,

    /// Remove stack traces from failure messages
    #[arg(long, env = "JUNITIZE_NO_STACK_TRACE")]
    pub no_stack_trace: bool,

    /// Exit with code 1 when the report has failures or load errors
    #[arg(long)]
    pub fail_on_failures: bool,
}

impl ConvertArgs {
    /// Apply command-line overrides on top of configured options.
    pub fn junit_options(&self, mut options: JunitOptions) -> JunitOptions {
        let overrides = [
            (&self.suite_name, &mut options.suite_name),
            (&self.suite_name_template, &mut options.suite_name_template),
            (&self.class_name_template, &mut options.class_name_template),
            (&self.title_template, &mut options.title_template),
            (&self.ancestor_separator, &mut options.ancestor_separator),
        ];
        for (arg, field) in overrides {
            if let Some(value) = arg {
                *field = value.clone();
            }
        }

        options.use_path_for_suite_name |= self.use_path_for_suite_name;
        options.use_full_name |= self.use_full_name;
        options.include_console_output |= self.include_console_output;
        options.add_file_attribute |= self.add_file_attribute;
        options.no_stack_trace |= self.no_stack_trace;
        options
    }

    /// Report path, or None for stdin.
    pub fn report_path(&self) -> Option<&std::path::Path> {
        self.report.as_deref().filter(|p| p.as_os_str() != "-")
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
