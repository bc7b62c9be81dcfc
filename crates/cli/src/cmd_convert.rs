// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Convert command implementation.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use junitize::cli::{Cli, ConvertArgs};
use junitize::config::{self, Config};
use junitize::discovery;
use junitize::error::{Error, ExitCode};
use junitize::jest;
use junitize::junit::{self, xml};

/// Run the convert command.
pub fn run(cli: &Cli, args: &ConvertArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Find and load config
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let mut config = config::load_with_warnings(&path)?;
            config.output = discovery::anchor_output(config.output, &cwd.join(&path));
            config
        }
        None => Config::default(),
    };

    let options = args.junit_options(config.junit);
    let base_dir = args
        .base_dir
        .clone()
        .or(config.output.base_dir)
        .unwrap_or_default();
    let output = args.output.clone().unwrap_or(config.output.path);

    if args.report_path().map(|report| cwd.join(report)) == Some(cwd.join(&output)) {
        return Err(Error::Argument(format!(
            "output {} would overwrite the report",
            output.display()
        ))
        .into());
    }

    let text = read_report(args.report_path())?;
    let report = jest::parse_report(&text)?;
    tracing::debug!("parsed {} test files", report.test_results.len());

    let tree = junit::build(&report, &base_dir, &options);

    if output.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        xml::write_xml(&tree, &mut handle)?;
        handle.flush()?;
    } else {
        write_file(&output, &tree)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    if args.fail_on_failures && tree.has_failures() {
        Ok(ExitCode::TestsFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

fn read_report(path: Option<&Path>) -> junitize::Result<String> {
    let mut text = String::new();
    let (name, result) = match path {
        Some(path) => (
            path.display().to_string(),
            std::fs::File::open(path).and_then(|mut f| f.read_to_string(&mut text)),
        ),
        None => (
            "<stdin>".to_string(),
            std::io::stdin().lock().read_to_string(&mut text),
        ),
    };

    result.map_err(|e| Error::Report {
        message: format!("cannot read {}: {}", name, e),
    })?;
    Ok(text)
}

fn write_file(path: &Path, tree: &junit::Testsuites) -> junitize::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = std::fs::File::create(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);
    xml::write_xml(tree, &mut writer)?;
    writer.flush().map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
