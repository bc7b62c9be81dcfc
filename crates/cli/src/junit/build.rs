// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tree builder: test-run report to JUnit tree.
//!
//! One suite per file and one case per assertion result, in input order.
//! A file that failed before running any test becomes a suite with
//! `errors = 1` and a single placeholder case carrying `<system-err>`.

use chrono::{DateTime, Utc};

use crate::config::JunitOptions;
use crate::jest::{CaseResult, FileResult, TestRunReport};

use super::naming::FileNaming;
use super::sanitize::{sanitize, strip_stack_trace};
use super::totals::Totals;
use super::tree::{Outcome, Testcase, Testsuite, Testsuites};

/// Build the JUnit tree for `report`.
///
/// `base_dir` is stripped from the front of test file paths when it is a
/// prefix; pass `""` to keep absolute paths.
pub fn build(report: &TestRunReport, base_dir: &str, options: &JunitOptions) -> Testsuites {
    let suites: Vec<Testsuite> = report
        .test_results
        .iter()
        .map(|file| build_suite(file, report.start_time, base_dir, options))
        .collect();

    let totals: Totals = suites.iter().map(|suite| &suite.totals).sum();
    tracing::debug!(
        suites = suites.len(),
        tests = totals.tests,
        failures = totals.failures,
        errors = totals.errors,
        "built junit tree"
    );

    Testsuites {
        name: sanitize(&options.suite_name),
        totals,
        suites,
    }
}

fn build_suite(
    file: &FileResult,
    run_start: Option<f64>,
    base_dir: &str,
    options: &JunitOptions,
) -> Testsuite {
    let naming = FileNaming::new(file, base_dir, options);
    let name = naming.suite_name();
    let file_attr = options
        .add_file_attribute
        .then(|| sanitize(naming.filepath()));

    let (totals, cases) = if file.failed_to_load() {
        tracing::debug!("suite {} failed to load", file.test_file_path);
        let totals = Totals::load_failure(file.runtime());
        let message = file.load_failure().unwrap_or_default();
        let placeholder = Testcase {
            classname: name.clone(),
            name: name.clone(),
            time: totals.time,
            file: file_attr,
            outcome: Some(Outcome::SystemErr(sanitize(message))),
        };
        (totals, vec![placeholder])
    } else {
        let cases = file
            .assertion_results
            .iter()
            .map(|case| build_case(&naming, case, options, file_attr.clone()))
            .collect();
        (Totals::of_cases(&file.assertion_results), cases)
    };

    tracing::trace!(
        "suite {:?}: {} tests, {} failures",
        name,
        totals.tests,
        totals.failures
    );

    Testsuite {
        name,
        timestamp: file
            .started_at()
            .and_then(timestamp)
            .or_else(|| run_start.and_then(timestamp)),
        totals,
        cases,
        system_out: options
            .include_console_output
            .then(|| console_output(file))
            .flatten(),
    }
}

fn build_case(
    naming: &FileNaming<'_>,
    case: &CaseResult,
    options: &JunitOptions,
    file: Option<String>,
) -> Testcase {
    let classname = naming.class_name(case);
    let name = naming.case_name(case, &classname);

    let outcome = if case.status.is_failed() {
        Some(Outcome::Failure(failure_text(case, options)))
    } else if case.status.is_skipped() {
        Some(Outcome::Skipped)
    } else {
        None
    };

    Testcase {
        classname,
        name,
        time: case.duration(),
        file,
        outcome,
    }
}

fn failure_text(case: &CaseResult, options: &JunitOptions) -> String {
    let text = sanitize(&case.failure_messages.join("\n"));
    if options.no_stack_trace {
        strip_stack_trace(&text)
    } else {
        text
    }
}

/// One `[type] message` line per console entry.
fn console_output(file: &FileResult) -> Option<String> {
    if file.console.is_empty() {
        return None;
    }
    let lines: Vec<String> = file
        .console
        .iter()
        .map(|entry| match entry.kind.as_str() {
            "" => sanitize(&entry.message),
            kind => format!("[{}] {}", sanitize(kind), sanitize(&entry.message)),
        })
        .collect();
    Some(lines.join("\n"))
}

/// Epoch milliseconds to a timestamp; zero means "not recorded".
fn timestamp(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms <= 0.0 {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64)
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
