// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jest test-run report schema.
//!
//! Accepts both shapes Jest produces: the reporter `AggregatedResult`
//! (`testFilePath`, `testResults`, `failureMessage`, `perfStats`) and the
//! `jest --json` output (`name`, `assertionResults`, `message`,
//! `startTime`/`endTime`). Missing or `null` fields fall back to defaults.

mod json;

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

pub use json::find_json_object;

/// A full test run: one entry per test file, in execution order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRunReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_results: Vec<FileResult>,

    /// Run start, epoch milliseconds. Stands in for files that carry no
    /// start time of their own.
    #[serde(default)]
    pub start_time: Option<f64>,
}

/// Outcome of a single test file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    /// Absolute path of the test file.
    #[serde(alias = "name", default, deserialize_with = "null_as_default")]
    pub test_file_path: String,

    /// Project label in a multi-project run.
    #[serde(default)]
    pub display_name: Option<DisplayName>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: FileStatus,

    #[serde(
        alias = "testResults",
        default,
        deserialize_with = "null_as_default"
    )]
    pub assertion_results: Vec<CaseResult>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub perf_stats: PerfStats,

    /// Set when the file itself failed to load or run.
    #[serde(alias = "message", default)]
    pub failure_message: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub console: Vec<ConsoleEntry>,

    /// `jest --json` carries timing at the file level.
    #[serde(default)]
    pub start_time: Option<f64>,

    #[serde(default)]
    pub end_time: Option<f64>,
}

impl FileResult {
    /// The file-level failure message, if non-empty.
    pub fn load_failure(&self) -> Option<&str> {
        self.failure_message
            .as_deref()
            .filter(|msg| !msg.trim().is_empty())
    }

    /// True when the file produced no cases because it could not run.
    pub fn failed_to_load(&self) -> bool {
        self.assertion_results.is_empty() && self.load_failure().is_some()
    }

    /// Project label, empty when absent.
    pub fn display_name(&self) -> &str {
        self.display_name.as_ref().map_or("", DisplayName::as_str)
    }

    /// File start, epoch milliseconds.
    pub fn started_at(&self) -> Option<f64> {
        self.perf_stats.start.or(self.start_time)
    }

    /// Wall-clock runtime of the whole file.
    pub fn runtime(&self) -> Duration {
        let ms = match (self.perf_stats.runtime, self.perf_stats.start, self.perf_stats.end) {
            (Some(runtime), _, _) => runtime,
            (None, Some(start), Some(end)) => end - start,
            _ => match (self.start_time, self.end_time) {
                (Some(start), Some(end)) => end - start,
                _ => 0.0,
            },
        };
        millis(ms)
    }
}

/// Jest emits `displayName` as a plain string or as `{ name, color }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DisplayName {
    Plain(String),
    Labeled { name: String },
}

impl DisplayName {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayName::Plain(name) | DisplayName::Labeled { name } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Passed,
    Failed,
    Pending,
    #[default]
    #[serde(other)]
    Unknown,
}

/// File timing, epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PerfStats {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub runtime: Option<f64>,
}

/// A single captured `console.*` call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsoleEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Outcome of a single `it`/`test` block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    /// Enclosing `describe` titles, outermost first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ancestor_titles: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CaseStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub failure_messages: Vec<String>,

    /// Milliseconds; Jest reports `null` for tests that never ran.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl CaseResult {
    pub fn duration(&self) -> Duration {
        self.duration.map_or(Duration::ZERO, millis)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
    Pending,
    Skipped,
    Todo,
    Disabled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CaseStatus {
    pub fn is_failed(self) -> bool {
        self == CaseStatus::Failed
    }

    /// Statuses reported as `<skipped/>` in JUnit.
    pub fn is_skipped(self) -> bool {
        matches!(
            self,
            CaseStatus::Pending | CaseStatus::Skipped | CaseStatus::Todo | CaseStatus::Disabled
        )
    }
}

/// Parse a test-run report, tolerating text around the JSON object.
pub fn parse_report(text: &str) -> Result<TestRunReport> {
    match serde_json::from_str(text) {
        Ok(report) => Ok(report),
        Err(direct) => {
            let Some(object) = find_json_object(text) else {
                return Err(Error::Report {
                    message: format!("no JSON object found ({direct})"),
                });
            };
            tracing::debug!("report has surrounding text, parsing embedded object");
            serde_json::from_str(object).map_err(|e| Error::Report {
                message: e.to_string(),
            })
        }
    }
}

fn millis(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_nanos((ms * 1_000_000.0).round() as u64)
    } else {
        Duration::ZERO
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
