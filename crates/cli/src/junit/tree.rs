// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit result tree.
//!
//! Built once by [`super::build`] and handed to an encoder. All text is
//! already sanitized.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::totals::Totals;

/// Root `<testsuites>` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Testsuites {
    pub name: String,
    /// Sum of every suite's totals.
    pub totals: Totals,
    pub suites: Vec<Testsuite>,
}

/// One `<testsuite>` per test file.
#[derive(Debug, Clone, PartialEq)]
pub struct Testsuite {
    pub name: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub totals: Totals,
    pub cases: Vec<Testcase>,
    /// Captured console output.
    pub system_out: Option<String>,
}

/// One `<testcase>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Testcase {
    pub classname: String,
    pub name: String,
    pub time: Duration,
    pub file: Option<String>,
    pub outcome: Option<Outcome>,
}

/// Child element of a test case other than success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `<failure>` with the joined failure messages.
    Failure(String),
    /// `<system-err>` for a suite that failed to load.
    SystemErr(String),
    /// `<skipped/>`.
    Skipped,
}

impl Testcase {
    pub fn failure(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Failure(text)) => Some(text),
            _ => None,
        }
    }

    pub fn system_err(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::SystemErr(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.outcome == Some(Outcome::Skipped)
    }
}

impl Testsuites {
    /// True when any case failed or any suite failed to load.
    pub fn has_failures(&self) -> bool {
        self.totals.failures > 0 || self.totals.errors > 0
    }
}
