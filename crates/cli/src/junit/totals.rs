// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Count and time aggregation.
//!
//! The same [`Totals`] type is computed per suite and summed for the root,
//! so root counts always equal the sum over suites.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::time::Duration;

use crate::jest::CaseResult;

/// Test counts and elapsed time at one level of the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub tests: usize,
    pub failures: usize,
    pub errors: usize,
    pub skipped: usize,
    pub time: Duration,
}

impl Totals {
    /// Totals for a suite whose cases ran.
    pub fn of_cases<'a>(cases: impl IntoIterator<Item = &'a CaseResult>) -> Self {
        cases.into_iter().fold(Totals::default(), |mut acc, case| {
            acc.tests += 1;
            if case.status.is_failed() {
                acc.failures += 1;
            }
            if case.status.is_skipped() {
                acc.skipped += 1;
            }
            acc.time += case.duration();
            acc
        })
    }

    /// Totals for a suite that failed before any case ran.
    pub fn load_failure(runtime: Duration) -> Self {
        Self {
            errors: 1,
            time: runtime,
            ..Self::default()
        }
    }

    /// Elapsed seconds with three fractional digits.
    pub fn seconds(&self) -> String {
        format_seconds(self.time)
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(mut self, rhs: Totals) -> Totals {
        self += rhs;
        self
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Totals) {
        self.tests += rhs.tests;
        self.failures += rhs.failures;
        self.errors += rhs.errors;
        self.skipped += rhs.skipped;
        self.time += rhs.time;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), Add::add)
    }
}

impl<'a> Sum<&'a Totals> for Totals {
    fn sum<I: Iterator<Item = &'a Totals>>(iter: I) -> Totals {
        iter.copied().sum()
    }
}

/// Format a duration as seconds with millisecond precision (`1.234`).
pub fn format_seconds(time: Duration) -> String {
    let millis = (time.as_nanos() + 500_000) / 1_000_000;
    format!("{}.{:03}", millis / 1000, millis % 1000)
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
