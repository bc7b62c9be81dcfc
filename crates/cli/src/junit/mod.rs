// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-run report to JUnit conversion.
//!
//! [`build`] is a pure function of the report, a base directory and the
//! options; [`xml`] encodes its result.

mod build;
pub mod naming;
pub mod sanitize;
pub mod template;
pub mod totals;
pub mod tree;
pub mod xml;

pub use build::build;
pub use sanitize::sanitize;
pub use totals::Totals;
pub use tree::{Outcome, Testcase, Testsuite, Testsuites};
