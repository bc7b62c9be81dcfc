// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Default name templates.
pub mod templates {
    /// Suite name: the outermost describe title.
    pub const SUITE_NAME: &str = "{title}";

    /// Test case classname: ancestor titles, then the case title.
    pub const CLASS_NAME: &str = "{classname} {title}";

    /// Test case name: the case title.
    pub const TITLE: &str = "{title}";

    /// Joins ancestor titles in `{classname}`.
    pub const ANCESTOR_SEPARATOR: &str = " ";
}

/// Default output settings.
pub mod output {
    /// Name of the root `<testsuites>` element.
    pub const SUITE_NAME: &str = "jest tests";

    /// XML report path, relative to the working directory.
    pub const PATH: &str = "junit.xml";
}

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "junitize.toml";
