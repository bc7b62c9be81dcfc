// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite, classname and test case naming.
//!
//! Names come from the configured templates. Precedence for suite names:
//! a suite template that mentions `{filepath}` or `{filename}` is always
//! resolved; otherwise `use_path_for_suite_name` selects the relocated
//! file path; otherwise the template is resolved with `{title}` bound to
//! the outermost describe title.
//!
//! Substituted values are sanitized first and otherwise kept verbatim. The
//! one adjustment is for a template that opens with `{classname}` when the
//! classname is empty: the token and the whitespace after it are dropped.

use crate::config::JunitOptions;
use crate::jest::{CaseResult, FileResult};

use super::sanitize::sanitize;
use super::template::{Context, Token, mentions, resolve};

/// Naming inputs shared by a file and all of its cases.
#[derive(Debug, Clone)]
pub struct FileNaming<'a> {
    options: &'a JunitOptions,
    filepath: &'a str,
    filename: &'a str,
    display_name: &'a str,
    suite_title: &'a str,
}

impl<'a> FileNaming<'a> {
    pub fn new(file: &'a FileResult, base_dir: &str, options: &'a JunitOptions) -> Self {
        let filepath = relocate(&file.test_file_path, base_dir);
        let filename = base_name(filepath);
        let suite_title = file
            .assertion_results
            .iter()
            .find_map(|case| case.ancestor_titles.first())
            .or_else(|| file.assertion_results.first().map(|case| &case.title))
            .map_or(filename, String::as_str);

        Self {
            options,
            filepath,
            filename,
            display_name: file.display_name(),
            suite_title,
        }
    }

    /// Test file path with the base directory removed.
    pub fn filepath(&self) -> &'a str {
        self.filepath
    }

    pub fn suite_name(&self) -> String {
        let template = self.options.suite_name_template.as_str();
        let names_path = mentions(template, Token::Filepath) || mentions(template, Token::Filename);

        if self.options.use_path_for_suite_name && !names_path {
            return sanitize(self.filepath);
        }

        let title = sanitize(self.suite_title);
        let ctx = self.context().with(Token::Title, &title);
        sanitize(&resolve(template, &ctx))
    }

    pub fn class_name(&self, case: &CaseResult) -> String {
        let title = sanitize(&case.title);
        let ancestors = sanitize(&case.ancestor_titles.join(&self.options.ancestor_separator));
        let ctx = self
            .context()
            .with(Token::Title, &title)
            .with(Token::Classname, &ancestors);
        let template = skip_empty_classname(&self.options.class_name_template, &ancestors);
        sanitize(&resolve(template, &ctx))
    }

    /// Test case name; `classname` is the already-resolved classname.
    pub fn case_name(&self, case: &CaseResult, classname: &str) -> String {
        let title = sanitize(if self.options.use_full_name {
            &case.full_name
        } else {
            &case.title
        });
        let ctx = self
            .context()
            .with(Token::Title, &title)
            .with(Token::Classname, classname);
        let template = skip_empty_classname(&self.options.title_template, classname);
        sanitize(&resolve(template, &ctx))
    }

    fn context(&self) -> Context<'a> {
        Context::new()
            .with(Token::Filepath, self.filepath)
            .with(Token::Filename, self.filename)
            .with(Token::DisplayName, self.display_name)
    }
}

/// Strip `base_dir` from the front of `path` when it is a prefix.
pub fn relocate<'p>(path: &'p str, base_dir: &str) -> &'p str {
    if base_dir.is_empty() {
        return path;
    }
    path.strip_prefix(base_dir).unwrap_or(path)
}

/// Last component of a `/` or `\` separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Drop a leading `{classname}` and its separator when `classname` is empty.
fn skip_empty_classname<'t>(template: &'t str, classname: &str) -> &'t str {
    if !classname.is_empty() {
        return template;
    }
    match template.strip_prefix(Token::Classname.tag().as_str()) {
        Some(rest) => rest.trim_start(),
        None => template,
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
