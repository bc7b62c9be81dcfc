// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit XML encoder.
//!
//! Writes the tree produced by [`super::build`]; attribute and text escaping
//! is handled by quick-xml. Times are seconds with three fractional digits.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};

use super::totals::format_seconds;
use super::tree::{Outcome, Testcase, Testsuite, Testsuites};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Encode `tree` as an indented XML document.
pub fn to_xml(tree: &Testsuites) -> Result<String> {
    let mut buf = Vec::new();
    write_xml(tree, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Internal(e.to_string()))
}

/// Encode `tree` into `out`.
pub fn write_xml<W: Write>(tree: &Testsuites, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(encode_error)?;

    let mut root = BytesStart::new("testsuites");
    root.push_attribute(("name", tree.name.as_str()));
    root.push_attribute(("tests", tree.totals.tests.to_string().as_str()));
    root.push_attribute(("failures", tree.totals.failures.to_string().as_str()));
    root.push_attribute(("errors", tree.totals.errors.to_string().as_str()));
    root.push_attribute(("skipped", tree.totals.skipped.to_string().as_str()));
    root.push_attribute(("time", tree.totals.seconds().as_str()));

    if tree.suites.is_empty() {
        writer.write_event(Event::Empty(root)).map_err(encode_error)?;
    } else {
        writer.write_event(Event::Start(root)).map_err(encode_error)?;
        for suite in &tree.suites {
            write_suite(&mut writer, suite)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("testsuites")))
            .map_err(encode_error)?;
    }

    writer.get_mut().write_all(b"\n").map_err(encode_error)?;
    Ok(())
}

fn write_suite<W: Write>(writer: &mut Writer<W>, suite: &Testsuite) -> Result<()> {
    let mut start = BytesStart::new("testsuite");
    start.push_attribute(("name", suite.name.as_str()));
    start.push_attribute(("errors", suite.totals.errors.to_string().as_str()));
    start.push_attribute(("failures", suite.totals.failures.to_string().as_str()));
    start.push_attribute(("skipped", suite.totals.skipped.to_string().as_str()));
    if let Some(timestamp) = suite.timestamp {
        let formatted = timestamp.format(TIMESTAMP_FORMAT).to_string();
        start.push_attribute(("timestamp", formatted.as_str()));
    }
    start.push_attribute(("time", suite.totals.seconds().as_str()));
    start.push_attribute(("tests", suite.totals.tests.to_string().as_str()));

    if suite.cases.is_empty() && suite.system_out.is_none() {
        writer.write_event(Event::Empty(start)).map_err(encode_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(encode_error)?;
    for case in &suite.cases {
        write_case(writer, case)?;
    }
    if let Some(out) = &suite.system_out {
        write_text_element(writer, "system-out", out)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("testsuite")))
        .map_err(encode_error)?;
    Ok(())
}

fn write_case<W: Write>(writer: &mut Writer<W>, case: &Testcase) -> Result<()> {
    let mut start = BytesStart::new("testcase");
    start.push_attribute(("classname", case.classname.as_str()));
    start.push_attribute(("name", case.name.as_str()));
    start.push_attribute(("time", format_seconds(case.time).as_str()));
    if let Some(file) = &case.file {
        start.push_attribute(("file", file.as_str()));
    }

    let Some(outcome) = &case.outcome else {
        writer.write_event(Event::Empty(start)).map_err(encode_error)?;
        return Ok(());
    };

    writer.write_event(Event::Start(start)).map_err(encode_error)?;
    match outcome {
        Outcome::Failure(text) => write_text_element(writer, "failure", text)?,
        Outcome::SystemErr(text) => write_text_element(writer, "system-err", text)?,
        Outcome::Skipped => writer
            .write_event(Event::Empty(BytesStart::new("skipped")))
            .map_err(encode_error)?,
    }
    writer
        .write_event(Event::End(BytesEnd::new("testcase")))
        .map_err(encode_error)?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(encode_error)?;
        return Ok(());
    }
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(encode_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(encode_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(encode_error)?;
    Ok(())
}

fn encode_error(e: impl std::fmt::Display) -> Error {
    Error::Encode(e.to_string())
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
