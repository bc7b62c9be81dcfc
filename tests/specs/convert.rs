//! Convert command specs.
//!
//! Jest JSON in, JUnit XML out.

use crate::prelude::*;

// =============================================================================
// OUTPUT SHAPE
// =============================================================================

/// > A passing single-file report converts with default naming
#[test]
fn passing_report_to_stdout() {
    convert().on("no-failing-tests.json").passes().stdout_eq(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="jest tests" tests="1" failures="0" errors="0" skipped="0" time="0.001">
  <testsuite name="foo" errors="0" failures="0" skipped="0" timestamp="2017-03-17T01:05:47" time="0.001" tests="1">
    <testcase classname="foo baz should bar" name="should bar" time="0.001"/>
  </testsuite>
</testsuites>
"#,
    );
}

/// > Failed cases carry a <failure> free of terminal escapes
#[test]
fn failing_report_has_clean_failure() {
    convert()
        .on("failing-tests.json")
        .passes()
        .stdout_has(r#"tests="2" failures="1""#)
        .stdout_has("<failure>")
        .stdout_has("Expected value to be (using ===):")
        .stdout_has("at Object.&lt;anonymous&gt;")
        .stdout_lacks("\u{1b}")
        .stdout_lacks("[2m");
}

/// > --no-stack-trace drops `at ...` lines from failures
#[test]
fn no_stack_trace_strips_frames() {
    convert()
        .on("failing-tests.json")
        .args(["--no-stack-trace"])
        .passes()
        .stdout_has("Expected value to be (using ===):")
        .stdout_lacks("at Object.")
        .stdout_lacks("at Promise.resolve");
}

/// > A suite that failed to load reports errors="1" with its message
#[test]
fn load_failure_becomes_error_suite() {
    convert()
        .on("failing-suite.json")
        .passes()
        .stdout_has(r#"<testsuite name="failure.test.js" errors="1" failures="0" skipped="0""#)
        .stdout_has(r#"tests="0""#)
        .stdout_has("<system-err>Test suite failed to run")
        .stdout_lacks("\u{1b}");
}

/// > Pending cases become <skipped/>
#[test]
fn pending_case_is_skipped() {
    convert()
        .on("multi-project-no-failing-tests.json")
        .passes()
        .stdout_has(r#"tests="2" failures="0" errors="0" skipped="1""#)
        .stdout_has("<skipped/>");
}

/// > Runner banner lines before the JSON are ignored
#[test]
fn banner_before_json_is_ignored() {
    convert()
        .on("json-output.txt")
        .passes()
        .stdout_has(r#"<testsuite name="sum""#)
        .stdout_has(r#"name="adds {1, 2}""#)
        .stdout_has(r#"time="0.004""#);
}

// =============================================================================
// NAMING FLAGS
// =============================================================================

/// > {filepath} is relative to --base-dir
#[test]
fn base_dir_relativizes_filepath() {
    convert()
        .on("no-failing-tests.json")
        .args([
            "--base-dir",
            "/path/to/test/",
            "--suite-name-template",
            "{filepath}",
        ])
        .passes()
        .stdout_has(r#"<testsuite name="__tests__/foo.test.js""#);
}

/// > --use-path-for-suite-name names suites after the file
#[test]
fn use_path_for_suite_name() {
    convert()
        .on("no-failing-tests.json")
        .args(["--use-path-for-suite-name"])
        .passes()
        .stdout_has(r#"<testsuite name="/path/to/test/__tests__/foo.test.js""#);
}

/// > --ancestor-separator joins describe titles
#[test]
fn ancestor_separator_joins_classname() {
    convert()
        .on("no-failing-tests.json")
        .args(["--ancestor-separator", " › "])
        .passes()
        .stdout_has(r#"classname="foo › baz should bar""#);
}

/// > {displayName} resolves plain and labeled project names
#[test]
fn display_name_template() {
    convert()
        .on("multi-project-no-failing-tests.json")
        .args(["--suite-name-template", "{displayName}: {filename}"])
        .passes()
        .stdout_has(r#"<testsuite name="project1: foo.test.js""#)
        .stdout_has(r#"<testsuite name="project2: bar.test.js""#);
}

/// > Unknown tokens stay literal
#[test]
fn unknown_token_left_literal() {
    convert()
        .on("no-failing-tests.json")
        .args(["--title-template", "{nope} {title}"])
        .passes()
        .stdout_has(r#"name="{nope} should bar""#);
}

/// > --use-full-name uses the full test name for {title}
#[test]
fn use_full_name() {
    convert()
        .on("no-failing-tests.json")
        .args(["--use-full-name"])
        .passes()
        .stdout_has(r#"name="foo baz should bar" time"#);
}

// =============================================================================
// OPTIONAL CONTENT
// =============================================================================

/// > --add-file-attribute adds file= to every case
#[test]
fn add_file_attribute() {
    convert()
        .on("failing-tests.json")
        .args(["--add-file-attribute"])
        .passes()
        .stdout_has(r#"file="/path/to/test/__tests__/foo.test.js""#);
}

/// > --include-console-output attaches <system-out>
#[test]
fn include_console_output() {
    convert()
        .on("failing-tests.json")
        .args(["--include-console-output"])
        .passes()
        .stdout_has("<system-out>[warn] deprecated helper</system-out>");
}

/// > Console output is omitted by default
#[test]
fn console_output_off_by_default() {
    convert()
        .on("failing-tests.json")
        .passes()
        .stdout_lacks("<system-out>");
}

/// > Option env vars apply like flags
#[test]
fn env_vars_set_options() {
    convert()
        .on("no-failing-tests.json")
        .env("JUNITIZE_SUITE_NAME", "ci run")
        .env("JUNITIZE_ADD_FILE_ATTRIBUTE", "true")
        .passes()
        .stdout_has(r#"<testsuites name="ci run""#)
        .stdout_has("file=");
}

// =============================================================================
// INPUT / OUTPUT
// =============================================================================

/// > Report is read from stdin when omitted
#[test]
fn reads_stdin() {
    convert()
        .stdin(fixture_text("no-failing-tests.json"))
        .passes()
        .stdout_has(r#"<testsuite name="foo""#);
}

/// > `-` as REPORT reads stdin
#[test]
fn dash_reads_stdin() {
    convert()
        .args(["-"])
        .stdin(fixture_text("failing-tests.json"))
        .passes()
        .stdout_has(r#"failures="1""#);
}

/// > Without -o the XML lands in junit.xml
#[test]
fn writes_default_output_file() {
    let temp = Project::empty();
    junitize_cmd()
        .arg("convert")
        .arg(fixture("no-failing-tests.json"))
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    assert!(temp.read("junit.xml").contains("<testsuites"));
}

/// > -o creates missing parent directories
#[test]
fn output_creates_parent_dirs() {
    let temp = Project::empty();
    convert()
        .on("no-failing-tests.json")
        .args(["-o", "reports/jest/junit.xml"])
        .pwd(temp.path())
        .passes();

    assert!(temp.read("reports/jest/junit.xml").contains(r#"<testsuite name="foo""#));
}

/// > Converting twice produces identical output
#[test]
fn conversion_is_repeatable() {
    let first = convert().on("failing-tests.json").passes().stdout();
    let second = convert().on("failing-tests.json").passes().stdout();
    similar_asserts::assert_eq!(first, second);
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// > Failures exit 0 unless --fail-on-failures
#[test]
fn failures_exit_zero_by_default() {
    convert().on("failing-tests.json").passes();
}

/// > --fail-on-failures exits 1 on failed cases
#[test]
fn fail_on_failures_exits_one() {
    convert()
        .on("failing-tests.json")
        .args(["--fail-on-failures"])
        .exits(1);
}

/// > --fail-on-failures exits 1 on load errors
#[test]
fn fail_on_failures_counts_load_errors() {
    convert()
        .on("failing-suite.json")
        .args(["--fail-on-failures"])
        .exits(1);
}

/// > --fail-on-failures passes a clean report
#[test]
fn fail_on_failures_passes_clean_report() {
    convert()
        .on("no-failing-tests.json")
        .args(["--fail-on-failures"])
        .passes();
}

/// > Input that holds no JSON object exits 2
#[test]
fn unparseable_report_exits_two() {
    convert()
        .stdin("PASS src/sum.test.js\n")
        .exits(2)
        .stderr_has("report error");
}

/// > Missing report file exits 2
#[test]
fn missing_report_exits_two() {
    convert()
        .args(["does-not-exist.json"])
        .exits(2)
        .stderr_has("does-not-exist.json");
}

/// > Writing over the input report is refused
#[test]
fn output_over_report_exits_two() {
    let temp = Project::empty();
    temp.file("results.json", &fixture_text("no-failing-tests.json"));

    convert()
        .args(["results.json", "-o", "results.json"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("would overwrite the report");

    assert!(temp.read("results.json").contains("testResults"));
}
