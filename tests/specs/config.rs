//! Config file specs.
//!
//! junitize.toml discovery, options, and validation.

use crate::prelude::*;

/// > Options in junitize.toml apply to convert
#[test]
fn config_options_apply() {
    let temp = Project::empty();
    temp.config(
        r#"
[junit]
suite_name = "unit"
ancestor_separator = " › "
add_file_attribute = true
"#,
    );

    convert()
        .on("no-failing-tests.json")
        .pwd(temp.path())
        .passes()
        .stdout_has(r#"<testsuites name="unit""#)
        .stdout_has(r#"classname="foo › baz should bar""#)
        .stdout_has("file=");
}

/// > Flags override config values
#[test]
fn flags_override_config() {
    let temp = Project::empty();
    temp.config("[junit]\nsuite_name = \"unit\"\n");

    convert()
        .on("no-failing-tests.json")
        .args(["--suite-name", "e2e"])
        .pwd(temp.path())
        .passes()
        .stdout_has(r#"<testsuites name="e2e""#);
}

/// > [output] sets the default output path and base directory
#[test]
fn output_section_sets_path_and_base_dir() {
    let temp = Project::empty();
    temp.config(
        r#"
[junit]
suite_name_template = "{filepath}"

[output]
path = "out/results.xml"
base_dir = "/path/to/test/"
"#,
    );

    junitize_cmd()
        .arg("convert")
        .arg(fixture("no-failing-tests.json"))
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(
        temp.read("out/results.xml")
            .contains(r#"<testsuite name="__tests__/foo.test.js""#)
    );
}

/// > Config is discovered from a parent directory
#[test]
fn config_discovered_from_parent() {
    let temp = Project::empty();
    temp.config("[junit]\nsuite_name = \"parent\"\n");
    temp.file("packages/app/.keep", "");

    convert()
        .on("no-failing-tests.json")
        .pwd(temp.path().join("packages/app"))
        .passes()
        .stdout_has(r#"<testsuites name="parent""#);
}

/// > Relative [output] paths resolve against the config file's directory
#[test]
fn output_path_relative_to_config_dir() {
    let temp = Project::empty();
    temp.config("[output]\npath = \"reports/junit.xml\"\nbase_dir = \".\"\n");
    temp.file("packages/app/.keep", "");

    junitize_cmd()
        .arg("convert")
        .arg(fixture("no-failing-tests.json"))
        .current_dir(temp.path().join("packages/app"))
        .assert()
        .success();

    assert!(temp.read("reports/junit.xml").contains("<testsuites"));
    assert!(!temp.path().join("packages/app/reports").exists());
}

/// > -C selects a config file explicitly
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file(
        "ci/junitize.toml",
        "version = 1\n[junit]\nsuite_name = \"ci\"\n",
    );

    convert()
        .on("no-failing-tests.json")
        .args(["-C", "ci/junitize.toml"])
        .pwd(temp.path())
        .passes()
        .stdout_has(r#"<testsuites name="ci""#);
}

/// > JUNITIZE_CONFIG sets config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    let config_path = temp.path().join("custom.toml");
    std::fs::write(&config_path, "version = 1\n[junit]\nsuite_name = \"env\"\n").unwrap();

    convert()
        .on("no-failing-tests.json")
        .env("JUNITIZE_CONFIG", config_path.to_str().unwrap())
        .passes()
        .stdout_has(r#"<testsuites name="env""#);
}

/// > Missing explicit config exits 2
#[test]
fn missing_explicit_config_exits_two() {
    convert()
        .on("no-failing-tests.json")
        .args(["-C", "nowhere.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

/// > Unknown keys are warnings
#[test]
fn unknown_config_key_warns() {
    let temp = Project::empty();
    temp.config("[junit]\nsuiteName = \"x\"\n");

    convert()
        .on("no-failing-tests.json")
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `junit.suiteName`")
        .stderr_has("Did you mean `suite_name`?");
}

/// > Valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    let temp = Project::empty();
    temp.config("[junit]\nno_stack_trace = true\n");

    convert()
        .on("no-failing-tests.json")
        .pwd(temp.path())
        .passes()
        .stderr_lacks("warning");
}

/// > Unsupported version is a config error
#[test]
fn unsupported_version_exits_two() {
    let temp = Project::empty();
    temp.config("version = 7\n");

    convert()
        .on("no-failing-tests.json")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 7");
}

/// > A value of the wrong type is a config error
#[test]
fn wrong_value_type_exits_two() {
    let temp = Project::empty();
    temp.config("[junit]\nuse_full_name = \"yes\"\n");

    convert()
        .on("no-failing-tests.json")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("config error");
}
