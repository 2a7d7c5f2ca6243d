//! Behavioral specs for commands and flags.

use crate::prelude::*;

// =============================================================================
// HELP AND VERSION
// =============================================================================

#[test]
fn help_exits_successfully() {
    guidelint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("guidelint"))
        .stdout(predicates::str::contains("rules"));
}

#[test]
fn version_exits_successfully() {
    guidelint_cmd().arg("--version").assert().success();
}

#[test]
fn unknown_flag_is_a_usage_error() {
    guidelint_cmd().arg("--frobnicate").assert().code(2);
}

#[test]
fn invalid_label_is_a_usage_error() {
    guidelint_cmd()
        .args(["--label", "ugly", "guide.md"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("ugly"));
}

// =============================================================================
// RULES
// =============================================================================

#[test]
fn rules_lists_every_rule() {
    let project = Project::empty();
    let assert = guidelint_cmd().arg("rules").current_dir(project.path()).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ids: Vec<&str> = stdout.lines().filter_map(|l| l.split_whitespace().next()).collect();
    assert_eq!(ids, vec![
        "arrange-act-assert",
        "double-naming",
        "no-bare-assert",
        "no-logic-in-tests",
        "no-magic-strings",
        "prefer-helper-methods",
        "single-act",
        "test-name-parts",
    ]);
    assert!(stdout.lines().all(|l| l.contains(" labeled ")));
}

#[test]
fn rules_reflect_config() {
    let project = Project::empty();
    project.config(
        r#"version = 1

[rules.single-act]
check = "off"

[rules.double-naming]
applies_to = "any"
"#,
    );

    guidelint_cmd()
        .arg("rules")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"(?m)^single-act\s+off\s").unwrap())
        .stdout(predicates::str::is_match(r"(?m)^double-naming\s+any\s").unwrap());
}

#[test]
fn rules_json() {
    let project = Project::empty();
    let assert = guidelint_cmd()
        .args(["rules", "-o", "json"])
        .current_dir(project.path())
        .assert()
        .success();

    let rules: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let rules = rules.as_array().unwrap();
    assert_eq!(rules.len(), 8);
    assert_eq!(rules[0]["id"], "arrange-act-assert");
    assert_eq!(rules[0]["enabled"], true);
    assert_eq!(rules[0]["applies_to"], "labeled");
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn init_creates_config_in_current_directory() {
    let project = Project::empty();

    guidelint_cmd().arg("init").current_dir(project.path()).assert().success();

    let config = std::fs::read_to_string(project.path().join("guidelint.toml")).unwrap();
    assert!(config.contains("version = 1"));
    assert!(config.contains("[labels]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let project = Project::empty();
    project.config("version = 1\n# existing\n");

    guidelint_cmd()
        .arg("init")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let project = Project::empty();
    project.config("version = 1\n# existing content\n");

    guidelint_cmd().args(["init", "--force"]).current_dir(project.path()).assert().success();

    let config = std::fs::read_to_string(project.path().join("guidelint.toml")).unwrap();
    assert!(!config.contains("# existing content"));
    assert!(config.contains("version = 1"));
}

/// The generated config is accepted by check.
#[test]
fn init_output_is_a_valid_config() {
    let project = Project::empty();
    guidelint_cmd().arg("init").current_dir(project.path()).assert().success();
    project.guide("guide.md", "clean/guide.md");

    guidelint_cmd().arg("guide.md").current_dir(project.path()).assert().success();
}
