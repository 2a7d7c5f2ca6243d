//! Behavioral specs for report formats and color.

use crate::prelude::*;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn json_output_shape() {
    let assert = guidelint_cmd()
        .args(["-o", "json", "guide.md"])
        .current_dir(fixture("clean"))
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["passed"], true);
    let findings = report["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 8);
    assert_eq!(findings[0]["rule"], "arrange-act-assert");
    assert_eq!(findings[0]["section_title"], "Arrange, Act, Assert");
    assert_eq!(findings[0]["label"], "better");
    assert_eq!(findings[0]["outcome"], "pass");
    assert_eq!(report["summary"]["passed"], 7);
    assert_eq!(report["summary"]["skipped"], 1);
    assert_eq!(report["summary"]["rules"]["double-naming"]["skipped"], 1);
}

#[test]
fn json_failure_sets_passed_false() {
    let assert = guidelint_cmd()
        .args(["--output", "json", "--rule", "arrange-act-assert", "guide.md"])
        .current_dir(fixture("aaa"))
        .assert()
        .code(1);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["passed"], false);
    assert_eq!(report["findings"][0]["outcome"], "fail");
    assert_eq!(
        report["findings"][0]["message"],
        "test `Add_EmptyString_ReturnsZero` has no Arrange step"
    );
}

#[test]
fn json_for_empty_guide() {
    let assert = guidelint_cmd()
        .args(["-o", "json", "guide.md"])
        .current_dir(fixture("empty"))
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["findings"], serde_json::json!([]));
}

#[test]
fn color_always_emits_escapes() {
    guidelint_cmd()
        .args(["--color", "always", "guide.md"])
        .current_dir(fixture("clean"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

#[test]
fn piped_output_is_uncolored_by_default() {
    guidelint_cmd()
        .arg("guide.md")
        .current_dir(fixture("clean"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn no_color_wins_over_always() {
    guidelint_cmd()
        .args(["--color", "always", "--no-color", "guide.md"])
        .current_dir(fixture("clean"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn json_is_never_colored() {
    guidelint_cmd()
        .args(["--color", "always", "-o", "json", "guide.md"])
        .current_dir(fixture("clean"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn verbose_writes_diagnostics_to_stderr() {
    guidelint_cmd()
        .args(["-v", "guide.md"])
        .current_dir(fixture("clean"))
        .assert()
        .success()
        .stderr(predicates::str::contains("Configuration:"))
        .stderr(predicates::str::contains("guide.md: 4 sections, 0 bad, 1 better, 1 neutral"));
}
