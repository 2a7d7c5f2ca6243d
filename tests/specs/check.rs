//! Behavioral specs for `guidelint check`.

use crate::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use similar_asserts::assert_eq;

// =============================================================================
// BAD VS BETTER
// =============================================================================

/// The Arrange-Act-Assert pair: FAIL for bad, PASS for better.
#[test]
fn arrange_act_assert_pair_fails_bad_and_passes_better() {
    let output = guidelint_cmd()
        .args(["check", "--rule", "arrange-act-assert", "guide.md"])
        .current_dir(fixture("aaa"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\
Arrange-Act-Assert | 0 | arrange-act-assert | FAIL
  test `Add_EmptyString_ReturnsZero` has no Arrange step
Arrange-Act-Assert | 1 | arrange-act-assert | PASS

arrange-act-assert: 1 passed, 1 failed, 0 skipped
total: 1 passed, 1 failed, 0 skipped
"
    );
}

/// Labels written as headings tag the following block and keep it in the
/// scenario's section.
#[test]
fn heading_labels_pair_within_scenario_section() {
    let output = guidelint_cmd()
        .args(["check", "--rule", "arrange-act-assert", "guide.md"])
        .current_dir(fixture("heading-labels"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\
Arrange-Act-Assert | 0 | arrange-act-assert | FAIL
  test `Add_EmptyString_ReturnsZero` has no Arrange step
Arrange-Act-Assert | 1 | arrange-act-assert | PASS

arrange-act-assert: 1 passed, 1 failed, 0 skipped
total: 1 passed, 1 failed, 0 skipped
"
    );
}

fn assert_pair(section: &str, rule: &str) {
    guidelint_cmd()
        .args(["--rule", rule, "unit-testing.md"])
        .current_dir(fixture("best-practices"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(format!("{section} | 0 | {rule} | FAIL")))
        .stdout(predicates::str::contains(format!("{section} | 1 | {rule} | PASS")));
}

#[test]
fn test_name_parts_pair() {
    assert_pair("Naming your tests", "test-name-parts");
}

#[test]
fn arrange_act_assert_pair_in_full_guide() {
    assert_pair("Arranging your tests", "arrange-act-assert");
}

#[test]
fn no_magic_strings_pair() {
    assert_pair("Avoid magic strings", "no-magic-strings");
}

#[test]
fn no_logic_in_tests_pair() {
    assert_pair("Avoid logic in tests", "no-logic-in-tests");
}

#[test]
fn prefer_helper_methods_pair() {
    assert_pair("Prefer helper methods to setup and teardown", "prefer-helper-methods");
}

#[test]
fn double_naming_pair() {
    assert_pair("Stubs and mocks", "double-naming");
}

#[test]
fn no_bare_assert_pair() {
    assert_pair("Assert with helpers", "no-bare-assert");
}

#[test]
fn single_act_pair() {
    assert_pair("Avoid multiple acts", "single-act");
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// A guide whose labeled examples all pass exits 0; skips never fail.
#[test]
fn clean_guide_passes() {
    guidelint_cmd()
        .arg("guide.md")
        .current_dir(fixture("clean"))
        .assert()
        .success()
        .stdout(predicates::str::contains("double-naming | SKIP"))
        .stdout(predicates::str::contains("total: 7 passed, 0 failed, 1 skipped"));
}

/// Zero code regions: empty report, exit 0.
#[test]
fn guide_without_code_gives_empty_report() {
    guidelint_cmd()
        .arg("guide.md")
        .current_dir(fixture("empty"))
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// Neutral examples are not evaluated by default.
#[test]
fn neutral_examples_are_skipped() {
    guidelint_cmd()
        .arg("guide.md")
        .current_dir(fixture("clean"))
        .assert()
        .stdout(predicates::str::contains("Running the tests").not());
}

/// Unterminated block: parse error, exit 2, no partial report.
#[test]
fn unterminated_block_is_a_parse_error() {
    guidelint_cmd()
        .arg("guide.md")
        .current_dir(fixture("unterminated"))
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains(
            "guide.md:7: unterminated code block in section 'Naming your tests'",
        ));
}

/// One broken document aborts the whole run.
#[test]
fn parse_error_suppresses_other_documents() {
    guidelint_cmd()
        .args(["clean/guide.md", "unterminated/guide.md"])
        .current_dir(fixture(""))
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let project = Project::empty();
    guidelint_cmd()
        .arg("missing.md")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read missing.md"));
}

// =============================================================================
// INPUTS
// =============================================================================

#[test]
fn reads_stdin_without_paths() {
    let guide = std::fs::read_to_string(fixture("aaa/guide.md")).unwrap();
    let project = Project::empty();

    guidelint_cmd()
        .args(["--rule", "arrange-act-assert"])
        .current_dir(project.path())
        .write_stdin(guide)
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Arrange-Act-Assert | 0 | arrange-act-assert | FAIL"));
}

#[test]
fn dash_reads_stdin() {
    let project = Project::empty();

    guidelint_cmd()
        .arg("-")
        .current_dir(project.path())
        .write_stdin("# Empty\n")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn repeated_dash_is_an_error() {
    let project = Project::empty();
    guidelint_cmd()
        .args(["-", "-"])
        .current_dir(project.path())
        .write_stdin("# Empty\n")
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("can only be read once"));
}

/// Directories are walked; .gitignore and exclude globs are honored, and
/// each line carries the document path.
#[test]
fn directory_walk_prefixes_paths() {
    let output = guidelint_cmd()
        .args(["--rule", "arrange-act-assert", "docs-tree"])
        .current_dir(fixture(""))
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains(
        "docs-tree/guides/arrange.md | Arrange-Act-Assert | 0 | arrange-act-assert | FAIL"
    ));
    assert!(stdout.contains("docs-tree/guides/clean.md | Arrange, Act, Assert | 0"));
    assert!(!stdout.contains("node_modules"));
    assert!(!stdout.contains("wip.md"));
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn label_filter_restricts_examples() {
    guidelint_cmd()
        .args(["--label", "better", "--rule", "arrange-act-assert", "guide.md"])
        .current_dir(fixture("aaa"))
        .assert()
        .success()
        .stdout(predicates::str::contains("| 0 |").not())
        .stdout(predicates::str::contains("Arrange-Act-Assert | 1 | arrange-act-assert | PASS"));
}

#[test]
fn no_rule_skips_rules() {
    guidelint_cmd()
        .args(["--no-rule", "arrange-act-assert", "guide.md"])
        .current_dir(fixture("aaa"))
        .assert()
        .stdout(predicates::str::contains("| arrange-act-assert |").not())
        .stdout(predicates::str::contains("| single-act |"));
}

#[test]
fn unknown_rule_is_an_error() {
    guidelint_cmd()
        .args(["--rule", "no-such-rule", "guide.md"])
        .current_dir(fixture("aaa"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown rule `no-such-rule`"));
}

/// Identical input gives byte-identical reports.
#[test]
fn reports_are_deterministic() {
    let run = || {
        guidelint_cmd()
            .args(["-o", "json", "docs-tree", "best-practices"])
            .current_dir(fixture(""))
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
