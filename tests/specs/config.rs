//! Behavioral specs for guidelint.toml.

use crate::prelude::*;
use predicates::prelude::PredicateBooleanExt;

/// A discovered config changes label words and rule parameters.
#[test]
fn discovered_config_sets_labels_and_parts() {
    guidelint_cmd()
        .args(["--rule", "test-name-parts", "guide.md"])
        .current_dir(fixture("custom-labels"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Naming | 0 | test-name-parts | FAIL"))
        .stdout(predicates::str::contains("Naming | 1 | test-name-parts | PASS"));
}

#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    project.file("configs/strict.toml", "version = 1\n[rules.arrange-act-assert]\ncheck = \"off\"\n");
    project.guide("guide.md", "aaa/guide.md");

    guidelint_cmd()
        .args(["-C", "configs/strict.toml", "guide.md"])
        .current_dir(project.path())
        .assert()
        .stdout(predicates::str::contains("| arrange-act-assert |").not());
}

#[test]
fn config_from_environment() {
    let project = Project::empty();
    project.file("strict.toml", "version = 1\n[rules.arrange-act-assert]\ncheck = \"off\"\n");
    project.guide("guide.md", "aaa/guide.md");

    guidelint_cmd()
        .arg("guide.md")
        .env("GUIDELINT_CONFIG", project.path().join("strict.toml"))
        .current_dir(project.path())
        .assert()
        .stdout(predicates::str::contains("| arrange-act-assert |").not());
}

#[test]
fn config_in_parent_directory_is_found() {
    let project = Project::empty();
    project.config("version = 1\n[rules.arrange-act-assert]\ncheck = \"off\"\n");
    project.guide("docs/guide.md", "aaa/guide.md");

    guidelint_cmd()
        .arg("guide.md")
        .current_dir(project.path().join("docs"))
        .assert()
        .stdout(predicates::str::contains("| arrange-act-assert |").not());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let project = Project::empty();
    project.guide("guide.md", "clean/guide.md");

    guidelint_cmd()
        .args(["-C", "nope.toml", "guide.md"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read nope.toml"));
}

#[test]
fn unknown_rule_in_config_is_an_error() {
    let project = Project::empty();
    project.config("version = 1\n[rules.no-such-rule]\ncheck = \"off\"\n");
    project.guide("guide.md", "clean/guide.md");

    guidelint_cmd()
        .arg("guide.md")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown rule `no-such-rule`"));
}

#[test]
fn invalid_applicability_is_an_error() {
    let project = Project::empty();
    project.config("version = 1\n[rules.single-act]\napplies_to = \"sometimes\"\n");
    project.guide("guide.md", "clean/guide.md");

    guidelint_cmd().arg("guide.md").current_dir(project.path()).assert().code(2);
}

#[test]
fn unsupported_version_is_an_error() {
    let project = Project::empty();
    project.config("version = 2\n");
    project.guide("guide.md", "clean/guide.md");

    guidelint_cmd()
        .arg("guide.md")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// Unknown top-level keys warn but do not fail.
#[test]
fn unknown_key_warns() {
    let project = Project::empty();
    project.config("version = 1\ncolour = true\n");
    project.guide("guide.md", "clean/guide.md");

    guidelint_cmd()
        .arg("guide.md")
        .current_dir(project.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown config key `colour`"));
}

/// Include and exclude globs apply to directory arguments.
#[test]
fn file_globs_select_directory_contents() {
    let project = Project::empty();
    project.config("version = 1\n[files]\ninclude = [\"guides/*.md\"]\nexclude = [\"guides/draft-*.md\"]\n");
    project.guide("guides/clean.md", "clean/guide.md");
    project.guide("guides/draft-aaa.md", "aaa/guide.md");
    project.guide("README.md", "aaa/guide.md");

    guidelint_cmd()
        .arg(".")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Arrange, Act, Assert | 0 | arrange-act-assert | PASS"));
}
