//! End-to-end tests for the `syncfilter` executable.

use assert_cmd::Command;
use predicates::prelude::*;
use test_support::RuleDir;

fn syncfilter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_syncfilter"))
}

/// Verifies `--help` documents the rule options.
#[test]
fn help_lists_options() {
    syncfilter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--rules"))
        .stdout(predicate::str::contains("--inherited"))
        .stderr(predicate::str::is_empty());
}

/// Verifies a rule file classifies each path on its own line.
#[test]
fn classifies_paths_from_rule_file() {
    let dir = RuleDir::new().unwrap();
    let rules = dir
        .write_rules(
            ".syncfilter",
            &["# artifacts", "-N:*.tmp", "-p:build/*", "+nr:^keep_.*$"],
        )
        .unwrap();

    syncfilter()
        .arg("--rules")
        .arg(&rules)
        .args(["a.tmp", "build/app", "keep_notes", "src/lib.rs"])
        .assert()
        .success()
        .stdout("excluded\ta.tmp\nexcluded\tbuild/app\nincluded\tkeep_notes\n-\tsrc/lib.rs\n");
}

/// Verifies `--inherited` drops rules that only apply locally.
#[test]
fn inherited_flag_skips_local_rules() {
    syncfilter()
        .args(["--inherited", "-e", "-N:*.tmp", "-e", "-n:*.bak", "a.tmp", "a.bak"])
        .assert()
        .success()
        .stdout("-\ta.tmp\nexcluded\ta.bak\n");
}

/// Verifies `--check` validates without classifying.
#[test]
fn check_reports_rule_count() {
    let dir = RuleDir::new().unwrap();
    let rules = dir.write_rules("rules", &["-:a", "-p:b", "+:c"]).unwrap();

    syncfilter()
        .arg("--check")
        .arg("-r")
        .arg(&rules)
        .assert()
        .success()
        .stdout("rules: 3 (exclusions: 2, inclusions: 1)\n");
}

/// Verifies a rejected rule exits with status 1 and names the line.
#[test]
fn syntax_error_fails_with_status_one() {
    let dir = RuleDir::new().unwrap();
    let rules = dir.write_rules("rules", &["-N:ok", "-P:nope"]).unwrap();

    syncfilter()
        .arg("-r")
        .arg(&rules)
        .arg("ok")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "syncfilter: syntax error parsing '-P:nope'",
        ));
}

/// Verifies an unreadable rule file exits with status 1.
#[test]
fn missing_rule_file_fails_with_status_one() {
    let dir = RuleDir::new().unwrap();

    syncfilter()
        .arg("-r")
        .arg(dir.path().join("absent"))
        .arg("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read rule file"));
}

/// Verifies usage errors exit with status 2.
#[test]
fn usage_error_fails_with_status_two() {
    syncfilter()
        .arg("only-a-path")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--rules"));
}

/// Verifies `RUST_LOG` enables engine diagnostics on stderr.
#[test]
fn rust_log_enables_filter_diagnostics() {
    syncfilter()
        .env("RUST_LOG", "syncfilter::filter=trace")
        .args(["-e", "-N:x", "x"])
        .assert()
        .success()
        .stdout("excluded\tx\n")
        .stderr(predicate::str::contains("syncfilter::filter"));
}
