// CLI surface checks: help text and the no-argument guidance banner.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_every_workflow_command() {
    let mut cmd = Command::cargo_bin("sellerdesk").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("queue"))
        .stdout(predicate::str::contains("approve"))
        .stdout(predicate::str::contains("reject"))
        .stdout(predicate::str::contains("assign-roles"))
        .stdout(predicate::str::contains("whoami"));
}

#[test]
fn running_without_arguments_shows_guidance() {
    let mut cmd = Command::cargo_bin("sellerdesk").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sellerdesk register"))
        .stdout(predicate::str::contains("sellerdesk status"))
        .stdout(predicate::str::contains("sellerdesk queue"));
}

#[test]
fn reject_requires_a_reason_argument() {
    let mut cmd = Command::cargo_bin("sellerdesk").unwrap();

    cmd.args(["reject", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reason"));
}
