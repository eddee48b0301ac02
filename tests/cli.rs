use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_app() {
    Command::cargo_bin("stubchat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn version_prints() {
    Command::cargo_bin("stubchat")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stubchat"));
}
