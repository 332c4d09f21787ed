// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{git_available, TempRepo};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_git_chunks"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git_chunks"));
}

#[test]
fn rejects_a_zero_limit() {
    Command::new(env!("CARGO_BIN_EXE_git_chunks"))
        .args(["--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chunk limit"));
}

#[test]
fn rejects_a_non_repository_root() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let dir = common::TempDir::new("not_a_repo", "git_chunks_cli");
    Command::new(env!("CARGO_BIN_EXE_git_chunks"))
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git working tree"));
}

#[test]
fn emits_a_json_report_for_a_repository() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("cli_json");
    repo.write_untracked("one.txt", 3);
    repo.write_untracked("two.txt", 4);

    Command::new(env!("CARGO_BIN_EXE_git_chunks"))
        .arg(repo.path())
        .args(["--format", "json", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chunks\""))
        .stdout(predicate::str::contains("\"total_candidates\": 2"));
}

#[test]
fn emits_a_table_report_by_default() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("cli_table");
    repo.write_untracked("one.txt", 3);

    Command::new(env!("CARGO_BIN_EXE_git_chunks"))
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Git Repository Chunking Report"))
        .stdout(predicate::str::contains("Total chunks created: 1"));
}
