use aitrail_testing::{SessionDirBuilder, edit, response, shell, tool_call};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aitrail() -> Command {
    Command::cargo_bin("aitrail").unwrap()
}

#[test]
fn summary_json_reports_exact_trail() {
    let tmp = TempDir::new().unwrap();
    let builder = SessionDirBuilder::new(tmp.path());
    builder.write_record(&tool_call("conv-1", "search").into()).unwrap();
    builder
        .write_record(&shell("conv-1", "cargo test", "ok").into())
        .unwrap();
    builder
        .write_record(&edit("conv-1", "src/lib.rs", &[("a", "b")]).into())
        .unwrap();
    builder.write_record(&response("conv-1", "done").into()).unwrap();

    aitrail()
        .args(["summary", tmp.path().to_str().unwrap(), "--json", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP:1 Shell:1 Edits:1 Responses:1"));
}

#[test]
fn summary_of_missing_directory_degrades_to_zeros() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("no-such-session");

    aitrail()
        .args(["summary", missing.to_str().unwrap(), "--json", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP:0 Shell:0 Edits:0 Responses:0"));
}

#[test]
fn summary_filters_by_conversation() {
    let tmp = TempDir::new().unwrap();
    let builder = SessionDirBuilder::new(tmp.path());
    builder
        .write_record(&shell("conv-1", "cargo build", "").into())
        .unwrap();
    builder
        .write_record(&shell("conv-2", "cargo doc", "").into())
        .unwrap();

    aitrail()
        .args([
            "summary",
            tmp.path().to_str().unwrap(),
            "--conversation",
            "conv-1",
            "--json",
            "--no-git",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("cargo build"))
        .stdout(predicate::str::contains("cargo doc").not());
}

#[test]
fn playbooks_add_then_list_round_trips() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_str().unwrap();

    aitrail()
        .args(["playbooks", "add", "ses-1", "pb-retry-loop", "--dir", dir])
        .assert()
        .success();
    aitrail()
        .args(["playbooks", "add", "ses-1", "pb-retry-loop", "--dir", dir])
        .assert()
        .success();
    aitrail()
        .args(["playbooks", "add", "ses-1", "pb-split-diff", "--dir", dir])
        .assert()
        .success();

    aitrail()
        .args(["playbooks", "list", "ses-1", "--dir", dir])
        .assert()
        .success()
        .stdout("pb-retry-loop\npb-split-diff\n");
}

#[test]
fn playbooks_list_of_unknown_session_prints_nothing() {
    let tmp = TempDir::new().unwrap();

    aitrail()
        .args([
            "playbooks",
            "list",
            "ses-unknown",
            "--dir",
            tmp.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("");
}
