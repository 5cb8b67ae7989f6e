//! End-to-end tests for the `headwind` binary.
#![expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]

use std::fs;
use std::str;

use assert_cmd::Command;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const UNSORTED: &str = "<div class=\"p-4 flex container\"></div>\n";
const SORTED: &str = "<div class=\"container flex p-4\"></div>\n";

#[fixture]
fn project() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::create_dir_all(dir.path().join("src")).expect("create src");
    fs::write(dir.path().join("index.html"), UNSORTED).expect("write html");
    fs::write(
        dir.path().join("src/App.jsx"),
        "export const App = () => <main className=\"p-4 flex\" />;\n",
    )
    .expect("write jsx");
    fs::write(dir.path().join("notes.txt"), UNSORTED).expect("write txt");
    dir
}

fn headwind() -> Command {
    let mut command = Command::cargo_bin("headwind").expect("binary exists");
    command
        .env_remove("HEADWIND_LOG_LEVEL")
        .env_remove("HEADWIND_FORMATTER");
    command
}

#[rstest]
fn sort_rewrites_known_files(project: TempDir) {
    let output = headwind()
        .arg("sort")
        .arg(project.path())
        .output()
        .expect("runs");
    assert!(output.status.success());

    let read = |name: &str| fs::read_to_string(project.path().join(name)).expect("read file");
    assert_eq!(read("index.html"), SORTED);
    assert_eq!(
        read("src/App.jsx"),
        "export const App = () => <main className=\"flex p-4\" />;\n"
    );
    assert_eq!(read("notes.txt"), UNSORTED);
}

#[rstest]
fn check_reports_unsorted_spans(project: TempDir) {
    let html = project.path().join("index.html");
    let output = headwind()
        .args(["sort", "--check"])
        .arg(&html)
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let stdout = str::from_utf8(&output.stdout).expect("utf8");
    assert_eq!(
        stdout,
        format!("{}:1:13: classes are not sorted\n", html.display())
    );
    assert_eq!(fs::read_to_string(&html).expect("read file"), UNSORTED);
}

#[rstest]
fn check_passes_on_sorted_files(project: TempDir) {
    let html = project.path().join("index.html");
    fs::write(&html, SORTED).expect("write html");
    headwind()
        .args(["sort", "--check"])
        .arg(&html)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn stdin_sorts_to_stdout() {
    headwind()
        .args(["stdin", "--language", "css"])
        .write_stdin(".btn { @apply p-4 flex; }")
        .assert()
        .success()
        .stdout(".btn { @apply flex p-4; }");
}

#[rstest]
fn config_file_changes_settings(project: TempDir) {
    let settings = project.path().join("headwind.json");
    fs::write(&settings, r#"{ "defaultSortOrder": ["p-4", "container", "flex"] }"#)
        .expect("write settings");
    headwind()
        .args(["stdin", "--language", "html", "--config"])
        .arg(&settings)
        .write_stdin(UNSORTED)
        .assert()
        .success()
        .stdout("<div class=\"p-4 container flex\"></div>\n");
}

#[test]
fn invalid_log_level_in_environment_exits_with_two() {
    let output = headwind()
        .env("HEADWIND_LOG_LEVEL", "loud")
        .args(["stdin", "--language", "html"])
        .write_stdin("")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_project_formatter_fails() {
    let output = headwind()
        .args(["project", "--formatter", "headwind-no-such-formatter", "."])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("failed to run `headwind-no-such-formatter`"));
}

#[test]
fn missing_paths_fail() {
    headwind()
        .args(["sort", "/definitely/not/here"])
        .assert()
        .failure();
}
