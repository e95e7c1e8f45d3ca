use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn bulkrename() -> Command {
    Command::cargo_bin("bulkrename").unwrap()
}

#[test]
fn test_help_command() {
    bulkrename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rename files in bulk using templates or find/replace rules",
        ));
}

#[test]
fn test_version_flag() {
    bulkrename()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bulkrename"));
}

#[test]
fn test_find_replace_rename() {
    let temp = TempDir::new().unwrap();
    temp.child("my file.txt").write_str("x").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-f", "my file.txt", "--find", " ", "--replace", "_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: my file.txt -> my_file.txt"))
        .stdout(predicate::str::contains("Renamed 1 file(s)."));

    temp.child("my_file.txt").assert(predicate::path::exists());
    temp.child("my file.txt").assert(predicate::path::missing());
}

#[test]
fn test_glob_template_rename() {
    let temp = TempDir::new().unwrap();
    temp.child("a.jpg").write_str("a").unwrap();
    temp.child("b.jpg").write_str("b").unwrap();
    temp.child("c.png").write_str("c").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-p", "*.jpg", "-n", "photo_{count:3}.{ext}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 file(s)."));

    temp.child("photo_001.jpg").assert(predicate::path::exists());
    temp.child("photo_002.jpg").assert(predicate::path::exists());
    // The png was not matched
    temp.child("c.png").assert(predicate::path::exists());
}

#[test]
fn test_recursive_glob() {
    let temp = TempDir::new().unwrap();
    temp.child("sub/deep.log").write_str("x").unwrap();
    temp.child("top.log").write_str("y").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-p", "*.log", "-r", "--find", ".log", "--replace", ".txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 file(s)."));

    temp.child("sub/deep.txt").assert(predicate::path::exists());
    temp.child("top.txt").assert(predicate::path::exists());
}

#[test]
fn test_regex_rename() {
    let temp = TempDir::new().unwrap();
    temp.child("img123.png").write_str("x").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args([
            "rename", "-f", "img123.png", "--find", "[0-9]+", "--replace", "", "--regex",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: img123.png -> img.png"));

    temp.child("img.png").assert(predicate::path::exists());
}

#[test]
fn test_preview_leaves_files_and_log_alone() {
    let temp = TempDir::new().unwrap();
    temp.child("a.txt").write_str("x").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["--preview", "rename", "-f", "a.txt", "--find", "a", "--replace", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename: a.txt -> b.txt"))
        .stdout(predicate::str::contains("Preview of Renamed 0 file(s)."));

    temp.child("a.txt").assert(predicate::path::exists());
    temp.child("b.txt").assert(predicate::path::missing());
    temp.child("rename_log.json").assert(predicate::path::missing());
}

#[test]
fn test_both_rule_forms_is_fatal() {
    let temp = TempDir::new().unwrap();
    temp.child("a.txt").write_str("x").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args([
            "rename", "-f", "a.txt", "-n", "{count}", "--find", "a", "--replace", "b",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not both"));

    // Fatal before any filesystem mutation
    temp.child("a.txt").assert(predicate::path::exists());
}

#[test]
fn test_missing_rule_is_fatal() {
    let temp = TempDir::new().unwrap();
    temp.child("a.txt").write_str("x").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-f", "a.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no renaming rule supplied"));
}

#[test]
fn test_collision_is_reported_per_file() {
    let temp = TempDir::new().unwrap();
    temp.child("x.jpg").write_str("first").unwrap();
    temp.child("y.jpg").write_str("second").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-f", "x.jpg", "y.jpg", "-n", "same.{ext}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("can't rename to same.jpg (already exists)"))
        .stdout(predicate::str::contains("Renamed 1 file(s)."));

    temp.child("y.jpg").assert(predicate::path::exists());
}

#[test]
fn test_rollback_without_prior_batch() {
    let temp = TempDir::new().unwrap();

    bulkrename()
        .current_dir(temp.path())
        .arg("rollback")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to roll back."));
}

#[test]
fn test_history_lifecycle() {
    let temp = TempDir::new().unwrap();

    bulkrename()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found."));

    temp.child("a.txt").write_str("x").unwrap();
    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-f", "a.txt", "--find", "a", "--replace", "b"])
        .assert()
        .success();

    bulkrename()
        .current_dir(temp.path())
        .args(["history", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 1 operations"))
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"));

    bulkrename()
        .current_dir(temp.path())
        .arg("clear-history")
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared."));

    bulkrename()
        .current_dir(temp.path())
        .arg("clear-history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history to clear."));
}

#[test]
fn test_custom_log_path() {
    let temp = TempDir::new().unwrap();
    temp.child("a.txt").write_str("x").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args([
            "--log", "ops/audit.json", "rename", "-f", "a.txt", "--find", "a", "--replace", "b",
        ])
        .assert()
        .success();

    temp.child("ops/audit.json").assert(predicate::path::exists());
    temp.child("rename_log.json").assert(predicate::path::missing());
}

#[test]
fn test_config_file_log_path_and_flag_override() {
    let temp = TempDir::new().unwrap();
    temp.child(".bulkrename/config.toml")
        .write_str("[defaults]\nlog_file = \"custom/history.json\"\n")
        .unwrap();
    temp.child("a.txt").write_str("x").unwrap();
    temp.child("b.txt").write_str("y").unwrap();

    // The config value beats the built-in default
    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-f", "a.txt", "--find", "a", "--replace", "z"])
        .assert()
        .success();
    temp.child("custom/history.json").assert(predicate::path::exists());
    temp.child("rename_log.json").assert(predicate::path::missing());

    // --log beats the config value
    bulkrename()
        .current_dir(temp.path())
        .args([
            "--log", "flag.json", "rename", "-f", "b.txt", "--find", "b", "--replace", "w",
        ])
        .assert()
        .success();
    temp.child("flag.json").assert(predicate::path::exists());
}

#[test]
fn test_backup_flag_snapshots_files() {
    let temp = TempDir::new().unwrap();
    temp.child("a.txt").write_str("payload").unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args([
            "rename", "-f", "a.txt", "--find", "a", "--replace", "b", "--backup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 1 file(s)."));

    let sessions: Vec<_> = std::fs::read_dir(temp.path().join(".rename_backup"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].join("a.txt").exists());
    assert!(sessions[0].join("metadata.json").exists());
}

#[test]
fn test_directory_flag_changes_working_dir() {
    let temp = TempDir::new().unwrap();
    temp.child("work/a.txt").write_str("x").unwrap();
    let work = temp.path().join("work");

    bulkrename()
        .args([
            "-C",
            work.to_str().unwrap(),
            "rename",
            "-f",
            "a.txt",
            "--find",
            "a",
            "--replace",
            "b",
        ])
        .assert()
        .success();

    temp.child("work/b.txt").assert(predicate::path::exists());
}

#[test]
fn test_no_matching_files() {
    let temp = TempDir::new().unwrap();

    bulkrename()
        .current_dir(temp.path())
        .args(["rename", "-p", "*.nope", "-n", "{count}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found to rename."));
}

#[test]
fn test_patterns_and_examples_help() {
    bulkrename()
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("{count:3}"))
        .stdout(predicate::str::contains("{origname}"));

    bulkrename()
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("bulkrename rollback"));
}
