#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn flogo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flogo").unwrap();
    cmd.current_dir(dir.path()).env("FLOGO_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    std::fs::write(
        dir.path().join("flogo.json"),
        r#"{"name":"demo","activities":[],"models":[],"triggers":[]}"#,
    )
    .unwrap();
    std::fs::create_dir_all(dir.path().join("bin")).unwrap();
    std::fs::write(dir.path().join("bin/config.json"), r#"{"triggers":[]}"#).unwrap();
}

fn write_item(dir: &TempDir, rel: &str, file: &str, body: &str) -> String {
    let path = dir.path().join(rel);
    std::fs::create_dir_all(&path).unwrap();
    std::fs::write(path.join(file), body).unwrap();
    path.to_string_lossy().into_owned()
}

fn read_json(dir: &TempDir, rel: &str) -> Value {
    serde_json::from_str(&std::fs::read_to_string(dir.path().join(rel)).unwrap()).unwrap()
}

fn read(dir: &TempDir, rel: &str) -> String {
    std::fs::read_to_string(dir.path().join(rel)).unwrap()
}

// ---------------------------------------------------------------------------
// flogo add activity / model
// ---------------------------------------------------------------------------

#[test]
fn add_activity() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let logger = write_item(&dir, "act/logger", "activity.json", r#"{"name":"Logger"}"#);

    flogo(&dir)
        .args(["add", "activity", &logger])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added activity 'Logger'"));

    let project = read_json(&dir, "flogo.json");
    assert_eq!(project["activities"][0]["name"], "Logger");
    assert_eq!(read(&dir, "bin/config.json"), r#"{"triggers":[]}"#);
}

#[test]
fn add_model_with_file_scheme() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let model = write_item(&dir, "models/simple", "model.json", r#"{"name":"simple"}"#);

    flogo(&dir)
        .args(["add", "model", &format!("file://{model}")])
        .assert()
        .success();

    assert_eq!(read_json(&dir, "flogo.json")["models"][0]["name"], "simple");
}

#[test]
fn item_type_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let logger = write_item(&dir, "act/logger", "activity.json", r#"{"name":"Logger"}"#);

    flogo(&dir)
        .args(["add", "Activity", &logger])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// flogo add trigger
// ---------------------------------------------------------------------------

#[test]
fn add_trigger_writes_engine_settings() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let rest = write_item(
        &dir,
        "trg/rest",
        "trigger.json",
        r#"{"name":"rest","settings":[{"name":"port","value":"8080"}]}"#,
    );

    flogo(&dir)
        .args(["add", "trigger", &rest])
        .assert()
        .success()
        .stdout(predicate::str::contains("engine config updated"));

    let engine = read_json(&dir, "bin/config.json");
    assert_eq!(engine["triggers"][0]["name"], "rest");
    assert_eq!(engine["triggers"][0]["settings"]["port"], "8080");
    assert_eq!(read_json(&dir, "flogo.json")["triggers"][0]["name"], "rest");
}

#[test]
fn add_trigger_twice_fails_with_duplicate() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let rest = write_item(&dir, "trg/rest", "trigger.json", r#"{"name":"rest"}"#);

    flogo(&dir).args(["add", "trigger", &rest]).assert().success();
    let project_before = read(&dir, "flogo.json");
    let engine_before = read(&dir, "bin/config.json");

    flogo(&dir)
        .args(["add", "trigger", &rest])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already installed"));

    assert_eq!(read(&dir, "flogo.json"), project_before);
    assert_eq!(read(&dir, "bin/config.json"), engine_before);
}

#[test]
fn existing_engine_entry_is_preserved() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let engine = r#"{"triggers":[{"name":"rest","settings":{"port":"9090"}}]}"#;
    std::fs::write(dir.path().join("bin/config.json"), engine).unwrap();
    let rest = write_item(
        &dir,
        "trg/rest",
        "trigger.json",
        r#"{"name":"rest","settings":[{"name":"port","value":"8080"}]}"#,
    );

    flogo(&dir)
        .args(["add", "trigger", &rest])
        .assert()
        .success()
        .stdout(predicate::str::contains("left unchanged"));

    assert_eq!(read(&dir, "bin/config.json"), engine);
}

#[test]
fn corrupt_engine_config_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(dir.path().join("bin/config.json"), "{ broken").unwrap();
    let rest = write_item(&dir, "trg/rest", "trigger.json", r#"{"name":"rest"}"#);
    let project_before = read(&dir, "flogo.json");

    flogo(&dir)
        .args(["add", "trigger", &rest])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.json"));

    assert_eq!(read(&dir, "flogo.json"), project_before);
    assert_eq!(read(&dir, "bin/config.json"), "{ broken");
}

// ---------------------------------------------------------------------------
// Error surface
// ---------------------------------------------------------------------------

#[test]
fn unknown_item_type_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    flogo(&dir)
        .args(["add", "flow", "./x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown item type 'flow'"));
}

#[test]
fn missing_path_argument_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    flogo(&dir).args(["add", "activity"]).assert().failure();
}

#[test]
fn too_many_arguments_fail() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    flogo(&dir)
        .args(["add", "activity", "./a", "./b"])
        .assert()
        .failure();
}

#[test]
fn missing_item_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    flogo(&dir)
        .args(["add", "activity", "github.com/acme/not-vendored"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to find"));
}

#[test]
fn corrupt_project_descriptor_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(dir.path().join("flogo.json"), "nope").unwrap();
    let logger = write_item(&dir, "act/logger", "activity.json", r#"{"name":"Logger"}"#);

    flogo(&dir)
        .args(["add", "activity", &logger])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flogo.json"));
}

// ---------------------------------------------------------------------------
// --src and list
// ---------------------------------------------------------------------------

#[test]
fn add_with_src_copies_item() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let logger = write_item(&dir, "act/logger", "activity.json", r#"{"name":"Logger"}"#);

    flogo(&dir)
        .args(["add", "activity", &logger, "--src"])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("src/demo/activities/Logger/activity.json")
        .exists());
    assert_eq!(read_json(&dir, "flogo.json")["activities"][0]["local"], true);
}

#[test]
fn list_shows_installed_items() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let logger = write_item(&dir, "act/logger", "activity.json", r#"{"name":"Logger"}"#);
    let rest = write_item(&dir, "trg/rest", "trigger.json", r#"{"name":"rest"}"#);
    flogo(&dir).args(["add", "activity", &logger]).assert().success();
    flogo(&dir).args(["add", "trigger", &rest]).assert().success();

    flogo(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logger").and(predicate::str::contains("rest")));

    let out = flogo(&dir)
        .args(["list", "trigger", "--json"])
        .output()
        .unwrap();
    let rows: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "rest");
    assert_eq!(rows[0]["type"], "trigger");
}

#[test]
fn add_json_output() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let rest = write_item(&dir, "trg/rest", "trigger.json", r#"{"name":"rest"}"#);

    let out = flogo(&dir)
        .args(["add", "trigger", &rest, "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let outcome: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(outcome["item_type"], "trigger");
    assert_eq!(outcome["item"]["name"], "rest");
    assert_eq!(outcome["engine_config_updated"], true);
}

#[test]
fn locator_naming_a_file_reports_it() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let logger = write_item(&dir, "act/logger", "activity.json", r#"{"name":"Logger"}"#);

    flogo(&dir)
        .args(["add", "activity", &format!("{logger}/activity.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn add_with_src_on_item_in_source_tree_keeps_files() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let log = write_item(
        &dir,
        "src/demo/activities/log",
        "activity.json",
        r#"{"name":"log"}"#,
    );

    flogo(&dir)
        .args(["add", "activity", &log, "--src"])
        .assert()
        .success();

    assert_eq!(
        read(&dir, "src/demo/activities/log/activity.json"),
        r#"{"name":"log"}"#
    );
    assert_eq!(
        read_json(&dir, "flogo.json")["activities"][0]["path"],
        "src/demo/activities/log"
    );
}
