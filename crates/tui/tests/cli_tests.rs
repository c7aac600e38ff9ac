use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tracing::info;

fn memlab(tmp: &Path) -> Command {
    let config = tmp.join("memlab.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin("memlab").unwrap();
    cmd.env("TMPDIR", tmp).arg("--config").arg(config);
    cmd
}

fn dump(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--dump").output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_command() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");

    let mut cmd = Command::cargo_bin("memlab").unwrap();
    cmd.arg("--help").assert().success().stdout(predicate::str::contains("--dump"));
}

#[test]
fn test_dump_opens_requested_step() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");

    let tmp = tempfile::tempdir().unwrap();
    let view = dump(memlab(tmp.path()).args(["--section", "3", "--step", "2"]));

    assert_eq!(view["pager"]["position"], 4);
    assert_eq!(view["tabs"][3]["selected"], true);
    assert!(view["body"].to_string().contains("Step 2: ExporterFactory.createExporter"));
}

#[test]
fn test_dump_clamps_section() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");

    let tmp = tempfile::tempdir().unwrap();
    let view = dump(memlab(tmp.path()).args(["--section", "99"]));
    assert_eq!(view["pager"]["position"], 6);
    assert_eq!(view["pager"]["next"]["enabled"], false);

    let view = dump(memlab(tmp.path()).args(["--section", "-4"]));
    assert_eq!(view["pager"]["position"], 1);
    assert_eq!(view["pager"]["previous"]["enabled"], false);
}

#[test]
fn test_exported_lesson_loads_back() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");

    let tmp = tempfile::tempdir().unwrap();
    let lesson = tmp.path().join("lesson.toml");
    memlab(tmp.path()).arg("--export-lesson").arg(&lesson).assert().success();
    assert!(fs::read_to_string(&lesson).unwrap().contains("Document Exporter Exercise"));

    let view = dump(memlab(tmp.path()).arg("--lesson").arg(&lesson));
    assert_eq!(view["header"]["title"], "Document Exporter Exercise");
    assert_eq!(view["tabs"].as_array().unwrap().len(), 6);
}

#[test]
fn test_missing_config_fails() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");

    let tmp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("memlab").unwrap();
    cmd.env("TMPDIR", tmp.path())
        .arg("--config")
        .arg(tmp.path().join("absent.toml"))
        .arg("--dump")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_unknown_theme_rejected() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");

    let tmp = tempfile::tempdir().unwrap();
    memlab(tmp.path())
        .args(["--theme", "solarized", "--dump"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}
