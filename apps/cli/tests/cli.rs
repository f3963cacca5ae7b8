use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn rtfeat() -> Command {
    let mut cmd = Command::cargo_bin("rtfeat").expect("rtfeat binary should be built");
    cmd.env_remove("RTFEAT__DYNAMIC_CODE__ENABLED")
        .env_remove("RTFEAT__DYNAMIC_CODE__ENGINE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_reports_known_and_unknown_names() {
    rtfeat()
        .args(["check", "PortablePdb", "NonexistentFeatureXYZ", "portablepdb"])
        .assert()
        .success()
        .stdout("PortablePdb\ttrue\nNonexistentFeatureXYZ\tfalse\nportablepdb\tfalse\n");
}

#[test]
fn check_require_fails_for_unsupported_name() {
    rtfeat()
        .args(["check", "--require", "PortablePdb", "NonexistentFeatureXYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported features: NonexistentFeatureXYZ"));
}

#[test]
fn environment_selects_interpreter() {
    rtfeat()
        .env("RTFEAT__DYNAMIC_CODE__ENGINE", "interpreter")
        .arg("probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamic code: interpreted"))
        .stdout(predicate::str::contains("IsDynamicCodeSupported: true"))
        .stdout(predicate::str::contains("IsDynamicCodeCompiled: false"));
}

#[test]
fn config_file_disables_dynamic_code() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("rtfeat.toml");
    fs::write(&path, "[dynamic_code]\nenabled = false\n")?;

    rtfeat()
        .arg("--config")
        .arg(&path)
        .args(["check", "IsDynamicCodeSupported", "IsDynamicCodeCompiled", "PortablePdb"])
        .assert()
        .success()
        .stdout("IsDynamicCodeSupported\tfalse\nIsDynamicCodeCompiled\tfalse\nPortablePdb\ttrue\n");
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() {
    rtfeat()
        .args(["--config", "definitely/not/here.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Registry config error"));
}

#[test]
fn list_json_contains_every_flag() -> Result<(), Box<dyn std::error::Error>> {
    let output = rtfeat().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let flags = report["flags"].as_array().expect("flags array");
    assert_eq!(flags.len(), 10);
    assert!(
        flags
            .iter()
            .filter(|f| f["isStatic"] == true)
            .all(|f| f["isSupported"] == true)
    );
    Ok(())
}

#[test]
fn log_dir_receives_log_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let logs = dir.path().join("logs");

    rtfeat()
        .arg("--log-level")
        .arg("debug")
        .arg("--log-dir")
        .arg(&logs)
        .arg("probe")
        .assert()
        .success();

    let has_log = fs::read_dir(&logs)?
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
    assert!(has_log, "a rolling log file should be created");
    Ok(())
}
