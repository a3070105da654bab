//! End-to-end tests for the `refcard` inspection binary.

use std::process::Command;

mod fixtures;
use fixtures::{binds_document, write_binds_file};

/// Path to the refcard binary (set by cargo at compile time)
fn refcard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_refcard")
}

#[test]
fn resolves_a_file_against_the_embedded_catalogs() {
    let xml = binds_document(
        r#"<PrimaryFire><Primary Device="T16000M" Key="Joy_1" /></PrimaryFire>
           <PitchAxisRaw><Binding Device="T16000M" Key="Joy_YAxis" /></PitchAxisRaw>"#,
    );
    let (path, _dir) = write_binds_file(&xml);

    let output = Command::new(refcard_bin())
        .arg(&path)
        .output()
        .expect("failed to execute refcard");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Thrustmaster T.16000M"));
    assert!(stdout.contains("Primary Fire"));
    assert!(stdout.contains("Pitch"));
}

#[test]
fn json_output_is_machine_readable() {
    let xml = binds_document(
        r#"<PrimaryFire><Primary Device="T16000M" Key="Joy_1" /></PrimaryFire>"#,
    );
    let (path, _dir) = write_binds_file(&xml);

    let output = Command::new(refcard_bin())
        .arg(&path)
        .arg("--json")
        .output()
        .expect("failed to execute refcard");

    assert_eq!(output.status.code(), Some(0));
    let model: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(model["preset_name"], "Fixture");
    assert_eq!(model["per_device"][0]["device_id"], "T16000M");
    assert_eq!(model["per_device"][0]["placements"][0]["slot_key"], "Joy_1");
}

#[test]
fn unknown_devices_are_listed_not_fatal() {
    let xml = binds_document(
        r#"<PrimaryFire><Primary Device="UNKNOWN-999" Key="Btn_7" /></PrimaryFire>"#,
    );
    let (path, _dir) = write_binds_file(&xml);

    let output = Command::new(refcard_bin())
        .arg(&path)
        .output()
        .expect("failed to execute refcard");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("UNKNOWN-999"));
    assert!(stdout.contains("textual card"));
}

#[test]
fn malformed_document_exits_nonzero() {
    let (path, _dir) = write_binds_file("<Root PresetName='x'><Oops>");

    let output = Command::new(refcard_bin())
        .arg(&path)
        .output()
        .expect("failed to execute refcard");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed"));
}

#[test]
fn catalog_dir_overrides_embedded_tables() {
    let dir = tempfile::TempDir::new().expect("create temp dir");
    std::fs::write(
        dir.path().join("controls.json"),
        r#"{ "version": "test", "controls": [
            { "control_id": "PrimaryFire", "label": "Pew Pew", "category": "Ship" }
        ] }"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("devices.json"),
        r#"{ "version": "test", "devices": [
            { "device_id": "JoystickA", "display_name": "Joystick A", "slots": [
                { "slot_key": "Joy_1", "kind": "Digital", "x": 1, "y": 2, "width": 30 }
            ] }
        ] }"#,
    )
    .unwrap();

    let xml = binds_document(
        r#"<PrimaryFire><Primary Device="JoystickA" Key="Joy_1" /></PrimaryFire>"#,
    );
    let (path, _binds_dir) = write_binds_file(&xml);

    let output = Command::new(refcard_bin())
        .arg(&path)
        .arg("--catalog-dir")
        .arg(dir.path())
        .output()
        .expect("failed to execute refcard");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pew Pew"));
}
