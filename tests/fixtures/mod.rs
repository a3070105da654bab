//! Shared fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::PathBuf;

use tempfile::TempDir;

use refcard::catalog::{
    CatalogSet, ControlCatalog, ControlEntry, DeviceCatalog, DeviceEntry, Slot, SlotKind,
};

/// A small hand-built catalog pair exercising every resolution rule:
/// one known device with digital and analogue slots, controls with and
/// without redundancy groups.
#[must_use]
pub fn test_catalogs() -> CatalogSet {
    let controls = ControlCatalog::from_entries(vec![
        control("PrimaryFire", "Primary Fire", None),
        control("SecondaryFire", "Secondary Fire", None),
        control("PitchAxis", "Pitch", Some("pitch")),
        control("GalMapPitchAxis", "Map Pitch", Some("pitch")),
        control("YawAxis", "Yaw", Some("yaw")),
        control("LandingGearToggle", "Landing Gear", None),
    ])
    .expect("control fixture");

    let devices = DeviceCatalog::from_entries(vec![DeviceEntry {
        device_id: "JoystickA".to_string(),
        display_name: "Joystick A".to_string(),
        slots: vec![
            slot("Joy_1", SlotKind::Digital, 100, 200, 400),
            slot("Joy_2", SlotKind::Digital, 100, 300, 400),
            slot("Joy_3", SlotKind::Digital, 100, 400, 400),
            slot("Joy_YAxis", SlotKind::Analogue, 600, 200, 400),
            slot("Joy_RZAxis", SlotKind::Analogue, 600, 300, 400),
        ],
    }])
    .expect("device fixture");

    CatalogSet { controls, devices }
}

fn control(id: &str, label: &str, group: Option<&str>) -> ControlEntry {
    ControlEntry {
        control_id: id.to_string(),
        label: label.to_string(),
        category: "Ship".to_string(),
        redundancy_group: group.map(str::to_string),
    }
}

fn slot(key: &str, kind: SlotKind, x: i32, y: i32, width: u32) -> Slot {
    Slot {
        slot_key: key.to_string(),
        kind,
        x,
        y,
        width,
        height: None,
    }
}

/// Wraps control elements in a well-formed bindings document.
#[must_use]
pub fn binds_document(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Root PresetName=\"Fixture\" MajorVersion=\"4\" MinorVersion=\"0\">\n{body}\n</Root>\n"
    )
}

/// Writes a bindings document to a temp file and returns its path.
///
/// The caller must keep the returned `TempDir` alive for the duration of
/// the test.
#[must_use]
pub fn write_binds_file(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("fixture.binds");
    std::fs::write(&path, content).expect("write binds file");
    (path, dir)
}
