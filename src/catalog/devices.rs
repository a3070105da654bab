//! Device catalog: physical input devices and their slot templates.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SLOT_HEIGHT;
use crate::error::CatalogError;
use crate::models::SlotRect;

/// Whether a slot is a button or an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// A button or switch position.
    Digital,
    /// An axis, slider, or rotary.
    Analogue,
}

/// A named, positioned region on a device's template image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Join key between a binding's key code and this template region.
    pub slot_key: String,
    /// Digital or analogue.
    pub kind: SlotKind,
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Box width in pixels.
    pub width: u32,
    /// Box height in pixels; most boxes use the default and omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Slot {
    /// Pixel rectangle of this slot, with the default height applied.
    #[must_use]
    pub fn rect(&self) -> SlotRect {
        SlotRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height.unwrap_or(DEFAULT_SLOT_HEIGHT),
        }
    }
}

/// One physical device the engine has a visual template for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    /// Stable identifier matching the `Device` attribute in bindings files.
    pub device_id: String,
    /// Human-readable name shown on cards and device lists.
    pub display_name: String,
    /// Ordered slot template. Slot keys are unique within the device.
    pub slots: Vec<Slot>,
}

impl DeviceEntry {
    /// Finds a slot by key.
    #[must_use]
    pub fn slot(&self, slot_key: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.slot_key == slot_key)
    }
}

/// Catalog file schema.
#[derive(Debug, Deserialize)]
struct DeviceTable {
    version: String,
    devices: Vec<DeviceEntry>,
}

/// Read-only device catalog with O(1) lookup by device id.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    entries: Vec<DeviceEntry>,
    lookup: HashMap<String, usize>,
}

impl DeviceCatalog {
    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let json_data = include_str!("devices.json");
        Self::from_json(json_data).context("failed to parse embedded devices.json")
    }

    /// Loads a catalog from an external data file (administrator-supplied).
    pub fn load_file(path: &Path) -> Result<Self> {
        let json_data = fs::read_to_string(path)
            .with_context(|| format!("failed to read device catalog: {}", path.display()))?;
        Self::from_json(&json_data)
            .with_context(|| format!("failed to parse device catalog: {}", path.display()))
    }

    fn from_json(json_data: &str) -> Result<Self> {
        let table: DeviceTable = serde_json::from_str(json_data).map_err(CatalogError::Data)?;
        tracing::debug!(version = %table.version, count = table.devices.len(), "loaded device catalog");
        Ok(Self::from_entries(table.devices)?)
    }

    /// Builds a catalog from explicit entries, validating uniqueness of
    /// device ids and per-device slot keys.
    pub fn from_entries(entries: Vec<DeviceEntry>) -> Result<Self, CatalogError> {
        let mut lookup = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if lookup.insert(entry.device_id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "device",
                    id: entry.device_id.clone(),
                });
            }
            let mut seen = HashSet::with_capacity(entry.slots.len());
            for slot in &entry.slots {
                if !seen.insert(slot.slot_key.as_str()) {
                    return Err(CatalogError::DuplicateSlot {
                        device_id: entry.device_id.clone(),
                        slot_key: slot.slot_key.clone(),
                    });
                }
            }
        }
        Ok(Self { entries, lookup })
    }

    /// Gets a device entry by id.
    #[must_use]
    pub fn get(&self, device_id: &str) -> Option<&DeviceEntry> {
        let idx = self.lookup.get(device_id)?;
        self.entries.get(*idx)
    }

    /// All entries, in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    /// Number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
