//! The resolved layout model handed to the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::catalog::SlotKind;

use super::Warning;

/// Pixel rectangle of a slot on a device's template image.
///
/// Copied from the device catalog into each placement so the renderer needs
/// no second catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRect {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Box width in pixels.
    pub width: u32,
    /// Box height in pixels.
    pub height: u32,
}

/// One labeled slot on a device template, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The slot this text belongs to. Unique within one device layout.
    pub slot_key: String,
    /// Display text: a control label, or several labels joined when
    /// unrelated controls share the slot.
    pub text: String,
    /// Digital or analogue, from the catalog slot.
    pub kind: SlotKind,
    /// Where to draw, from the catalog slot.
    pub rect: SlotRect,
}

/// All placements for one physical device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceLayout {
    /// Catalog identifier of the device.
    pub device_id: String,
    /// Human-readable device name from the catalog.
    pub display_name: String,
    /// Labeled slots in first-encountered order. Slot keys are pairwise
    /// distinct; collisions merge in place rather than appending.
    pub placements: Vec<Placement>,
}

impl DeviceLayout {
    /// Finds a placement by slot key.
    #[must_use]
    pub fn placement(&self, slot_key: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot_key == slot_key)
    }
}

/// A binding that referenced a device or key absent from the catalogs.
///
/// Kept verbatim for diagnostic display ("this upload used devices with no
/// visual template"); never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedRecord {
    /// Control id from the file, verbatim.
    pub control_id: String,
    /// Device id from the file, verbatim.
    pub device_id: String,
    /// Key from the file, verbatim.
    pub key: String,
}

/// The engine's output: one instance per processed bindings file.
///
/// Everything here is created fresh per invocation and owned by the caller;
/// the engine keeps no state between files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LayoutModel {
    /// Preset name the file declared.
    pub preset_name: String,
    /// Per-device layouts, in the order devices were first encountered.
    pub per_device: Vec<DeviceLayout>,
    /// Bindings to devices this installation has no template for.
    pub unsupported: Vec<UnsupportedRecord>,
    /// Every anomaly recovered during parsing and resolution, in order.
    pub warnings: Vec<Warning>,
}

impl LayoutModel {
    /// Finds a device layout by id.
    #[must_use]
    pub fn device(&self, device_id: &str) -> Option<&DeviceLayout> {
        self.per_device.iter().find(|d| d.device_id == device_id)
    }

    /// Display names of all devices with placements, in encounter order.
    #[must_use]
    pub fn device_names(&self) -> Vec<&str> {
        self.per_device
            .iter()
            .map(|d| d.display_name.as_str())
            .collect()
    }

    /// True when the file resolved to no drawable device at all.
    ///
    /// This is a valid, non-error outcome: the caller falls back to a
    /// textual listing instead of template images.
    #[must_use]
    pub fn is_template_free(&self) -> bool {
        self.per_device.is_empty()
    }
}
