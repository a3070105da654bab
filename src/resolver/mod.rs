//! Resolution engine: raw assignments + catalogs -> layout model.
//!
//! Resolution is a pure, synchronous function of the parsed document and a
//! catalog snapshot. Each invocation builds its own layout model and touches
//! only read-only catalog data, so arbitrarily many resolutions may run in
//! parallel without locks.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::catalog::CatalogSet;
use crate::constants::LABEL_SEPARATOR;
use crate::models::{
    BindingsDocument, DeviceLayout, LayoutModel, Placement, UnsupportedRecord, Warning,
};

/// Scratch state for one occupied slot while resolution is in flight.
///
/// Tracks which controls contributed so later assignments targeting the same
/// slot can be collapsed (same control, or shared redundancy group) or merged
/// (unrelated controls).
struct SlotState {
    control_ids: Vec<String>,
    groups: Vec<Option<String>>,
    labels: Vec<String>,
    placement_idx: usize,
}

impl SlotState {
    fn has_control(&self, control_id: &str) -> bool {
        self.control_ids.iter().any(|c| c == control_id)
    }

    fn shares_group(&self, group: Option<&String>) -> bool {
        let Some(group) = group else { return false };
        self.groups
            .iter()
            .any(|g| g.as_ref().is_some_and(|existing| existing == group))
    }

    /// Labels are distinct case-insensitively on trimmed text; the
    /// first-seen spelling wins.
    fn has_label(&self, label: &str) -> bool {
        let needle = label.trim().to_lowercase();
        self.labels.iter().any(|l| l.trim().to_lowercase() == needle)
    }
}

/// Per-device bookkeeping during resolution.
struct DeviceState {
    layout_idx: usize,
    slots: HashMap<String, SlotState>,
}

/// Resolves a parsed bindings document against a catalog snapshot.
///
/// Never fails: every semantic anomaly is recovered by a documented
/// drop/merge/record rule and reported through the model's warnings. A file
/// that references no supported device still succeeds, with an empty
/// `per_device` and a populated `unsupported` list.
#[must_use]
pub fn resolve(document: &BindingsDocument, catalogs: &CatalogSet) -> LayoutModel {
    let mut model = LayoutModel {
        preset_name: document.preset_name.clone(),
        warnings: document.warnings.clone(),
        ..LayoutModel::default()
    };
    let mut devices: HashMap<String, DeviceState> = HashMap::new();

    for assignment in &document.assignments {
        // 1. An empty key means "unbound": report and drop.
        if assignment.key.is_empty() {
            model.warnings.push(Warning::EmptyBinding {
                control_id: assignment.control_id.clone(),
                device_id: assignment.device_id.clone(),
            });
            continue;
        }

        // 2. Unknown action: the binding is real but we decline to display it.
        let Some(control) = catalogs.controls.get(&assignment.control_id) else {
            model.warnings.push(Warning::UnsupportedControl {
                control_id: assignment.control_id.clone(),
                device_id: None,
                key: None,
            });
            continue;
        };

        // 3. Unknown hardware: keep the binding verbatim for diagnostics.
        let Some(device) = catalogs.devices.get(&assignment.device_id) else {
            model.unsupported.push(UnsupportedRecord {
                control_id: assignment.control_id.clone(),
                device_id: assignment.device_id.clone(),
                key: assignment.key.clone(),
            });
            continue;
        };

        // 4. Key codes join the slot template directly by literal match.
        let Some(slot) = device.slot(&assignment.key) else {
            model.warnings.push(Warning::UnsupportedControl {
                control_id: assignment.control_id.clone(),
                device_id: Some(assignment.device_id.clone()),
                key: Some(assignment.key.clone()),
            });
            continue;
        };

        // 5-7. Place, or collide with whatever already owns the slot.
        let device_state = match devices.entry(assignment.device_id.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                model.per_device.push(DeviceLayout {
                    device_id: device.device_id.clone(),
                    display_name: device.display_name.clone(),
                    placements: Vec::new(),
                });
                entry.insert(DeviceState {
                    layout_idx: model.per_device.len() - 1,
                    slots: HashMap::new(),
                })
            }
        };
        let layout_idx = device_state.layout_idx;

        match device_state.slots.entry(assignment.key.clone()) {
            Entry::Vacant(entry) => {
                let placements = &mut model.per_device[layout_idx].placements;
                placements.push(Placement {
                    slot_key: slot.slot_key.clone(),
                    text: control.label.clone(),
                    kind: slot.kind,
                    rect: slot.rect(),
                });
                entry.insert(SlotState {
                    control_ids: vec![control.control_id.clone()],
                    groups: vec![control.redundancy_group.clone()],
                    labels: vec![control.label.clone()],
                    placement_idx: placements.len() - 1,
                });
            }
            Entry::Occupied(entry) => {
                let state = entry.into_mut();
                // The same control twice (any rank mix) is one placement.
                if state.has_control(&control.control_id) {
                    continue;
                }
                // A shared redundancy group means the controls are
                // semantically identical: keep the first, absorb the rest
                // silently. Expected de-noising, not a conflict.
                if state.shares_group(control.redundancy_group.as_ref()) {
                    state.control_ids.push(control.control_id.clone());
                    state.groups.push(control.redundancy_group.clone());
                    continue;
                }
                state.control_ids.push(control.control_id.clone());
                state.groups.push(control.redundancy_group.clone());
                // Unrelated controls on one slot: merge labels in first-seen
                // order and say so. The slot still renders exactly once.
                if !state.has_label(&control.label) {
                    state.labels.push(control.label.clone());
                    model.per_device[layout_idx].placements[state.placement_idx].text =
                        state.labels.join(LABEL_SEPARATOR);
                }
                model.warnings.push(Warning::SlotCollision {
                    device_id: assignment.device_id.clone(),
                    slot_key: slot.slot_key.clone(),
                    labels: state.labels.clone(),
                });
            }
        }
    }

    tracing::debug!(
        devices = model.per_device.len(),
        unsupported = model.unsupported.len(),
        warnings = model.warnings.len(),
        "resolved layout model"
    );
    model
}
