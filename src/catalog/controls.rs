//! Control catalog: in-game actions and their display labels.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One in-game action the engine knows how to label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEntry {
    /// Catalog key, matching the control element name in bindings files
    /// (e.g. `PrimaryFire`).
    pub control_id: String,
    /// Human-readable label stamped onto the card (e.g. "Primary Fire").
    pub label: String,
    /// Semantic category (e.g. "Ship", "Galaxy map").
    pub category: String,
    /// Controls sharing a group and resolving to the same device slot are
    /// semantically identical and collapse to a single label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redundancy_group: Option<String>,
}

/// Catalog file schema.
#[derive(Debug, Deserialize)]
struct ControlTable {
    version: String,
    controls: Vec<ControlEntry>,
}

/// Read-only control catalog with O(1) lookup by control id.
#[derive(Debug, Clone)]
pub struct ControlCatalog {
    entries: Vec<ControlEntry>,
    lookup: HashMap<String, usize>,
}

impl ControlCatalog {
    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let json_data = include_str!("controls.json");
        Self::from_json(json_data).context("failed to parse embedded controls.json")
    }

    /// Loads a catalog from an external data file (administrator-supplied).
    pub fn load_file(path: &Path) -> Result<Self> {
        let json_data = fs::read_to_string(path)
            .with_context(|| format!("failed to read control catalog: {}", path.display()))?;
        Self::from_json(&json_data)
            .with_context(|| format!("failed to parse control catalog: {}", path.display()))
    }

    fn from_json(json_data: &str) -> Result<Self> {
        let table: ControlTable = serde_json::from_str(json_data).map_err(CatalogError::Data)?;
        tracing::debug!(version = %table.version, count = table.controls.len(), "loaded control catalog");
        Ok(Self::from_entries(table.controls)?)
    }

    /// Builds a catalog from explicit entries.
    pub fn from_entries(entries: Vec<ControlEntry>) -> Result<Self, CatalogError> {
        let mut lookup = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if lookup.insert(entry.control_id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId {
                    kind: "control",
                    id: entry.control_id.clone(),
                });
            }
        }
        Ok(Self { entries, lookup })
    }

    /// Gets a control entry by id.
    #[must_use]
    pub fn get(&self, control_id: &str) -> Option<&ControlEntry> {
        let idx = self.lookup.get(control_id)?;
        self.entries.get(*idx)
    }

    /// All entries, in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[ControlEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, label: &str, group: Option<&str>) -> ControlEntry {
        ControlEntry {
            control_id: id.to_string(),
            label: label.to_string(),
            category: "Ship".to_string(),
            redundancy_group: group.map(str::to_string),
        }
    }

    #[test]
    fn embedded_catalog_has_core_controls() {
        let catalog = ControlCatalog::embedded().unwrap();
        let fire = catalog.get("PrimaryFire").unwrap();
        assert_eq!(fire.label, "Primary Fire");
        assert!(catalog.get("PitchAxisRaw").is_some());
        assert!(catalog.get("NotARealControl").is_none());
    }

    #[test]
    fn redundancy_groups_pair_map_and_ship_axes() {
        let catalog = ControlCatalog::embedded().unwrap();
        let ship = catalog.get("PitchAxisRaw").unwrap();
        let map = catalog.get("CamPitchAxis").unwrap();
        assert!(ship.redundancy_group.is_some());
        assert_eq!(ship.redundancy_group, map.redundancy_group);
    }

    #[test]
    fn duplicate_control_id_is_rejected() {
        let err = ControlCatalog::from_entries(vec![
            entry("A", "A", None),
            entry("A", "A again", None),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "control", .. }));
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = ControlCatalog::from_entries(vec![entry("PitchAxis", "Pitch", Some("pitch"))])
            .unwrap();
        assert!(catalog.get("PitchAxis").is_some());
        assert!(catalog.get("pitchaxis").is_none());
    }
}
