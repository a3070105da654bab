//! Raw binding assignments as found in a bindings document.

use serde::{Deserialize, Serialize};

/// Which of a control's two possible bindings an assignment came from.
///
/// Rank never affects slot placement; two ranks of the same control landing
/// on the same slot collapse to a single placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    /// The control's first binding (also used for single-binding `Binding`
    /// elements, the format's spelling for axes).
    Primary,
    /// The control's optional second binding.
    Secondary,
}

/// A key that must be held together with the bound key.
///
/// Order is insertion order from the file. Modifiers do not affect slot
/// placement, only diagnostic display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierRef {
    /// Device the modifier key lives on.
    pub device_id: String,
    /// Device-native key code of the modifier.
    pub key: String,
}

/// One control's concrete device binding, exactly as the file states it.
///
/// The parser is catalog-agnostic: `control_id`, `device_id`, and `key` are
/// literal strings whose validity is decided later by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAssignment {
    /// Catalog key of the in-game action (the control element's name).
    pub control_id: String,
    /// Whether this came from a `Primary` or `Secondary` element.
    pub rank: Rank,
    /// Vendor/product identifier, or the literal keyboard device marker.
    pub device_id: String,
    /// Device-native key code. Empty means "unbound"; the resolver records a
    /// warning and drops such assignments.
    pub key: String,
    /// Keys to hold simultaneously, in document order.
    pub modifiers: Vec<ModifierRef>,
}

/// A parsed bindings document: header fields plus the ordered raw
/// assignments and any structural warnings the parser tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsDocument {
    /// Preset name from the root element (empty if absent).
    pub preset_name: String,
    /// Major version from the root element (0 if absent or malformed).
    pub major_version: u32,
    /// Minor version from the root element (0 if absent or malformed).
    pub minor_version: u32,
    /// All usable assignments, in document order.
    pub assignments: Vec<RawAssignment>,
    /// Structural anomalies the parser recovered from.
    pub warnings: Vec<super::Warning>,
}
