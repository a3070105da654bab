//! Non-fatal diagnostics collected while parsing and resolving.

use serde::{Deserialize, Serialize};

/// A recoverable anomaly in a bindings document.
///
/// Warnings are accumulated and returned alongside the layout model; they
/// are never raised as errors and never abort the pipeline. Callers decide
/// whether to log them, surface them to users, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Warning {
    /// The root element's preset name or version fields were missing or
    /// malformed; defaults were substituted.
    MalformedHeader {
        /// Which header field was affected.
        field: String,
    },
    /// A binding element had no `Device` attribute at all.
    MissingDevice {
        /// Control the binding belonged to.
        control_id: String,
    },
    /// A binding had an empty `Key` attribute (the file's way of saying
    /// "unbound"); it produces no placement.
    EmptyBinding {
        /// Control the binding belonged to.
        control_id: String,
        /// Device the empty binding named.
        device_id: String,
    },
    /// A control id or device key is not in the catalogs, so the binding
    /// cannot be displayed. `device_id` and `key` are present when the
    /// control was recognized but the key matched no slot on the device.
    UnsupportedControl {
        /// Control id from the file.
        control_id: String,
        /// Device the binding named, when the control itself was known.
        #[serde(skip_serializing_if = "Option::is_none")]
        device_id: Option<String>,
        /// Key that matched no slot, when the control itself was known.
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
    /// Two unrelated controls landed on the same device slot; their labels
    /// were merged into a single placement.
    SlotCollision {
        /// Device whose slot collided.
        device_id: String,
        /// The contested slot.
        slot_key: String,
        /// All distinct labels now sharing the slot, first-seen order.
        labels: Vec<String>,
    },
}
