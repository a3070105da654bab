//! Fatal error types for the engine.
//!
//! Only structural unparseability aborts processing. Every semantic anomaly
//! (unknown control, unknown device, empty key, slot collision) is recovered
//! locally and reported through the warnings collection on the layout model,
//! never through these types.

use thiserror::Error;

/// A bindings document could not be read at all.
///
/// This is the only error that aborts the pipeline; no partial layout is
/// produced when it fires.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document bytes could not be decoded under the declared or sniffed
    /// text encoding.
    #[error("undecodable text ({encoding} declared): {detail}")]
    Encoding {
        /// Name of the encoding the decode was attempted with.
        encoding: String,
        /// What went wrong.
        detail: String,
    },

    /// The document is not well-formed markup.
    #[error("malformed bindings document: {0}")]
    Syntax(String),
}

/// A static catalog table failed to load.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog data was not valid JSON for the expected schema.
    #[error("invalid catalog data: {0}")]
    Data(#[from] serde_json::Error),

    /// Two entries claimed the same identifier.
    #[error("duplicate {kind} id '{id}' in catalog")]
    DuplicateId {
        /// What kind of entry collided ("control", "device", "slot").
        kind: &'static str,
        /// The identifier that appeared twice.
        id: String,
    },

    /// A device declared the same slot key twice.
    #[error("device '{device_id}' declares slot '{slot_key}' more than once")]
    DuplicateSlot {
        /// Device whose slot list is inconsistent.
        device_id: String,
        /// The repeated slot key.
        slot_key: String,
    },
}
