//! Data models for raw assignments, catalogs, and resolved layouts.
//!
//! These structures are independent of parsing and resolution logic; the
//! parser produces them, the resolver consumes and emits them, and the
//! rendering and persistence collaborators read them.

pub mod assignment;
pub mod layout;
pub mod warning;

// Re-export all model types
pub use assignment::{BindingsDocument, ModifierRef, Rank, RawAssignment};
pub use layout::{DeviceLayout, LayoutModel, Placement, SlotRect, UnsupportedRecord};
pub use warning::Warning;
