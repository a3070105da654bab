//! Parsing of bindings documents.
//!
//! The parser turns raw document bytes into an ordered set of raw
//! assignments. It is catalog-agnostic: whether a control or device is
//! recognized is decided later by the resolver.

pub mod bindings_xml;

// Re-export commonly used functions
pub use bindings_xml::parse_bindings;
