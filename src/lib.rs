//! Refcard Engine Library
//!
//! This library turns a game's control-bindings file into a concrete,
//! human-labeled layout that can be stamped onto per-device template images.
//! It parses the bindings document, resolves each assignment against static
//! control and device catalogs, collapses redundant assignments, and emits a
//! deterministic, renderer-ready layout model per physical device.

// Module declarations
pub mod catalog;
pub mod constants;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod parser;
pub mod resolver;

pub use engine::resolve_document;
pub use error::ParseError;
