//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Refcard Engine";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "refcard";

/// Separator used when distinct labels share one slot.
pub const LABEL_SEPARATOR: &str = " / ";

/// Default slot height in pixels when the device catalog omits one.
pub const DEFAULT_SLOT_HEIGHT: u32 = 54;
