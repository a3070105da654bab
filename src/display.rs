//! Key-code display translation for diagnostic output.
//!
//! Device key codes are verbose (`Key_LeftShift`, `Joy_POV1Up`). This module
//! maps the common keyboard codes to compact symbols and strips the `Key_`
//! prefix from the rest, for use in diagnostic listings and by the rendering
//! collaborator when formatting modifier chains. Slot placement never
//! depends on these translations.

use crate::models::ModifierRef;

/// Translates a device key code to a compact human label.
///
/// Unknown `Key_` codes fall back to the code with the prefix stripped;
/// non-keyboard codes (e.g. `Joy_5`) pass through unchanged.
#[must_use]
pub fn key_label(key: &str) -> String {
    let translated = match key {
        "Key_LeftShift" | "Key_RightShift" => "\u{21e7}",
        "Key_LeftAlt" | "Key_RightAlt" => "Alt",
        "Key_LeftControl" | "Key_RightControl" => "Ctrl",
        "Key_LeftBracket" => "[",
        "Key_RightBracket" => "]",
        "Key_SemiColon" => ";",
        "Key_Apostrophe" => "'",
        "Key_BackSlash" => "\\",
        "Key_Comma" => ",",
        "Key_Period" => ".",
        "Key_Slash" => "/",
        "Key_Equals" => "=",
        "Key_Minus" => "-",
        "Key_Grave" => "`",
        "Key_Tab" => "\u{21e5}",
        "Key_CapsLock" => "\u{21ea}",
        "Key_Return" => "\u{21b5}",
        "Key_Backspace" => "\u{232b}",
        "Key_Space" => "\u{2423}",
        "Key_Escape" => "Esc",
        "Key_Delete" => "Del",
        "Key_Insert" => "Ins",
        "Key_Home" => "Home",
        "Key_End" => "End",
        "Key_PageUp" => "PgUp",
        "Key_PageDown" => "PgDn",
        "Key_UpArrow" => "\u{2191}",
        "Key_DownArrow" => "\u{2193}",
        "Key_LeftArrow" => "\u{2190}",
        "Key_RightArrow" => "\u{2192}",
        "Key_Numpad_Divide" => "Num/",
        "Key_Numpad_Multiply" => "Num*",
        "Key_Numpad_Subtract" => "Num-",
        "Key_Numpad_Add" => "Num+",
        "Key_Numpad_Enter" => "Num\u{21b5}",
        "Key_Numpad_Decimal" => "Num.",
        "Key_NumLock" => "NumLk",
        "Key_ScrollLock" => "ScrLk",
        "Key_PrintScreen" => "PrtSc",
        _ => "",
    };
    if !translated.is_empty() {
        return translated.to_string();
    }
    if let Some(numpad) = key.strip_prefix("Key_Numpad_") {
        return format!("Num{numpad}");
    }
    key.strip_prefix("Key_").unwrap_or(key).to_string()
}

/// Formats a modifier chain plus key for diagnostics, e.g. `"⇧+Joy_1"`.
#[must_use]
pub fn chord_label(modifiers: &[ModifierRef], key: &str) -> String {
    let mut parts: Vec<String> = modifiers.iter().map(|m| key_label(&m.key)).collect();
    parts.push(key_label(key));
    parts.join("+")
}
