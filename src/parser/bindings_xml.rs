//! Bindings XML parser.
//!
//! A bindings document has one root element carrying `PresetName`,
//! `MajorVersion`, and `MinorVersion`, and any number of control elements
//! named by control identifier. A control element holds `Primary` and
//! optional `Secondary` children (or a single `Binding` child, the format's
//! spelling for axes), each with `Device` and `Key` attributes and optional
//! nested `Modifier` elements.
//!
//! Only structural unparseability is fatal. Everything else degrades to a
//! structural warning and the affected fragment is skipped.

use encoding_rs::{Encoding, UTF_8};

use crate::error::ParseError;
use crate::models::{BindingsDocument, ModifierRef, Rank, RawAssignment, Warning};

/// Parses the raw bytes of a bindings document.
///
/// Re-parsing byte-identical input yields structurally identical output;
/// there is no hidden state and no randomness.
pub fn parse_bindings(bytes: &[u8]) -> Result<BindingsDocument, ParseError> {
    let text = decode(bytes)?;
    let doc =
        roxmltree::Document::parse(&text).map_err(|e| ParseError::Syntax(e.to_string()))?;
    let root = doc.root_element();

    let mut warnings = Vec::new();
    let preset_name = match root.attribute("PresetName") {
        Some(name) => name.to_string(),
        None => {
            warnings.push(Warning::MalformedHeader {
                field: "PresetName".to_string(),
            });
            String::new()
        }
    };
    let major_version = version_field(&root, "MajorVersion", &mut warnings);
    let minor_version = version_field(&root, "MinorVersion", &mut warnings);

    let mut assignments = Vec::new();
    for control in root.children().filter(roxmltree::Node::is_element) {
        let control_id = control.tag_name().name();
        for binding in control.children().filter(roxmltree::Node::is_element) {
            let rank = match binding.tag_name().name() {
                // `Binding` is the single-binding spelling used for axes.
                "Primary" | "Binding" => Rank::Primary,
                "Secondary" => Rank::Secondary,
                _ => continue,
            };
            if let Some(assignment) =
                read_assignment(control_id, rank, &binding, &mut warnings)
            {
                assignments.push(assignment);
            }
        }
    }

    tracing::debug!(
        preset = %preset_name,
        assignments = assignments.len(),
        warnings = warnings.len(),
        "parsed bindings document"
    );

    Ok(BindingsDocument {
        preset_name,
        major_version,
        minor_version,
        assignments,
        warnings,
    })
}

/// Placeholder device id the format writes for deliberately unbound slots.
const NO_DEVICE: &str = "{NoDevice}";

fn read_assignment(
    control_id: &str,
    rank: Rank,
    binding: &roxmltree::Node<'_, '_>,
    warnings: &mut Vec<Warning>,
) -> Option<RawAssignment> {
    let device_id = match binding.attribute("Device") {
        Some(device) => device,
        None => {
            warnings.push(Warning::MissingDevice {
                control_id: control_id.to_string(),
            });
            return None;
        }
    };
    if device_id == NO_DEVICE {
        return None;
    }

    // A missing Key is the same as an empty one: "unbound".
    let key = normalize_key(binding.attribute("Key").unwrap_or(""));

    let mut modifiers: Vec<ModifierRef> = binding
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Modifier")
        .filter_map(|m| {
            let device = m.attribute("Device")?;
            let mod_key = m.attribute("Key")?;
            Some(ModifierRef {
                device_id: device.to_string(),
                key: mod_key.to_string(),
            })
        })
        .collect();

    // Hold-button actions behave like a modifier held on the same device.
    if binding
        .children()
        .any(|n| n.is_element() && n.tag_name().name() == "Hold")
    {
        modifiers.push(ModifierRef {
            device_id: device_id.to_string(),
            key: "HOLD".to_string(),
        });
    }

    Some(RawAssignment {
        control_id: control_id.to_string(),
        rank,
        device_id: device_id.to_string(),
        key,
        modifiers,
    })
}

/// Strips the direction prefix the format adds when a digital action is
/// bound to one direction of an analogue axis.
fn normalize_key(key: &str) -> String {
    key.strip_prefix("Neg_")
        .or_else(|| key.strip_prefix("Pos_"))
        .unwrap_or(key)
        .to_string()
}

fn version_field(
    root: &roxmltree::Node<'_, '_>,
    field: &str,
    warnings: &mut Vec<Warning>,
) -> u32 {
    match root.attribute(field).map(str::parse::<u32>) {
        Some(Ok(value)) => value,
        _ => {
            warnings.push(Warning::MalformedHeader {
                field: field.to_string(),
            });
            0
        }
    }
}

/// Decodes document bytes to text, honoring a BOM first and a declared
/// `encoding=` label second, defaulting to UTF-8.
///
/// Decoding is lossless: any byte sequence invalid under the chosen
/// encoding is a fatal [`ParseError::Encoding`], never a replacement
/// character silently embedded in a label.
fn decode(bytes: &[u8]) -> Result<String, ParseError> {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => declared_encoding(bytes).unwrap_or(UTF_8),
    };
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(ParseError::Encoding {
            encoding: actual.name().to_string(),
            detail: "document contains byte sequences invalid in this encoding".to_string(),
        });
    }
    Ok(text.into_owned())
}

/// Extracts the `encoding=` label from an XML declaration, if any.
///
/// The declaration itself is ASCII in every encoding this sniff can apply
/// to (UTF-16 documents carry a BOM and never reach here), so a byte scan
/// of the prologue is sufficient.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let prologue = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(prologue);
    let decl_start = text.find("<?xml")?;
    let decl_end = text[decl_start..].find("?>")? + decl_start;
    let decl = &text[decl_start..decl_end];
    let label_at = decl.find("encoding")?;
    let rest = &decl[label_at + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[1..];
    let end = rest.find(quote)?;
    Encoding::for_label(rest[..end].as_bytes())
}
