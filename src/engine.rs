//! One-call pipeline: document bytes in, layout model out.

use crate::catalog::CatalogSet;
use crate::error::ParseError;
use crate::models::LayoutModel;
use crate::parser::parse_bindings;
use crate::resolver::resolve;

/// Parses a bindings document and resolves it against a catalog snapshot.
///
/// This is the call the hosting web layer makes once per uploaded file. It
/// is a pure function of `(bytes, catalogs)`: no I/O, no shared mutable
/// state, terminates in time linear in input size. The only failure is a
/// structurally unparseable document; every semantic anomaly comes back as
/// a warning or unsupported record on the model.
pub fn resolve_document(bytes: &[u8], catalogs: &CatalogSet) -> Result<LayoutModel, ParseError> {
    let document = parse_bindings(bytes)?;
    Ok(resolve(&document, catalogs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_with_embedded_catalogs() {
        let xml = r#"<Root PresetName="Smoke" MajorVersion="4" MinorVersion="0">
            <PrimaryFire><Primary Device="T16000M" Key="Joy_1" /></PrimaryFire>
            <PitchAxisRaw><Binding Device="T16000M" Key="Joy_YAxis" /></PitchAxisRaw>
            <ThrottleAxis><Binding Device="SomeExoticThrottle" Key="Joy_ZAxis" /></ThrottleAxis>
        </Root>"#;
        let catalogs = CatalogSet::embedded().unwrap();
        let model = resolve_document(xml.as_bytes(), &catalogs).unwrap();

        assert_eq!(model.preset_name, "Smoke");
        let stick = model.device("T16000M").unwrap();
        assert_eq!(stick.placements.len(), 2);
        assert_eq!(model.unsupported.len(), 1);
        assert_eq!(model.unsupported[0].device_id, "SomeExoticThrottle");
    }

    #[test]
    fn file_with_only_unknown_devices_still_succeeds() {
        let xml = r#"<Root PresetName="Pad" MajorVersion="4" MinorVersion="0">
            <PrimaryFire><Primary Device="GamePad" Key="Pad_A" /></PrimaryFire>
        </Root>"#;
        let catalogs = CatalogSet::embedded().unwrap();
        let model = resolve_document(xml.as_bytes(), &catalogs).unwrap();
        assert!(model.is_template_free());
        assert_eq!(model.unsupported.len(), 1);
        assert!(model.warnings.is_empty());
    }

    #[test]
    fn layout_model_serializes_stably() {
        let xml = r#"<Root PresetName="Ser" MajorVersion="4" MinorVersion="0">
            <PrimaryFire><Primary Device="T16000M" Key="Joy_1" /></PrimaryFire>
        </Root>"#;
        let catalogs = CatalogSet::embedded().unwrap();
        let model = resolve_document(xml.as_bytes(), &catalogs).unwrap();
        let first = serde_json::to_string(&model).unwrap();
        let second = serde_json::to_string(&model).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"Joy_1\""));
    }
}
