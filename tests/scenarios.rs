use barcodegen::error::{BarcodeError, RenderError};
use barcodegen::graphic::{Rect, Renderer, VectorGraphic};
use barcodegen::helper::save_svg;
use barcodegen::session::BarcodeSession;
use barcodegen::symbology::Symbology;
use barcodegen::validate::{validate, BarcodeRequest, ValidationResult};

fn rejected(reason: &str) -> ValidationResult {
    ValidationResult::Rejected(reason.to_owned())
}

#[test]
fn test_end_to_end_validation() {
    assert_eq!(validate("12345678901", Symbology::Ean13), rejected("EAN-13 requires 13 digits"));
    assert_eq!(validate("1234567890123", Symbology::Ean13), ValidationResult::Accepted);
    assert_eq!(validate("ABC-123", Symbology::Code39), ValidationResult::Accepted);
    assert_eq!(validate("abc-123", Symbology::Code39), rejected("Invalid characters for Code 39"));
    assert_eq!(validate("", Symbology::Pharmacode), rejected("Pharmacode requires 1-6 digits"));
    assert_eq!(validate("hello world", Symbology::Code128), ValidationResult::Accepted);
}

#[test]
fn test_every_format_from_identifier() {
    let accepted = [
        ("code128", ""),
        ("ean13", "4006381333931"),
        ("ean8", "96385074"),
        ("ean5", "54495"),
        ("ean2", "53"),
        ("upc", "036000291452"),
        ("code39", "WIKIPEDIA"),
        ("itf14", "15400141288763"),
        ("msi", "1234567"),
        ("pharmacode", "131070"),
    ];
    for (id, text) in accepted {
        let format: Symbology = id.parse().unwrap();
        assert!(validate(text, format).is_accepted(), "{id} should accept {text:?}");
    }
}

/// Draws a bar for every `1` in the text and refuses a trailing `0` for EAN-13.
struct BinaryRenderer;

impl Renderer for BinaryRenderer {
    fn render(&self, text: &str, format: Symbology) -> Result<VectorGraphic, RenderError> {
        if format == Symbology::Ean13 && text.ends_with('0') {
            return Err(RenderError::new("\"4006381333930\" is not a valid input for EAN13"));
        }
        let mut graphic = VectorGraphic::new(u32::try_from(text.len()).unwrap(), 20);
        for (x, _) in text.char_indices().filter(|(_, c)| *c == '1') {
            graphic.push_rect(Rect::new(u32::try_from(x).unwrap(), 0, 1, 20));
        }
        Ok(graphic)
    }
}

#[test]
fn test_session_submit_and_save() {
    let mut session = BarcodeSession::new(BinaryRenderer);
    session.initialize().unwrap();

    let err = session.submit(&BarcodeRequest::new("4006381333930", Symbology::Ean13)).unwrap_err();
    assert!(matches!(err, BarcodeError::Rendering(_)));
    assert_eq!(
        session.error(),
        Some("Error generating barcode: \"4006381333930\" is not a valid input for EAN13")
    );

    session.submit(&BarcodeRequest::new("10110", Symbology::Ean5)).unwrap();
    assert_eq!(session.error(), None);

    let dir = tempfile::tempdir().unwrap();
    let export = session.export().unwrap();
    let path = save_svg(&export, dir.path().to_str()).unwrap();

    assert_eq!(path.file_name().unwrap(), "barcode.svg");
    let svg = std::fs::read_to_string(path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 5 20\""));
    assert!(svg.contains("d=\"M0,0h1v20h-1z M2,0h1v20h-1z M3,0h1v20h-1z\""));
}
