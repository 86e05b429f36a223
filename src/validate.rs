//! Validation of barcode input against its symbology's rule.
//!
//! [`validate`] is a pure function: it reads the static registry in [`crate::symbology`],
//! allocates the result, and touches nothing else. Calling it repeatedly with the same input
//! always yields the same result.

use serde::{Deserialize, Serialize};

use crate::error::BarcodeError;
use crate::symbology::{rule_for, Symbology};

/// Outcome of validating one piece of input.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum ValidationResult {
    Accepted,
    Rejected(String),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// The rejection message, or `None` if the input was accepted.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(reason) => Some(reason),
        }
    }

    /// Converts a rejection into [`BarcodeError::Validation`] so it can be propagated with `?`.
    pub fn into_result(self) -> Result<(), BarcodeError> {
        match self {
            ValidationResult::Accepted => Ok(()),
            ValidationResult::Rejected(reason) => Err(BarcodeError::Validation(reason)),
        }
    }
}

/// A piece of text paired with the symbology it should be encoded in.
///
/// Deserializes from either `{"text", "format"}` or the form field names
/// `{"barcodeText", "barcodeFormat"}`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct BarcodeRequest {
    #[serde(alias = "barcodeText")]
    pub text: String,
    #[serde(alias = "barcodeFormat")]
    pub format: Symbology,
}

impl BarcodeRequest {
    pub fn new(text: impl Into<String>, format: Symbology) -> Self {
        BarcodeRequest { text: text.into(), format }
    }

    pub fn validate(&self) -> ValidationResult {
        validate(&self.text, self.format)
    }
}

/// Validates `text` against the rule registered for `format`.
///
/// Symbologies without a rule accept any input, including the empty string.
///
/// # Arguments
///
/// * `text` - The raw input. It is not trimmed or normalized.
/// * `format` - The symbology the text is meant for.
///
/// # Example
///
/// ```rust
/// use barcodegen::symbology::Symbology;
/// use barcodegen::validate::{validate, ValidationResult};
///
/// assert_eq!(validate("1234567890123", Symbology::Ean13), ValidationResult::Accepted);
/// assert_eq!(
///     validate("abc-123", Symbology::Code39),
///     ValidationResult::Rejected("Invalid characters for Code 39".to_owned()),
/// );
/// ```
pub fn validate(text: &str, format: Symbology) -> ValidationResult {
    match rule_for(format) {
        Some(rule) if !rule.accepts(text) => ValidationResult::Rejected(rule.message().to_owned()),
        _ => ValidationResult::Accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_carries_rule_message() {
        for format in Symbology::ALL {
            let result = validate("not a barcode!", format);
            match format.rule() {
                Some(rule) => assert_eq!(result.reason(), Some(rule.message())),
                None => assert!(result.is_accepted()),
            }
        }
    }

    #[test]
    fn test_code128_accepts_anything() {
        for text in ["", "hello world", "héllo ✓ 条码", "\t\n", "lowercase-123"] {
            assert_eq!(validate(text, Symbology::Code128), ValidationResult::Accepted);
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let request = BarcodeRequest::new("12345678901", Symbology::Ean13);
        let first = request.validate();
        let second = request.validate();
        assert_eq!(first, second);
        assert_eq!(first.reason(), Some("EAN-13 requires 13 digits"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(validate("12", Symbology::Ean2).into_result(), Ok(()));
        assert_eq!(
            validate("1", Symbology::Ean2).into_result(),
            Err(BarcodeError::Validation("EAN-2 requires 2 digits".to_owned()))
        );
    }

    #[test]
    fn test_request_from_form_fields() {
        let request: BarcodeRequest =
            serde_json::from_str(r#"{"barcodeText": "ABC-123", "barcodeFormat": "code39"}"#).unwrap();
        assert_eq!(request, BarcodeRequest::new("ABC-123", Symbology::Code39));
        assert!(request.validate().is_accepted());

        let request: BarcodeRequest =
            serde_json::from_str(r#"{"barcodeText": "123456789012", "barcodeFormat": "CODE128"}"#).unwrap();
        assert_eq!(request, BarcodeRequest::new("123456789012", Symbology::Code128));
        assert_eq!(request.format, "CODE128".parse::<Symbology>().unwrap());

        let request: BarcodeRequest = serde_json::from_str(r#"{"text": "", "format": "pharmacode"}"#).unwrap();
        assert_eq!(request.validate().reason(), Some("Pharmacode requires 1-6 digits"));
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(validate("1", Symbology::Msi)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "accepted" }));

        let json = serde_json::to_value(validate("x", Symbology::Msi)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "rejected", "reason": "MSI requires only digits" }));
    }
}
