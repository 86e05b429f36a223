#![forbid(unsafe_code)]
//! Barcode symbologies and their input rules.
//!
//! This module owns the closed set of supported symbologies and the registry that maps each of
//! them to at most one [`ValidationRule`]. The table is static and read-only, so it can be
//! consulted from any thread without synchronization.
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSymbologyError;

/// A barcode encoding scheme.
///
/// The set is closed: every symbology the library knows about is listed here, and the registry
/// ([`rule_for`]) is an exhaustive `match` over it.
///
/// # Example
///
/// ```rust
/// use barcodegen::symbology::Symbology;
///
/// let format: Symbology = "ean13".parse().unwrap();
/// assert_eq!(format, Symbology::Ean13);
/// assert_eq!(format.label(), "EAN-13");
/// assert_eq!(format.to_string(), "ean13");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Symbology {
    #[default]
    Code128,
    Ean13,
    Ean8,
    Ean5,
    Ean2,
    Upc,
    Code39,
    Itf14,
    Msi,
    Pharmacode,
}

impl Symbology {
    /// Every supported symbology, in selector order.
    pub const ALL: [Symbology; 10] = [
        Symbology::Code128,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Ean5,
        Symbology::Ean2,
        Symbology::Upc,
        Symbology::Code39,
        Symbology::Itf14,
        Symbology::Msi,
        Symbology::Pharmacode,
    ];

    /// Returns the lowercase identifier used for parsing and serialization.
    pub fn id(self) -> &'static str {
        match self {
            Symbology::Code128 => "code128",
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::Ean5 => "ean5",
            Symbology::Ean2 => "ean2",
            Symbology::Upc => "upc",
            Symbology::Code39 => "code39",
            Symbology::Itf14 => "itf14",
            Symbology::Msi => "msi",
            Symbology::Pharmacode => "pharmacode",
        }
    }

    /// Returns the human-readable name shown next to the identifier.
    pub fn label(self) -> &'static str {
        match self {
            Symbology::Code128 => "Code 128",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::Ean5 => "EAN-5",
            Symbology::Ean2 => "EAN-2",
            Symbology::Upc => "UPC-A",
            Symbology::Code39 => "Code 39",
            Symbology::Itf14 => "ITF-14",
            Symbology::Msi => "MSI",
            Symbology::Pharmacode => "Pharmacode",
        }
    }

    /// Returns the rule this symbology imposes on its input, if any.
    ///
    /// Shorthand for [`rule_for`].
    pub fn rule(self) -> Option<&'static ValidationRule> {
        rule_for(self)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Symbology {
    type Err = ParseSymbologyError;

    /// Parses an identifier such as `ean13` or `CODE128`. Matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbology::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSymbologyError::new(s))
    }
}

impl TryFrom<String> for Symbology {
    type Error = ParseSymbologyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The shape of input a rule accepts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Constraint {
    /// ASCII decimal digits only, with a length between `min` and `max` (inclusive).
    /// `max = None` leaves the length unbounded.
    Digits { min: usize, max: Option<usize> },
    /// One or more characters, each drawn from the Code 39 character set.
    Code39Charset,
}

impl Constraint {
    /// Digits of exactly `len` characters.
    pub const fn exact_digits(len: usize) -> Self {
        Constraint::Digits { min: len, max: Some(len) }
    }

    /// Tests the raw text against this constraint. No trimming is applied.
    pub fn matches(&self, text: &str) -> bool {
        match *self {
            Constraint::Digits { min, max } => {
                // All-ASCII, so the byte length is the character count.
                text.bytes().all(|b| b.is_ascii_digit())
                    && text.len() >= min
                    && max.map_or(true, |max| text.len() <= max)
            }
            Constraint::Code39Charset => !text.is_empty() && text.chars().all(is_code39_char),
        }
    }
}

/// Returns true for `0-9`, `A-Z`, and the symbols `- . space $ / + %`.
pub fn is_code39_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase() || matches!(c, '-' | '.' | ' ' | '$' | '/' | '+' | '%')
}

/// A predicate over input text together with the fixed message reported when it fails.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ValidationRule {
    constraint: Constraint,
    message: &'static str,
}

impl ValidationRule {
    pub const fn new(constraint: Constraint, message: &'static str) -> Self {
        ValidationRule { constraint, message }
    }

    /// Returns true if `text` satisfies this rule.
    pub fn accepts(&self, text: &str) -> bool {
        self.constraint.matches(text)
    }

    /// The rejection message for input that fails this rule.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/*---- Registry ----*/

static EAN13: ValidationRule = ValidationRule::new(Constraint::exact_digits(13), "EAN-13 requires 13 digits");
static EAN8: ValidationRule = ValidationRule::new(Constraint::exact_digits(8), "EAN-8 requires 8 digits");
static EAN5: ValidationRule = ValidationRule::new(Constraint::exact_digits(5), "EAN-5 requires 5 digits");
static EAN2: ValidationRule = ValidationRule::new(Constraint::exact_digits(2), "EAN-2 requires 2 digits");
static UPC: ValidationRule = ValidationRule::new(Constraint::exact_digits(12), "UPC-A requires 12 digits");
static CODE39: ValidationRule = ValidationRule::new(Constraint::Code39Charset, "Invalid characters for Code 39");
static ITF14: ValidationRule = ValidationRule::new(Constraint::exact_digits(14), "ITF-14 requires 14 digits");
static MSI: ValidationRule =
    ValidationRule::new(Constraint::Digits { min: 1, max: None }, "MSI requires only digits");
static PHARMACODE: ValidationRule =
    ValidationRule::new(Constraint::Digits { min: 1, max: Some(6) }, "Pharmacode requires 1-6 digits");

/// Looks up the rule for a symbology.
///
/// Returns `None` for symbologies without an input constraint (currently only
/// [`Symbology::Code128`]); such input is always accepted.
///
/// # Example
///
/// ```rust
/// use barcodegen::symbology::{rule_for, Symbology};
///
/// let rule = rule_for(Symbology::Upc).unwrap();
/// assert!(rule.accepts("036000291452"));
/// assert_eq!(rule.message(), "UPC-A requires 12 digits");
///
/// assert!(rule_for(Symbology::Code128).is_none());
/// ```
pub fn rule_for(format: Symbology) -> Option<&'static ValidationRule> {
    match format {
        Symbology::Code128 => None,
        Symbology::Ean13 => Some(&EAN13),
        Symbology::Ean8 => Some(&EAN8),
        Symbology::Ean5 => Some(&EAN5),
        Symbology::Ean2 => Some(&EAN2),
        Symbology::Upc => Some(&UPC),
        Symbology::Code39 => Some(&CODE39),
        Symbology::Itf14 => Some(&ITF14),
        Symbology::Msi => Some(&MSI),
        Symbology::Pharmacode => Some(&PHARMACODE),
    }
}
