//! Error types reported by validation, rendering and start-up.

use thiserror::Error;

/// An error raised by a rendering collaborator, carrying its message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything that can go wrong between submitting text and holding a rendered barcode.
///
/// The `Display` output of each variant is the exact string shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// The text does not satisfy its symbology's rule. Holds the rule message.
    #[error("{0}")]
    Validation(String),
    /// The renderer rejected input that passed validation.
    #[error("Error generating barcode: {0}")]
    Rendering(RenderError),
    /// The demo render at start-up failed.
    #[error("Error initializing barcode: {0}")]
    Initialization(RenderError),
}

/// Returned when a string does not name a supported symbology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown barcode format `{input}`")]
pub struct ParseSymbologyError {
    input: String,
}

impl ParseSymbologyError {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
