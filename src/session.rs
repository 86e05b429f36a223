//! The submit/render/export loop behind a barcode form.
//!
//! A [`BarcodeSession`] validates each request, forwards accepted input to its [`Renderer`],
//! keeps the most recent graphic, and holds at most one user-facing error message.

use tracing::{debug, info, warn};

use crate::error::BarcodeError;
use crate::graphic::{Renderer, VectorGraphic};
use crate::helper::SvgExport;
use crate::symbology::Symbology;
use crate::validate::{BarcodeRequest, ValidationResult};

/// Text rendered by [`BarcodeSession::initialize`].
pub const DEMO_TEXT: &str = "123456789012";

/// Symbology used by [`BarcodeSession::initialize`].
pub const DEMO_FORMAT: Symbology = Symbology::Code128;

/// Validates requests, renders them with `R`, and keeps the current barcode and error message.
pub struct BarcodeSession<R> {
    renderer: R,
    graphic: Option<VectorGraphic>,
    error: Option<String>,
}

impl<R: Renderer> BarcodeSession<R> {
    /// Creates a session with nothing rendered and no error.
    pub fn new(renderer: R) -> Self {
        BarcodeSession { renderer, graphic: None, error: None }
    }

    /// Renders the demo barcode so the form has something to show before the first submit.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::Initialization`] if the renderer fails. The message is also kept
    /// in [`error`](Self::error); the session remains usable.
    pub fn initialize(&mut self) -> Result<(), BarcodeError> {
        match self.renderer.render(DEMO_TEXT, DEMO_FORMAT) {
            Ok(graphic) => {
                info!(text = DEMO_TEXT, format = %DEMO_FORMAT, "rendered demo barcode");
                self.graphic = Some(graphic);
                Ok(())
            }
            Err(err) => Err(self.fail(BarcodeError::Initialization(err))),
        }
    }

    /// Validates and renders a request.
    ///
    /// A rejected request replaces the current error and leaves the previous graphic in place.
    /// A successful render replaces the graphic and clears the error.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::Validation`] when the text breaks its symbology's rule and
    /// [`BarcodeError::Rendering`] when the renderer refuses it.
    pub fn submit(&mut self, request: &BarcodeRequest) -> Result<&VectorGraphic, BarcodeError> {
        if let ValidationResult::Rejected(reason) = request.validate() {
            return Err(self.fail(BarcodeError::Validation(reason)));
        }

        let graphic = self
            .renderer
            .render(&request.text, request.format)
            .map_err(|err| self.fail(BarcodeError::Rendering(err)))?;

        debug!(format = %request.format, rects = graphic.rects().len(), "rendered barcode");
        self.error = None;
        Ok(&*self.graphic.insert(graphic))
    }

    /// The message currently shown to the user, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The most recently rendered graphic.
    pub fn graphic(&self) -> Option<&VectorGraphic> {
        self.graphic.as_ref()
    }

    /// Serializes the current graphic for download. `None` until something has been rendered.
    pub fn export(&self) -> Option<SvgExport> {
        let export = SvgExport::new(self.graphic.as_ref()?);
        debug!(filename = export.filename, bytes = export.contents.len(), "serialized barcode for download");
        Some(export)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn fail(&mut self, err: BarcodeError) -> BarcodeError {
        warn!(error = %err, "barcode request failed");
        self.error = Some(err.to_string());
        err
    }
}
