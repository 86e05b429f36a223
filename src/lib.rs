//! # barcodegen
//!
//! A Rust library for checking barcode input against the rules of its symbology and exporting
//! rendered barcodes as standalone SVG files.
//!
//! `barcodegen` knows ten symbologies (Code 128, EAN-13, EAN-8, EAN-5, EAN-2, UPC-A, Code 39,
//! ITF-14, MSI and Pharmacode) and the length and character-set constraint each of them puts on
//! its input. Drawing the bars is left to a [`graphic::Renderer`] supplied by the caller; the
//! library takes its vector output and turns it into an SVG document or a raster preview.
//!
//! ## Features
//!
//! - Validate text for a symbology with a single pure function.
//! - Human-readable rejection messages, ready to show to a user.
//! - SVG export named `barcode.svg` with the `image/svg+xml;charset=utf-8` MIME type.
//! - Grayscale image buffers for previews.
//! - A session type that keeps the current barcode and the current error message.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! barcodegen = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Validate some input:
//!
//! ```rust
//! use barcodegen::symbology::Symbology;
//! use barcodegen::validate::{validate, ValidationResult};
//!
//! assert_eq!(validate("ABC-123", Symbology::Code39), ValidationResult::Accepted);
//! assert_eq!(
//!     validate("12345678901", Symbology::Ean13).reason(),
//!     Some("EAN-13 requires 13 digits"),
//! );
//! ```
//!
//! Plug in a renderer and export the result:
//!
//! ```rust
//! use barcodegen::error::RenderError;
//! use barcodegen::graphic::{Rect, Renderer, VectorGraphic};
//! use barcodegen::session::BarcodeSession;
//! use barcodegen::symbology::Symbology;
//! use barcodegen::validate::BarcodeRequest;
//!
//! struct OneBar;
//!
//! impl Renderer for OneBar {
//!     fn render(&self, _text: &str, _format: Symbology) -> Result<VectorGraphic, RenderError> {
//!         let mut graphic = VectorGraphic::new(3, 10);
//!         graphic.push_rect(Rect::new(1, 0, 1, 10));
//!         Ok(graphic)
//!     }
//! }
//!
//! let mut session = BarcodeSession::new(OneBar);
//! session.submit(&BarcodeRequest::new("4006381333931", Symbology::Ean13)).unwrap();
//!
//! let export = session.export().unwrap();
//! assert_eq!(export.filename, "barcode.svg");
//! ```
//!
//! ## Modules
//!
//! - [`symbology`]: Supported symbologies and the rule registry.
//! - [`validate`]: The validation entry point.
//! - [`graphic`]: Vector output of a renderer and the [`graphic::Renderer`] trait.
//! - [`helper`]: SVG serialization, file export and raster previews.
//! - [`session`]: Submit, render and export with a single error slot.
//! - [`error`]: Error types.

#![forbid(unsafe_code)]

pub mod error;
pub mod graphic;
pub mod helper;
pub mod session;
pub mod symbology;
pub mod validate;
