//! Vector drawing instructions produced by a barcode renderer.
//!
//! This crate does not draw bars itself. A rendering collaborator implements [`Renderer`] and
//! returns a [`VectorGraphic`]; the helpers in [`crate::helper`] take it from there.

use crate::error::RenderError;
use crate::symbology::Symbology;

/// A filled, axis-aligned rectangle, measured in modules.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect { x, y, width, height }
    }

    /// Returns true if the point (`px`, `py`) lies inside this rectangle.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && u64::from(px) < u64::from(self.x) + u64::from(self.width)
            && u64::from(py) < u64::from(self.y) + u64::from(self.height)
    }
}

/// A canvas of `width` by `height` modules with dark rectangles drawn on a light background.
///
/// # Example
///
/// ```rust
/// use barcodegen::graphic::{Rect, VectorGraphic};
///
/// let mut graphic = VectorGraphic::new(11, 10);
/// graphic.push_rect(Rect::new(0, 0, 2, 10));
/// graphic.push_rect(Rect::new(3, 0, 1, 10));
/// assert_eq!(graphic.rects().len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct VectorGraphic {
    width: u32,
    height: u32,
    rects: Vec<Rect>,
}

impl VectorGraphic {
    pub fn new(width: u32, height: u32) -> Self {
        VectorGraphic { width, height, rects: Vec::new() }
    }

    pub fn push_rect(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Returns true if the module at (`x`, `y`) is dark.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }
}

/// Turns validated text into vector drawing instructions for a given symbology.
///
/// Implementations compute checksum digits where the symbology needs them and return a
/// [`RenderError`] for input they cannot encode, even if it passed validation.
pub trait Renderer {
    fn render(&self, text: &str, format: Symbology) -> Result<VectorGraphic, RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, text: &str, format: Symbology) -> Result<VectorGraphic, RenderError> {
        (**self).render(text, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 0, 3, 4);
        assert!(rect.contains(2, 0));
        assert!(rect.contains(4, 3));
        assert!(!rect.contains(5, 0));
        assert!(!rect.contains(1, 0));
        assert!(!rect.contains(2, 4));
    }

    #[test]
    fn test_rect_contains_near_overflow() {
        let rect = Rect::new(u32::MAX - 1, 0, 10, 1);
        assert!(rect.contains(u32::MAX, 0));
    }

    #[test]
    fn test_is_dark() {
        let mut graphic = VectorGraphic::new(5, 1);
        graphic.push_rect(Rect::new(1, 0, 1, 1));
        assert!(!graphic.is_dark(0, 0));
        assert!(graphic.is_dark(1, 0));
        assert!(!graphic.is_dark(2, 0));
    }
}
