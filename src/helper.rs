use crate::graphic::VectorGraphic;

use image::{ImageBuffer, Luma};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name offered for every SVG export.
pub const SVG_FILENAME: &str = "barcode.svg";

/// MIME type of an exported SVG document.
pub const SVG_MIME_TYPE: &str = "image/svg+xml;charset=utf-8";

/// Directory used by [`save_svg`] when none is given.
pub const DEFAULT_DIRECTORY: &str = "generated";

/*---- Utilities ----*/

// Returns a string of SVG code for the given graphic: a white background
// and one black path holding every rectangle.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(graphic: &VectorGraphic) -> String {
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {} {}\" stroke=\"none\">\n",
        graphic.width(),
        graphic.height()
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    for (i, rect) in graphic.rects().iter().enumerate() {
        if i != 0 {
            result += " ";
        }
        result += &format!("M{},{}h{}v{}h-{}z", rect.x, rect.y, rect.width, rect.height, rect.width);
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// A serialized barcode ready to be handed to the user as a download.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SvgExport {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl SvgExport {
    /// Serializes `graphic` into an export named [`SVG_FILENAME`].
    ///
    /// # Example
    ///
    /// ```
    /// use barcodegen::graphic::{Rect, VectorGraphic};
    /// use barcodegen::helper::SvgExport;
    ///
    /// let mut graphic = VectorGraphic::new(4, 2);
    /// graphic.push_rect(Rect::new(1, 0, 1, 2));
    ///
    /// let export = SvgExport::new(&graphic);
    /// assert_eq!(export.filename, "barcode.svg");
    /// assert_eq!(export.mime_type, "image/svg+xml;charset=utf-8");
    /// assert!(export.contents.contains("M1,0h1v2h-1z"));
    /// ```
    pub fn new(graphic: &VectorGraphic) -> Self {
        SvgExport {
            filename: SVG_FILENAME,
            mime_type: SVG_MIME_TYPE,
            contents: to_svg_string(graphic),
        }
    }
}

/// Writes an export to disk as `<directory_path>/barcode.svg`.
///
/// # Arguments
///
/// * `export` - The serialized barcode.
/// * `directory_path` - Optional. The directory the file is written to. If not provided, the default directory is "generated".
///
/// # Errors
///
/// Returns an `io::Error` if the directory cannot be created or the file cannot be written.
///
/// # Returns
///
/// The path of the written file.
pub fn save_svg(export: &SvgExport, directory_path: Option<&str>) -> io::Result<PathBuf> {
    let directory_path = directory_path.unwrap_or(DEFAULT_DIRECTORY);

    // Check if the directory exists, create it if it doesn't
    if !Path::new(directory_path).exists() {
        fs::create_dir_all(directory_path)?;
    }

    let file_path = Path::new(directory_path).join(export.filename);
    fs::write(&file_path, export.contents.as_bytes())?;
    Ok(file_path)
}

/// Rasterizes a graphic into a grayscale image buffer for previews.
///
/// # Arguments
///
/// * `graphic` - The graphic to rasterize.
/// * `scale` - Pixels per module along each axis. Values below 1 are treated as 1.
///
/// # Returns
///
/// An `ImageBuffer` of `width * scale` by `height * scale` pixels, black on white.
///
/// # Example
///
/// ```
/// use barcodegen::graphic::{Rect, VectorGraphic};
/// use barcodegen::helper::to_image_buffer;
///
/// let mut graphic = VectorGraphic::new(3, 1);
/// graphic.push_rect(Rect::new(1, 0, 1, 1));
///
/// let img = to_image_buffer(&graphic, 2);
/// assert_eq!(img.dimensions(), (6, 2));
/// assert_eq!(img.get_pixel(2, 0).0, [0]);
/// assert_eq!(img.get_pixel(0, 0).0, [255]);
/// ```
pub fn to_image_buffer(graphic: &VectorGraphic, scale: u32) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let scale = scale.max(1);
    let width = graphic.width().saturating_mul(scale);
    let height = graphic.height().saturating_mul(scale);
    let mut img = ImageBuffer::new(width, height);

    // Pixels outside the canvas are never visited, so oversized rects are clipped.
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if graphic.is_dark(x / scale, y / scale) {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        };
    }

    img
}
