//! PNG serialization for canvases.

use crate::canvas::Canvas;
use crate::error::{Error, Result};

use std::io::Write;

/// Encodes the canvas as an 8-bit RGB PNG into `dest`.
///
/// # Errors
/// * [`Error::EmptyCanvasError`] if the canvas has no pixels.
/// * [`Error::EncodingError`] or [`Error::IoError`] if the encoder fails.
pub fn encode_png(canvas: &Canvas, dest: impl Write) -> Result<()> {
    if canvas.is_empty() {
        return Err(Error::EmptyCanvasError);
    }

    let mut encoder = png::Encoder::new(dest, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.to_bytes())?;
    writer.finish()?;

    Ok(())
}
