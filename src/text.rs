//! Font resolution and text rasterization.

#![allow(clippy::cast_precision_loss)]

use crate::bitmap::{self, BitmapFont};
use crate::canvas::Canvas;
use crate::draw::Draw;
use crate::error::Error::FontError;
use crate::pixel::Rgb;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::FontSettings;
use log::debug;
use std::path::Path;

/// A font handle: a typeface at a point size.
///
/// A handle is either a parsed TrueType/OpenType font or the built-in bitmap
/// font. Handles are resolved once per point size by [`Font::resolve`] and
/// reused across all draw calls of one generation routine.
#[derive(Clone)]
pub struct Font {
    raster: Raster,
    size: f32,
}

#[derive(Clone)]
enum Raster {
    Truetype(fontdue::Font),
    Bitmap(&'static BitmapFont),
}

impl Font {
    /// Opens a TrueType or OpenType font from the given path, sized for the
    /// given point size.
    ///
    /// # Errors
    /// * The file cannot be read or the font data fails to parse.
    pub fn open<P: AsRef<Path>>(path: P, size: f32) -> crate::Result<Self> {
        Self::from_bytes(&std::fs::read(path)?, size)
    }

    /// Loads a TrueType or OpenType font from the given byte slice.
    ///
    /// # Errors
    /// * The font data fails to parse.
    pub fn from_bytes(bytes: &[u8], size: f32) -> crate::Result<Self> {
        let settings = FontSettings {
            scale: size,
            collection_index: 0,
        };
        let inner = fontdue::Font::from_bytes(bytes, settings).map_err(FontError)?;

        Ok(Self {
            raster: Raster::Truetype(inner),
            size,
        })
    }

    /// Returns the built-in bitmap font at the given point size. This is the
    /// terminal strategy of the resolution chain and always succeeds.
    #[must_use]
    pub fn fallback(size: f32) -> Self {
        Self {
            raster: Raster::Bitmap(&bitmap::BUILTIN),
            size,
        }
    }

    /// Resolves a font by trying each candidate path in order, falling back
    /// to the built-in bitmap font when every candidate fails to load.
    ///
    /// Resolution never fails; a missing or unparseable candidate only moves
    /// the search along.
    #[must_use]
    pub fn resolve<P: AsRef<Path>>(candidates: &[P], size: f32) -> Self {
        for candidate in candidates {
            let path = candidate.as_ref();

            match Self::open(path, size) {
                Ok(font) => {
                    debug!("resolved font {} at {size}px", path.display());
                    return font;
                }
                Err(err) => debug!("font candidate {} rejected: {err}", path.display()),
            }
        }

        debug!("no font candidate resolved at {size}px, using the built-in bitmap font");
        Self::fallback(size)
    }

    /// Returns the point size of this font.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Returns true if this handle is the built-in bitmap font rather than a
    /// resolved font file.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.raster, Raster::Bitmap(_))
    }
}

/// Represents a single line of text that can be drawn.
///
/// The position is the top-left anchor of the rendered text. Text segments
/// are ephemeral: the fixture layouts build one per layout line and draw it
/// immediately.
#[derive(Clone)]
pub struct TextSegment<'a> {
    /// The position the text will be rendered at.
    pub position: (u32, u32),
    /// The content of the text segment.
    pub text: String,
    /// The font used to render the text.
    pub font: &'a Font,
    /// The fill color the text will be in.
    pub fill: Rgb,
    /// The size of the text in pixels. Defaults to the font's point size.
    pub size: f32,
}

impl<'a> TextSegment<'a> {
    /// Creates a new text segment with the given font, text, and fill color,
    /// positioned at `(0, 0)`.
    #[must_use]
    pub fn new(font: &'a Font, text: impl AsRef<str>, fill: Rgb) -> Self {
        Self {
            position: (0, 0),
            text: text.as_ref().to_string(),
            font,
            fill,
            size: font.size(),
        }
    }

    /// Sets the position of the text segment.
    #[must_use]
    pub const fn with_position(mut self, x: u32, y: u32) -> Self {
        self.position = (x, y);
        self
    }

    /// Sets the size of the text segment.
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    fn draw_truetype(&self, canvas: &mut Canvas, font: &fontdue::Font) {
        let mut layout: Layout<Rgb> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: self.position.0 as f32,
            y: self.position.1 as f32,
            ..LayoutSettings::default()
        });
        layout.append(
            &[font],
            &TextStyle::with_user_data(&self.text, self.size, 0, self.fill),
        );

        for glyph in layout.glyphs() {
            if glyph.char_data.is_whitespace() {
                continue;
            }

            let (metrics, coverage) = font.rasterize_config(glyph.key);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }

            let fill = glyph.user_data;
            for (row, y) in coverage.chunks_exact(metrics.width).zip(glyph.y as i32..) {
                for (&value, x) in row.iter().zip(glyph.x as i32..) {
                    if value == 0 || x < 0 || y < 0 {
                        continue;
                    }

                    let (x, y) = (x as u32, y as u32);
                    if let Some(&pixel) = canvas.get_pixel(x, y) {
                        canvas.set_pixel(x, y, pixel.blend(fill, value));
                    }
                }
            }
        }
    }

    fn draw_bitmap(&self, canvas: &mut Canvas, font: &BitmapFont) {
        let scale = font.scale_for(self.size);
        let (mut pen_x, pen_y) = self.position;

        for ch in self.text.chars() {
            let pattern = font.glyph(ch);

            for (row_index, row) in pattern.iter().enumerate() {
                for col in 0..bitmap::GLYPH_WIDTH {
                    if row & (1 << (bitmap::GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }

                    // One glyph pixel becomes a scale x scale block.
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let x = pen_x + col * scale + dx;
                            let y = pen_y + row_index as u32 * scale + dy;

                            if canvas.get_pixel(x, y).is_some() {
                                canvas.set_pixel(x, y, self.fill);
                            }
                        }
                    }
                }
            }

            pen_x += font.advance(scale);
        }
    }
}

impl Draw for TextSegment<'_> {
    fn draw(&self, canvas: &mut Canvas) {
        match &self.font.raster {
            Raster::Truetype(font) => self.draw_truetype(canvas, font),
            Raster::Bitmap(font) => self.draw_bitmap(canvas, font),
        }
    }
}
