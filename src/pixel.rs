/// Represents a 24-bit RGB pixel. This is the only pixel type the fixture
/// canvases use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// The red component of the pixel.
    pub r: u8,
    /// The green component of the pixel.
    pub g: u8,
    /// The blue component of the pixel.
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a completely black pixel.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Creates a completely white pixel.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Blends `fill` over this pixel with the given coverage value, where 0
    /// leaves the pixel untouched and 255 replaces it entirely. Glyph
    /// rasterization uses this for anti-aliased edges.
    #[must_use]
    pub fn blend(self, fill: Self, coverage: u8) -> Self {
        let mix = |below: u8, above: u8| {
            let coverage = u32::from(coverage);
            ((u32::from(below) * (255 - coverage) + u32::from(above) * coverage) / 255) as u8
        };

        Self {
            r: mix(self.r, fill.r),
            g: mix(self.g, fill.g),
            b: mix(self.b, fill.b),
        }
    }
}
