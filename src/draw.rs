use crate::canvas::Canvas;
use crate::pixel::Rgb;

/// Objects that can draw themselves onto a canvas.
pub trait Draw {
    /// Draws the object to the given canvas.
    fn draw(&self, canvas: &mut Canvas);
}

/// Represents a rectangle stroke. The stroke lies inside the rectangle's
/// bounding box, the way the fixture border is inset from the canvas edges.
#[derive(Clone, Debug)]
pub struct Border {
    /// The color of the border.
    pub color: Rgb,
    /// The thickness of the border, in pixels.
    pub thickness: u32,
}

impl Border {
    /// Creates a new border with the given color and thickness.
    ///
    /// # Panics
    /// * The thickness is 0.
    pub fn new(color: Rgb, thickness: u32) -> Self {
        assert_ne!(thickness, 0, "border thickness cannot be 0");

        Self { color, thickness }
    }
}

/// A rectangle with an optional solid fill and an optional border stroke.
///
/// The bounding box is inclusive of both corners: a rectangle positioned at
/// `(x, y)` with size `(w, h)` covers the pixels `x..=x + w` by `y..=y + h`.
#[derive(Clone, Debug, Default)]
pub struct Rectangle {
    /// The position of the top-left corner.
    pub position: (u32, u32),
    /// The dimensions of the bounding box.
    pub size: (u32, u32),
    /// The border of the rectangle, if any.
    pub border: Option<Border>,
    /// The solid fill of the rectangle, if any.
    pub fill: Option<Rgb>,
}

impl Rectangle {
    /// Creates a new empty rectangle. At least one of a fill or a border must
    /// be set before drawing it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rectangle from the two corners of its bounding box.
    ///
    /// # Panics
    /// * The bounding box is invalid (`x2 < x1` or `y2 < y1`).
    #[must_use]
    pub fn from_bounding_box(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        assert!(x2 >= x1, "invalid bounding box");
        assert!(y2 >= y1, "invalid bounding box");

        Self::default()
            .with_position(x1, y1)
            .with_size(x2 - x1, y2 - y1)
    }

    /// Sets the position of the rectangle.
    #[must_use]
    pub const fn with_position(mut self, x: u32, y: u32) -> Self {
        self.position = (x, y);
        self
    }

    /// Sets the size of the rectangle.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Sets the border of the rectangle.
    #[must_use]
    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the fill of the rectangle.
    #[must_use]
    pub const fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl Draw for Rectangle {
    fn draw(&self, canvas: &mut Canvas) {
        assert!(
            self.fill.is_some() || self.border.is_some(),
            "must provide one of either fill or border"
        );

        let (x1, y1) = self.position;
        let (w, h) = self.size;
        let (x2, y2) = (x1 + w, y1 + h);

        if let Some(fill) = self.fill {
            for y in y1..=y2 {
                for x in x1..=x2 {
                    if canvas.get_pixel(x, y).is_some() {
                        canvas.set_pixel(x, y, fill);
                    }
                }
            }
        }

        if let Some(Border { color, thickness }) = &self.border {
            let t = *thickness;

            for y in y1..=y2 {
                for x in x1..=x2 {
                    let on_stroke =
                        x < x1 + t || x + t > x2 || y < y1 + t || y + t > y2;

                    if on_stroke && canvas.get_pixel(x, y).is_some() {
                        canvas.set_pixel(x, y, *color);
                    }
                }
            }
        }
    }
}
