//! Deterministic OCR test-image fixtures: renders English, Chinese and
//! mixed-language text onto PNG canvases for exercising an OCR pipeline.

pub mod bitmap;
pub mod canvas;
pub mod colors;
pub mod draw;
pub mod encode;
pub mod error;
pub mod fixture;
pub mod pixel;
pub mod text;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use fixture::Flavor;
pub use pixel::Rgb;

pub mod prelude {
    pub use super::canvas::Canvas;
    pub use super::draw::{Border, Draw, Rectangle};
    pub use super::fixture::{Flavor, FontRole, TextLine};
    pub use super::pixel::Rgb;
    pub use super::text::{Font, TextSegment};
}
