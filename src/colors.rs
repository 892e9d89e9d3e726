//! RGB color constants for the colors the fixture layouts reference,
//! with their values taken from the X11/CSS3 color keyword list.

use crate::pixel::Rgb;

/// Represents the color `#000000`, also known as `black`.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Represents the color `#ffffff`, also known as `white`.
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Represents the color `#0000ff`, also known as `blue`.
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Represents the color `#ff0000`, also known as `red`.
pub const RED: Rgb = Rgb::new(255, 0, 0);

/// Represents the color `#008000`, also known as `green`.
pub const GREEN: Rgb = Rgb::new(0, 128, 0);

/// Represents the color `#800080`, also known as `purple`.
pub const PURPLE: Rgb = Rgb::new(128, 0, 128);

/// Represents the color `#a52a2a`, also known as `brown`.
pub const BROWN: Rgb = Rgb::new(165, 42, 42);

/// Represents the color `#ffa500`, also known as `orange`.
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);

/// Represents the color `#000080`, also known as `navy`.
pub const NAVY: Rgb = Rgb::new(0, 0, 128);

/// Represents the color `#006400`, also known as `darkgreen`.
pub const DARK_GREEN: Rgb = Rgb::new(0, 100, 0);

/// Represents the color `#8b0000`, also known as `darkred`.
pub const DARK_RED: Rgb = Rgb::new(139, 0, 0);

/// Represents the color `#00008b`, also known as `darkblue`.
pub const DARK_BLUE: Rgb = Rgb::new(0, 0, 139);
