//! A [`Color`] holds a color in whichever of the supported notations it was
//! entered in.

use crate::models::{Cmyk, Hex, Hsl, Hsv, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for all intermediate color math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for all intermediate color math.
pub type Component = f64;

/// Three floating point components describing a color in some model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The notations a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Space {
    /// `#RRGGBB` hexadecimal notation.
    Hex = 0,
    /// Red, green and blue bytes.
    Rgb = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
    /// Hue, saturation and value.
    Hsv = 3,
    /// Cyan, magenta, yellow and key (black) percentages.
    Cmyk = 4,
}

impl Space {
    /// All supported notations.
    pub const ALL: [Space; 5] = [Space::Hex, Space::Rgb, Space::Hsl, Space::Hsv, Space::Cmyk];
}

/// Implemented by each model to name the [`Space`] it represents.
pub trait HasSpace {
    /// The notation of the model.
    const SPACE: Space;
}

/// A color in any of the supported notations.
///
/// No notation is the source of truth. A color keeps the form it was created
/// in, and [`Color::to_space`] derives the others on demand so that editing
/// through one notation never rounds through another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// A color written in hexadecimal notation.
    Hex(Hex),
    /// A color with red, green and blue channels.
    Rgb(Rgb),
    /// A color in the HSL notation.
    Hsl(Hsl),
    /// A color in the HSV notation.
    Hsv(Hsv),
    /// A color in the CMYK notation.
    Cmyk(Cmyk),
}

impl Color {
    /// The notation this color is currently held in.
    pub fn space(&self) -> Space {
        match self {
            Color::Hex(_) => Space::Hex,
            Color::Rgb(_) => Space::Rgb,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsv(_) => Space::Hsv,
            Color::Cmyk(_) => Space::Cmyk,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Rgb(Rgb::new(0, 0, 0))
    }
}
