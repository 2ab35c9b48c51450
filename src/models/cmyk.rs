//! Model a color with the CMYK notation.
//!
//! CMYK has four channels, so unlike the other models it is not generated.

use std::fmt;

use crate::color::{Color, Component, HasSpace, Space};
use crate::math;

/// A color specified with cyan, magenta, yellow and key (black) percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// The cyan channel as a percentage.
    pub cyan: u8,
    /// The magenta channel as a percentage.
    pub magenta: u8,
    /// The yellow channel as a percentage.
    pub yellow: u8,
    /// The key (black) channel as a percentage.
    pub key: u8,
}

impl Cmyk {
    /// Create a new color, clamping each channel to `0..=100`.
    pub fn new(cyan: i32, magenta: i32, yellow: i32, key: i32) -> Self {
        Self {
            cyan: cyan.clamp(0, 100) as u8,
            magenta: magenta.clamp(0, 100) as u8,
            yellow: yellow.clamp(0, 100) as u8,
            key: key.clamp(0, 100) as u8,
        }
    }

    /// Create a color from channels normalized to `0..=1`.
    pub fn from_unit(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        Self::new(
            math::round(cyan * 100.0),
            math::round(magenta * 100.0),
            math::round(yellow * 100.0),
            math::round(key * 100.0),
        )
    }

    /// Return the channels normalized to `0..=1`.
    pub fn to_unit(&self) -> [Component; 4] {
        [self.cyan, self.magenta, self.yellow, self.key].map(|c| c as Component / 100.0)
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Color::Cmyk(value)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}
