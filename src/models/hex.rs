//! Model a color written in hexadecimal notation.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, HasSpace, Space};
use crate::error::ColorError;
use crate::models::Rgb;

/// A color written as `#RRGGBB`.
///
/// Reading is case-insensitive and accepts the `#RGB` shorthand, with or
/// without the leading `#`. Writing always produces the canonical uppercase
/// six digit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Hex(Rgb);

impl Hex {
    /// Parse `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB`.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let digits = text.strip_prefix('#').unwrap_or(text);

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };
        let nibbles = digits
            .bytes()
            .map(nibble)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ColorError::invalid(text))?;

        let rgb = match nibbles[..] {
            [r, g, b] => [r * 17, g * 17, b * 17],
            [r1, r2, g1, g2, b1, b2] => [r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2],
            _ => return Err(ColorError::invalid(text)),
        };

        Ok(Hex(Rgb::from(rgb)))
    }

    /// The color this hex string encodes.
    pub fn to_rgb(&self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Hex(value)
    }
}

impl HasSpace for Hex {
    const SPACE: Space = Space::Hex;
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0.to_array();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s)
    }
}

impl From<Hex> for String {
    fn from(value: Hex) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Hex {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hex::parse(&value)
    }
}
