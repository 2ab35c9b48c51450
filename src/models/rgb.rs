//! Model a color with red, green and blue channels.

use std::fmt;

toolbench_macros::gen_model! {
    /// A color with 8-bit red, green and blue channels.
    pub struct Rgb {
        /// The red channel, `0..=255`.
        #[byte]
        red: u8,
        /// The green channel, `0..=255`.
        #[byte]
        green: u8,
        /// The blue channel, `0..=255`.
        #[byte]
        blue: u8,
    }
}

impl Rgb {
    /// Return the channels as an array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn channels_are_clamped() {
        let rgb = Rgb::new(-20, 128, 300);
        assert_eq!(rgb.to_array(), [0, 128, 255]);
    }

    #[test]
    fn from_components_rounds() {
        let rgb = Rgb::from(Components(1.0, 0.5, 0.0));
        assert_eq!(rgb.to_array(), [255, 128, 0]);
    }

    #[test]
    fn display() {
        assert_eq!(Rgb::new(59, 130, 246).to_string(), "rgb(59, 130, 246)");
    }
}
