//! Model a color with the HSV notation.

use std::fmt;

toolbench_macros::gen_model! {
    /// A color specified with hue, saturation and value.
    pub struct Hsv {
        /// The hue in degrees, `0..360`.
        #[hue]
        hue: u16,
        /// The saturation as a percentage.
        #[percent]
        saturation: u8,
        /// The value as a percentage.
        #[percent]
        value: u8,
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.hue, self.saturation, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn from_components() {
        let hsv = Hsv::from(Components(359.6, 0.757, 0.964));
        assert_eq!(hsv.hue, 0);
        assert_eq!(hsv.saturation, 76);
        assert_eq!(hsv.value, 96);
    }

    #[test]
    fn display() {
        assert_eq!(Hsv::new(217, 76, 96).to_string(), "hsv(217, 76%, 96%)");
    }
}
