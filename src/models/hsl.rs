//! Model a color with the HSL notation.

use std::fmt;

toolbench_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// The hue in degrees, `0..360`.
        #[hue]
        hue: u16,
        /// The saturation as a percentage.
        #[percent]
        saturation: u8,
        /// The lightness as a percentage.
        #[percent]
        lightness: u8,
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
