//! Palettes of shades and tints derived from a base color.

use crate::{color::Component, math, models::Rgb};

/// How many shades and how many tints are generated around the base color.
pub const STEPS: usize = 5;

/// Each step moves this fraction of the way towards black or white.
const STEP_FACTOR: Component = 0.15;

/// An ordered list of colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// The colors in the palette.
    pub colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette of [`STEPS`] shades, the base color and [`STEPS`]
    /// tints.
    pub fn shades_and_tints(base: Rgb) -> Self {
        let shade = |c: u8, factor: Component| math::round(c as Component * factor);
        let tint = |c: u8, factor: Component| {
            math::round(c as Component + (255.0 - c as Component) * factor)
        };

        let mut colors = Vec::with_capacity(STEPS * 2 + 1);

        colors.extend((1..=STEPS).map(|i| {
            let factor = 1.0 - i as Component * STEP_FACTOR;
            Rgb::new(
                shade(base.red, factor),
                shade(base.green, factor),
                shade(base.blue, factor),
            )
        }));

        colors.push(base);

        colors.extend((1..=STEPS).map(|i| {
            let factor = i as Component * STEP_FACTOR;
            Rgb::new(
                tint(base.red, factor),
                tint(base.green, factor),
                tint(base.blue, factor),
            )
        }));

        Self { colors }
    }

    /// Export the palette as CSV with `Name,HEX,RGB,HSL` columns.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Name,HEX,RGB,HSL\n");
        for (index, color) in self.colors.iter().enumerate() {
            // The functional notations contain commas, so they are quoted.
            csv.push_str(&format!(
                "Color {},{},\"{}\",\"{}\"\n",
                index + 1,
                color.to_hex(),
                color,
                color.to_hsl()
            ));
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shades_then_base_then_tints() {
        let base = Rgb::new(100, 200, 40);
        let palette = Palette::shades_and_tints(base);

        assert_eq!(palette.colors.len(), STEPS * 2 + 1);
        assert_eq!(palette.colors[STEPS], base);

        // 1 - 0.15 = 0.85
        assert_eq!(palette.colors[0], Rgb::new(85, 170, 34));
        // 0.15 of the way to white.
        assert_eq!(palette.colors[STEPS + 1], Rgb::new(123, 208, 72));
    }

    #[test]
    fn shades_darken_and_tints_lighten() {
        let palette = Palette::shades_and_tints(Rgb::new(59, 130, 246));
        let lightness = palette
            .colors
            .iter()
            .map(|c| c.to_hsl().lightness)
            .collect::<Vec<_>>();

        // Each shade is darker than the one before it.
        assert!(lightness[..STEPS].windows(2).all(|w| w[0] >= w[1]));
        // Tints go lighter.
        assert!(lightness[STEPS..].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn black_and_white_edges() {
        let palette = Palette::shades_and_tints(Rgb::new(0, 0, 0));
        assert!(palette.colors[..=STEPS].iter().all(|c| *c == Rgb::new(0, 0, 0)));

        let palette = Palette::shades_and_tints(Rgb::new(255, 255, 255));
        assert!(palette.colors[STEPS..].iter().all(|c| *c == Rgb::new(255, 255, 255)));
    }

    #[test]
    fn csv_export() {
        let palette = Palette {
            colors: vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)],
        };
        assert_eq!(
            palette.to_csv(),
            "Name,HEX,RGB,HSL\n\
             Color 1,#FF0000,\"rgb(255, 0, 0)\",\"hsl(0, 100%, 50%)\"\n\
             Color 2,#000000,\"rgb(0, 0, 0)\",\"hsl(0, 0%, 0%)\"\n"
        );
    }
}
