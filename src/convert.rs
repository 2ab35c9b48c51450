//! Conversions between the color models.
//!
//! All intermediate math is done in floating point on normalized
//! [`Components`] (bytes and percentages in `0..=1`, hues in degrees) and only
//! rounded when a model is produced. Where a direct formula exists between two
//! models (HSL and HSV) it is used instead of rounding through RGB.
//!
//! ```rust
//! use toolbench::{hex_to_rgb, rgb_to_hsl};
//! let rgb = hex_to_rgb("#3B82F6").unwrap();
//! let hsl = rgb_to_hsl(rgb.red.into(), rgb.green.into(), rgb.blue.into());
//! assert_eq!(hsl.to_string(), "hsl(217, 91%, 60%)");
//! ```

use crate::{
    color::{Color, Components, Space},
    error::ColorError,
    models::{Cmyk, Hex, Hsl, Hsv, Rgb},
};

/// Parse a 3 or 6 digit hex string, with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    Hex::parse(hex).map(|hex| hex.to_rgb())
}

/// Format RGB channels as `#RRGGBB`, clamping each channel to `0..=255`.
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> String {
    Hex::from(Rgb::new(red, green, blue)).to_string()
}

/// Convert RGB channels to the HSL notation.
///
/// The result is rounded to whole degrees and percentages, which cannot tell
/// every RGB triple apart, so converting back with [`hsl_to_rgb`] may be off
/// by a few units per channel. Use [`components`](crate::components) for a
/// lossless round trip.
pub fn rgb_to_hsl(red: i32, green: i32, blue: i32) -> Hsl {
    Rgb::new(red, green, blue).to_hsl()
}

/// Convert RGB channels to the HSV notation.
///
/// Rounded like [`rgb_to_hsl`], so the integer round trip is lossy too.
pub fn rgb_to_hsv(red: i32, green: i32, blue: i32) -> Hsv {
    Rgb::new(red, green, blue).to_hsv()
}

/// Convert RGB channels to the CMYK notation.
pub fn rgb_to_cmyk(red: i32, green: i32, blue: i32) -> Cmyk {
    Rgb::new(red, green, blue).to_cmyk()
}

/// Convert HSL channels to RGB.
pub fn hsl_to_rgb(hue: i32, saturation: i32, lightness: i32) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

/// Convert HSV channels to RGB.
pub fn hsv_to_rgb(hue: i32, saturation: i32, value: i32) -> Rgb {
    Hsv::new(hue, saturation, value).to_rgb()
}

/// Convert CMYK channels to RGB.
pub fn cmyk_to_rgb(cyan: i32, magenta: i32, yellow: i32, key: i32) -> Rgb {
    Cmyk::new(cyan, magenta, yellow, key).to_rgb()
}

impl Color {
    /// Convert this color from its current notation to the specified one.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space() == space {
            return self.clone();
        }

        // Handle direct conversions.
        match (self, space) {
            (Color::Hex(hex), S::Rgb) => return hex.to_rgb().into(),
            (Color::Rgb(rgb), S::Hex) => return rgb.to_hex().into(),
            (Color::Hsl(hsl), S::Hsv) => return hsl.to_hsv().into(),
            (Color::Hsv(hsv), S::Hsl) => return hsv.to_hsl().into(),
            _ => {}
        }

        // The rest goes through RGB.
        let rgb = self.to_rgb();
        match space {
            S::Hex => rgb.to_hex().into(),
            S::Rgb => rgb.into(),
            S::Hsl => rgb.to_hsl().into(),
            S::Hsv => rgb.to_hsv().into(),
            S::Cmyk => rgb.to_cmyk().into(),
        }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Hex(hex) => hex.to_rgb(),
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hsv(hsv) => hsv.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
        }
    }

    /// Convert this color to hexadecimal notation.
    pub fn to_hex(&self) -> Hex {
        match self {
            Color::Hex(hex) => *hex,
            _ => self.to_rgb().to_hex(),
        }
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        match self {
            Color::Hsl(hsl) => *hsl,
            Color::Hsv(hsv) => hsv.to_hsl(),
            _ => self.to_rgb().to_hsl(),
        }
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        match self {
            Color::Hsv(hsv) => *hsv,
            Color::Hsl(hsl) => hsl.to_hsv(),
            _ => self.to_rgb().to_hsv(),
        }
    }

    /// Convert this color to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            Color::Cmyk(cmyk) => *cmyk,
            _ => self.to_rgb().to_cmyk(),
        }
    }

    /// Return the floating point components of this color in the given
    /// notation, without rounding to integer channels on the way. Hex and
    /// CMYK report RGB components.
    pub fn components_in(&self, space: Space) -> Components {
        let source = match self {
            Color::Hex(hex) => (Space::Rgb, hex.to_rgb().to_components()),
            Color::Rgb(rgb) => (Space::Rgb, rgb.to_components()),
            Color::Hsl(hsl) => (Space::Hsl, hsl.to_components()),
            Color::Hsv(hsv) => (Space::Hsv, hsv.to_components()),
            Color::Cmyk(cmyk) => (Space::Rgb, util::cmyk_to_rgb(cmyk.to_unit())),
        };

        match (source, space) {
            ((Space::Hsl, c), Space::Hsl) | ((Space::Hsv, c), Space::Hsv) => c,
            ((Space::Hsl, c), Space::Hsv) => util::hsl_to_hsv(&c),
            ((Space::Hsv, c), Space::Hsl) => util::hsv_to_hsl(&c),
            ((Space::Hsl, c), _) => util::hsl_to_rgb(&c),
            ((Space::Hsv, c), _) => util::hsv_to_rgb(&c),
            ((_, c), Space::Hsl) => util::rgb_to_hsl(&c),
            ((_, c), Space::Hsv) => util::rgb_to_hsv(&c),
            ((_, c), _) => c,
        }
    }
}

impl Rgb {
    /// Convert to hexadecimal notation.
    pub fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }

    /// Convert to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        let [c, m, y, k] = util::rgb_to_cmyk(&self.to_components());
        Cmyk::from_unit(c, m, y, k)
    }
}

impl Hsl {
    /// Convert to RGB.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }

    /// Convert to the HSV notation without rounding through RGB.
    pub fn to_hsv(&self) -> Hsv {
        util::hsl_to_hsv(&self.to_components()).into()
    }
}

impl Hsv {
    /// Convert to RGB.
    pub fn to_rgb(&self) -> Rgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }

    /// Convert to the HSL notation without rounding through RGB.
    pub fn to_hsl(&self) -> Hsl {
        util::hsv_to_hsl(&self.to_components()).into()
    }
}

impl Cmyk {
    /// Convert to RGB.
    pub fn to_rgb(&self) -> Rgb {
        util::cmyk_to_rgb(self.to_unit()).into()
    }
}

/// Conversions between unrounded [`Components`].
///
/// RGB components are normalized to `0..=1`, HSL and HSV hues are in degrees
/// and their other channels in `0..=1`. Converting RGB to HSL or HSV and back
/// through these functions reproduces the original channels within rounding,
/// which the integer models cannot promise.
pub mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp_unit, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. Achromatic colors get a hue of 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = from.map(clamp_unit);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta > 0.0 {
            let sextant = if max == red {
                (green - blue) / delta
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            normalize_hue(60.0 * sextant)
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// RGB to HSL.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta <= 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Components(hue, saturation, lightness)
    }

    /// HSL to RGB.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = clamp_unit(from.1);
        let lightness = clamp_unit(from.2);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let a = saturation * lightness.min(1.0 - lightness);
        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Components(f(0.0), f(8.0), f(4.0))
    }

    /// RGB to HSV.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max <= 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation, max)
    }

    /// HSV to RGB.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = clamp_unit(from.1);
        let value = clamp_unit(from.2);

        let f = |n: Component| {
            let k = (n + hue / 60.0) % 6.0;
            value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        };

        Components(f(5.0), f(3.0), f(1.0))
    }

    /// HSL to HSV.
    pub fn hsl_to_hsv(from: &Components) -> Components {
        let saturation = clamp_unit(from.1);
        let lightness = clamp_unit(from.2);

        let value = lightness + saturation * lightness.min(1.0 - lightness);
        let saturation = if value <= 0.0 {
            0.0
        } else {
            2.0 * (1.0 - lightness / value)
        };

        Components(normalize_hue(from.0), saturation, value)
    }

    /// HSV to HSL.
    pub fn hsv_to_hsl(from: &Components) -> Components {
        let saturation = clamp_unit(from.1);
        let value = clamp_unit(from.2);

        let lightness = value * (1.0 - saturation / 2.0);
        let saturation = if lightness <= 0.0 || lightness >= 1.0 {
            0.0
        } else {
            (value - lightness) / lightness.min(1.0 - lightness)
        };

        Components(normalize_hue(from.0), saturation, lightness)
    }

    /// Returns `[cyan, magenta, yellow, key]`. Pure black has no chroma to
    /// distribute, so cyan, magenta and yellow are 0 rather than NaN.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let Components(red, green, blue) = from.map(clamp_unit);

        let key = 1.0 - red.max(green).max(blue);
        if key >= 1.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }

        let chroma = |c: Component| (1.0 - c - key) / (1.0 - key);
        [chroma(red), chroma(green), chroma(blue), key]
    }

    /// `[cyan, magenta, yellow, key]` to RGB.
    pub fn cmyk_to_rgb([cyan, magenta, yellow, key]: [Component; 4]) -> Components {
        let key = clamp_unit(key);
        Components(cyan, magenta, yellow).map(|c| (1.0 - clamp_unit(c)) * (1.0 - key))
    }
}
