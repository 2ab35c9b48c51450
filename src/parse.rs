//! Parse colors typed as text.
//!
//! The accepted forms are the ones the models display as:
//! * `#RGB`, `#RRGGBB` (the `#` is optional)
//! * `rgb(r, g, b)`
//! * `hsl(h, s%, l%)`
//! * `hsv(h, s%, v%)`
//! * `cmyk(c%, m%, y%, k%)`
//!
//! Function names are case-insensitive, arguments may be separated by commas
//! or whitespace, `%` and `deg` suffixes are optional and numbers may have a
//! fraction. Numeric arguments are rounded and clamped like the model
//! constructors do, so only the shape of the text can be invalid.

use std::str::FromStr;

use crate::{
    color::{Color, Component},
    error::ColorError,
    math,
    models::{Cmyk, Hex, Hsl, Hsv, Rgb},
};

/// Split the arguments of a color function into numbers.
fn parse_args(args: &str, input: &str) -> Result<Vec<i32>, ColorError> {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let token = token
                .strip_suffix('%')
                .or_else(|| token.strip_suffix("deg"))
                .unwrap_or(token);
            token
                .parse::<Component>()
                .ok()
                .filter(|value| value.is_finite())
                .map(math::round)
                .ok_or_else(|| ColorError::invalid(input))
        })
        .collect()
}

/// Parse a color in any of the supported notations.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ColorError::invalid(s));
    }

    let lower = trimmed.to_ascii_lowercase();
    let Some((name, rest)) = lower.split_once('(') else {
        return Hex::parse(trimmed).map(Color::from);
    };
    let args = rest
        .strip_suffix(')')
        .ok_or_else(|| ColorError::invalid(s))?;

    let values = parse_args(args, s)?;
    let color = match (name.trim(), values.as_slice()) {
        ("rgb", &[r, g, b]) => Rgb::new(r, g, b).into(),
        ("hsl", &[h, s, l]) => Hsl::new(h, s, l).into(),
        ("hsv", &[h, s, v]) => Hsv::new(h, s, v).into(),
        ("cmyk", &[c, m, y, k]) => Cmyk::new(c, m, y, k).into(),
        _ => return Err(ColorError::invalid(s)),
    };

    Ok(color)
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
