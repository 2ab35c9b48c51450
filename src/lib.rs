//! toolbench provides the logic behind a set of small developer utilities:
//! color conversion between HEX, RGB, HSL, HSV and CMYK notations, palettes
//! and CSS gradients built on top of it, a regular expression
//! match/replace/highlight harness, text case conversion and text digests.

#![deny(missing_docs)]

pub mod case;
mod color;
mod convert;
pub mod digest;
mod error;
pub mod gradient;
mod interpolate;
pub mod math;
mod models;
mod palette;
mod parse;
pub mod pattern;


pub use case::TextCase;
pub use color::{Color, Component, Components, HasSpace, Space};
pub use convert::util as components;
pub use convert::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
    rgb_to_hsv,
};
pub use digest::{digest_hex, Algorithm};
pub use error::{ColorError, CompileError, DigestError};
pub use gradient::{ColorStop, Direction, Gradient, Shape};
pub use models::{Cmyk, Hex, Hsl, Hsv, Rgb};
pub use palette::Palette;
pub use parse::parse_color;
pub use pattern::{Flags, MatchRecord, Matcher, Session, State};
