//! Each notation is modeled with its own type holding integer channels.
//! Conversions are implemented on the models themselves (see
//! [`crate::convert`]) and do all intermediate math in floating point,
//! rounding only when a model is produced.

pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod rgb;

pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
