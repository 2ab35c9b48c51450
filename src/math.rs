//! Math utility functions.

use euclid::default::{Point2D, Size2D, Vector2D};

use crate::Component;

/// A position in pixels.
pub type Point = Point2D<Component>;
/// A size in pixels.
pub type Size = Size2D<Component>;
/// A displacement in pixels.
pub type Vector = Vector2D<Component>;

/// Round a component to the nearest integer. NaN becomes 0 and infinities
/// saturate.
pub fn round(value: Component) -> i32 {
    value.round() as i32
}

/// Wrap a hue in degrees into `0..360`.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Clamp a normalized component into `0..=1`, mapping NaN to 0.
pub fn clamp_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Unit vector pointing in the direction of a CSS gradient angle, where 0deg
/// points up and angles grow clockwise. Screen coordinates grow downwards.
pub fn css_angle_to_vector(degrees: Component) -> Vector {
    let radians = degrees.to_radians();
    Vector::new(radians.sin(), -radians.cos())
}
