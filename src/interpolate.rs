use num_traits::Float;

use crate::{
    color::{Color, Component, Components, Space},
    math::normalize_hue,
    models::{Hsl, Hsv, Rgb},
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hues in degrees along the shorter arc.
fn lerp_hue<T: Float>(a: T, b: T, t: T) -> T {
    let half = T::from(180.0).unwrap_or_else(T::zero);
    let full = half + half;

    let mut delta = b - a;
    if delta > half {
        delta = delta - full;
    } else if delta < -half {
        delta = delta + full;
    }
    a + delta * t
}

impl Color {
    /// Linearly interpolate from this color to another in the notation
    /// specified, using `t` (clamped to `0..=1`) as the progress between
    /// them. Hues take the shorter way around the color wheel, and an endpoint
    /// without saturation keeps the hue of the other endpoint.
    pub fn interpolate(&self, other: &Self, t: Component, space: Space) -> Color {
        let t = t.clamp(0.0, 1.0);

        let left = self.components_in(space);
        let right = other.components_in(space);

        match space {
            Space::Hsl | Space::Hsv => {
                // A gray has no hue of its own, so it takes the other one.
                let (left_hue, right_hue) = match (left.1 > 0.0, right.1 > 0.0) {
                    (true, false) => (left.0, left.0),
                    (false, true) => (right.0, right.0),
                    _ => (left.0, right.0),
                };
                let mixed = Components(
                    normalize_hue(lerp_hue(left_hue, right_hue, t)),
                    lerp(left.1, right.1, t),
                    lerp(left.2, right.2, t),
                );
                if space == Space::Hsl {
                    Hsl::from(mixed).into()
                } else {
                    Hsv::from(mixed).into()
                }
            }
            Space::Hex | Space::Rgb | Space::Cmyk => {
                let mixed = Components(
                    lerp(left.0, right.0, t),
                    lerp(left.1, right.1, t),
                    lerp(left.2, right.2, t),
                );
                Color::from(Rgb::from(mixed)).to_space(space)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic() {
        let left = Color::from(Rgb::new(0, 100, 200));
        let right = Color::from(Rgb::new(100, 200, 0));
        let mixed = left.interpolate(&right, 0.5, Space::Rgb);
        assert_eq!(mixed, Color::Rgb(Rgb::new(50, 150, 100)));
    }

    #[test]
    fn progress_is_clamped() {
        let left = Color::from(Rgb::new(0, 0, 0));
        let right = Color::from(Rgb::new(255, 255, 255));
        assert_eq!(left.interpolate(&right, -1.0, Space::Rgb), left);
        assert_eq!(left.interpolate(&right, 2.0, Space::Rgb), right);
    }

    #[test]
    fn result_is_in_requested_space() {
        let left = Color::from(Rgb::new(255, 0, 0));
        let right = Color::from(Rgb::new(0, 0, 255));
        for space in Space::ALL {
            assert_eq!(left.interpolate(&right, 0.25, space).space(), space);
        }
    }

    #[test]
    fn hue_takes_shorter_arc() {
        assert_component_eq!(lerp_hue::<Component>(350.0, 10.0, 0.5), 360.0);
        assert_component_eq!(lerp_hue::<Component>(10.0, 350.0, 0.5), 0.0);
        assert_component_eq!(lerp_hue::<Component>(0.0, 90.0, 0.5), 45.0);

        let left = Color::from(Hsl::new(350, 100, 50));
        let right = Color::from(Hsl::new(10, 100, 50));
        assert_eq!(left.interpolate(&right, 0.5, Space::Hsl), Color::Hsl(Hsl::new(0, 100, 50)));
    }

    #[test]
    fn grays_take_the_other_hue() {
        let white = Color::from(Rgb::new(255, 255, 255));
        let blue = Color::from(Rgb::new(0, 0, 255));

        assert_eq!(white.interpolate(&blue, 0.5, Space::Hsl), Color::Hsl(Hsl::new(240, 50, 75)));
        assert_eq!(blue.interpolate(&white, 0.5, Space::Hsl), Color::Hsl(Hsl::new(240, 50, 75)));
        assert_eq!(white.interpolate(&blue, 0.5, Space::Hsv), Color::Hsv(Hsv::new(240, 50, 100)));

        let black = Color::from(Rgb::new(0, 0, 0));
        assert_eq!(black.interpolate(&white, 0.5, Space::Hsl), Color::Hsl(Hsl::new(0, 0, 50)));
    }
}
