//! CSS gradients built from color stops.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{
    color::{Color, Component, Space},
    math::{self, Point, Size, Vector},
    models::{Hex, Rgb},
};

/// Colors offered when randomizing a gradient.
pub const SWATCHES: [Rgb; 8] = [
    Rgb { red: 0x8B, green: 0x5C, blue: 0xF6 },
    Rgb { red: 0x3B, green: 0x82, blue: 0xF6 },
    Rgb { red: 0x06, green: 0xB6, blue: 0xD4 },
    Rgb { red: 0x10, green: 0xB9, blue: 0x81 },
    Rgb { red: 0xF5, green: 0x9E, blue: 0x0B },
    Rgb { red: 0xEF, green: 0x44, blue: 0x44 },
    Rgb { red: 0xEC, green: 0x48, blue: 0x99 },
    Rgb { red: 0x63, green: 0x66, blue: 0xF1 },
];

/// Error returned when a gradient direction cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid gradient direction: {0:?}")]
pub struct ParseDirectionError(String);

/// Which way a linear gradient runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `to right`
    ToRight,
    /// `to left`
    ToLeft,
    /// `to bottom`
    ToBottom,
    /// `to top`
    ToTop,
    /// `to bottom right`
    ToBottomRight,
    /// `to bottom left`
    ToBottomLeft,
    /// `to top right`
    ToTopRight,
    /// `to top left`
    ToTopLeft,
    /// An angle in degrees; `0deg` points up and angles grow clockwise.
    Angle(i32),
}

impl Direction {
    /// All keyword directions.
    pub const KEYWORDS: [Direction; 8] = [
        Direction::ToRight,
        Direction::ToLeft,
        Direction::ToBottom,
        Direction::ToTop,
        Direction::ToBottomRight,
        Direction::ToBottomLeft,
        Direction::ToTopRight,
        Direction::ToTopLeft,
    ];

    /// Unit vector along the gradient line for a box of the given size.
    ///
    /// Corner keywords depend on the aspect ratio of the box: the line is
    /// perpendicular to the diagonal joining the two neighbouring corners.
    pub fn vector(&self, size: Size) -> Vector {
        let corner = |x: Component, y: Component| {
            let v = Vector::new(x * size.height, y * size.width);
            if v.square_length() > 0.0 {
                v.normalize()
            } else {
                Vector::new(x, y).normalize()
            }
        };

        match *self {
            Direction::ToTop => math::css_angle_to_vector(0.0),
            Direction::ToRight => math::css_angle_to_vector(90.0),
            Direction::ToBottom => math::css_angle_to_vector(180.0),
            Direction::ToLeft => math::css_angle_to_vector(270.0),
            Direction::ToBottomRight => corner(1.0, 1.0),
            Direction::ToBottomLeft => corner(-1.0, 1.0),
            Direction::ToTopRight => corner(1.0, -1.0),
            Direction::ToTopLeft => corner(-1.0, -1.0),
            Direction::Angle(degrees) => math::css_angle_to_vector(degrees as Component),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToRight => f.write_str("to right"),
            Direction::ToLeft => f.write_str("to left"),
            Direction::ToBottom => f.write_str("to bottom"),
            Direction::ToTop => f.write_str("to top"),
            Direction::ToBottomRight => f.write_str("to bottom right"),
            Direction::ToBottomLeft => f.write_str("to bottom left"),
            Direction::ToTopRight => f.write_str("to top right"),
            Direction::ToTopLeft => f.write_str("to top left"),
            Direction::Angle(degrees) => write!(f, "{degrees}deg"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        if let Some(keyword) = Direction::KEYWORDS
            .into_iter()
            .find(|keyword| keyword.to_string() == normalized)
        {
            return Ok(keyword);
        }

        normalized
            .strip_suffix("deg")
            .and_then(|degrees| degrees.trim().parse::<i32>().ok())
            .map(Direction::Angle)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// The shape of a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A gradient along a straight line.
    Linear(Direction),
    /// A circular gradient from the center out to the farthest corner.
    Radial,
}

/// A color at a position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// The color of the stop.
    pub color: Rgb,
    /// Position along the gradient as a percentage.
    pub position: u8,
}

impl ColorStop {
    /// Create a new stop, clamping the position to `0..=100`.
    pub fn new(color: Rgb, position: i32) -> Self {
        Self {
            color,
            position: position.clamp(0, 100) as u8,
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", Hex::from(self.color), self.position)
    }
}

/// A CSS gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    /// Linear or radial.
    pub shape: Shape,
    /// The color stops in the order they are written.
    pub stops: Vec<ColorStop>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            shape: Shape::Linear(Direction::ToRight),
            stops: vec![
                ColorStop::new(SWATCHES[0], 0),
                ColorStop::new(SWATCHES[1], 50),
                ColorStop::new(SWATCHES[2], 100),
            ],
        }
    }
}

impl Gradient {
    /// Create a gradient of the given shape and stops.
    pub fn new(shape: Shape, stops: Vec<ColorStop>) -> Self {
        Self { shape, stops }
    }

    /// The CSS `<gradient>` value, e.g.
    /// `linear-gradient(to right, #8B5CF6 0%, #3B82F6 50%)`.
    pub fn css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        match self.shape {
            Shape::Linear(direction) => format!("linear-gradient({direction}, {stops})"),
            Shape::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }

    /// A complete `background` declaration using this gradient.
    pub fn declaration(&self) -> String {
        format!("background: {};", self.css())
    }

    /// Replace the color of every stop with a random pick from [`SWATCHES`].
    pub fn randomize<R: rand::Rng>(&mut self, rng: &mut R) {
        for stop in self.stops.iter_mut() {
            stop.color = SWATCHES[rng.gen_range(0..SWATCHES.len())];
        }
    }

    /// The color at progress `t` (`0..=1`) along the gradient.
    ///
    /// Stop positions that are lower than an earlier stop's are treated as
    /// equal to it, as CSS does. Before the first stop and after the last the
    /// colors are solid.
    pub fn sample(&self, t: Component) -> Rgb {
        let Some(first) = self.stops.first() else {
            return Rgb::new(0, 0, 0);
        };

        let position = t.clamp(0.0, 1.0) * 100.0;

        let mut previous = (first.position as Component, first.color);
        if position <= previous.0 {
            return previous.1;
        }

        for stop in &self.stops[1..] {
            let stop_position = (stop.position as Component).max(previous.0);
            if position <= stop_position {
                let span = stop_position - previous.0;
                if span <= 0.0 {
                    return stop.color;
                }
                let local = (position - previous.0) / span;
                return Color::from(previous.1)
                    .interpolate(&Color::from(stop.color), local, Space::Rgb)
                    .to_rgb();
            }
            previous = (stop_position, stop.color);
        }

        previous.1
    }

    /// Progress along the gradient (`0..=1`) of a point inside a box of the
    /// given size, with the origin at the top left.
    pub fn progress_at(&self, point: Point, size: Size) -> Component {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let offset = point - center;

        let t = match self.shape {
            Shape::Linear(direction) => {
                let dir = direction.vector(size);
                let length = (size.width * dir.x).abs() + (size.height * dir.y).abs();
                if length <= 0.0 {
                    0.0
                } else {
                    offset.dot(dir) / length + 0.5
                }
            }
            Shape::Radial => {
                let radius = (center - Point::origin()).length();
                if radius <= 0.0 {
                    0.0
                } else {
                    offset.length() / radius
                }
            }
        };

        t.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn default_css() {
        let gradient = Gradient::default();
        assert_eq!(
            gradient.css(),
            "linear-gradient(to right, #8B5CF6 0%, #3B82F6 50%, #06B6D4 100%)"
        );
        assert_eq!(
            gradient.declaration(),
            "background: linear-gradient(to right, #8B5CF6 0%, #3B82F6 50%, #06B6D4 100%);"
        );
    }

    #[test]
    fn radial_css() {
        let gradient = Gradient::new(
            Shape::Radial,
            vec![
                ColorStop::new(Rgb::new(255, 0, 0), 0),
                ColorStop::new(Rgb::new(0, 0, 255), 150),
            ],
        );
        assert_eq!(gradient.css(), "radial-gradient(circle, #FF0000 0%, #0000FF 100%)");
    }

    #[test]
    fn directions_round_trip_through_text() {
        for direction in Direction::KEYWORDS.into_iter().chain([Direction::Angle(135)]) {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
        assert_eq!("  TO   Bottom  right".parse::<Direction>(), Ok(Direction::ToBottomRight));
        assert!("sideways".parse::<Direction>().is_err());
        assert!("to".parse::<Direction>().is_err());
    }

    #[test]
    fn sample_between_stops() {
        let gradient = Gradient::new(
            Shape::Linear(Direction::ToRight),
            vec![
                ColorStop::new(Rgb::new(0, 0, 0), 20),
                ColorStop::new(Rgb::new(200, 100, 0), 60),
            ],
        );

        assert_eq!(gradient.sample(0.0), Rgb::new(0, 0, 0));
        assert_eq!(gradient.sample(0.2), Rgb::new(0, 0, 0));
        assert_eq!(gradient.sample(0.4), Rgb::new(100, 50, 0));
        assert_eq!(gradient.sample(0.6), Rgb::new(200, 100, 0));
        assert_eq!(gradient.sample(1.0), Rgb::new(200, 100, 0));
    }

    #[test]
    fn out_of_order_stops_are_hard_edges() {
        let gradient = Gradient::new(
            Shape::Radial,
            vec![
                ColorStop::new(Rgb::new(255, 0, 0), 50),
                ColorStop::new(Rgb::new(0, 0, 255), 10),
            ],
        );
        assert_eq!(gradient.sample(0.49), Rgb::new(255, 0, 0));
        assert_eq!(gradient.sample(0.51), Rgb::new(0, 0, 255));
    }

    #[test]
    fn empty_gradient_samples_black() {
        let gradient = Gradient::new(Shape::Radial, vec![]);
        assert_eq!(gradient.sample(0.5), Rgb::new(0, 0, 0));
    }

    #[test]
    fn linear_progress() {
        let size = Size::new(200.0, 100.0);

        let to_right = Gradient::new(Shape::Linear(Direction::ToRight), vec![]);
        assert_component_eq!(to_right.progress_at(Point::new(0.0, 50.0), size), 0.0);
        assert_component_eq!(to_right.progress_at(Point::new(100.0, 0.0), size), 0.5);
        assert_component_eq!(to_right.progress_at(Point::new(200.0, 100.0), size), 1.0);

        let to_top = Gradient::new(Shape::Linear(Direction::ToTop), vec![]);
        assert_component_eq!(to_top.progress_at(Point::new(10.0, 100.0), size), 0.0);
        assert_component_eq!(to_top.progress_at(Point::new(10.0, 0.0), size), 1.0);

        // The corners not on the gradient line sit exactly halfway.
        let corner = Gradient::new(Shape::Linear(Direction::ToBottomRight), vec![]);
        assert_component_eq!(corner.progress_at(Point::new(200.0, 0.0), size), 0.5);
        assert_component_eq!(corner.progress_at(Point::new(0.0, 100.0), size), 0.5);
        assert_component_eq!(corner.progress_at(Point::new(0.0, 0.0), size), 0.0);
        assert_component_eq!(corner.progress_at(Point::new(200.0, 100.0), size), 1.0);
    }

    #[test]
    fn radial_progress() {
        let size = Size::new(60.0, 80.0);
        let gradient = Gradient::new(Shape::Radial, vec![]);
        assert_component_eq!(gradient.progress_at(Point::new(30.0, 40.0), size), 0.0);
        assert_component_eq!(gradient.progress_at(Point::new(0.0, 0.0), size), 1.0);
        // Radius is 50, so 25 away is halfway.
        assert_component_eq!(gradient.progress_at(Point::new(30.0, 65.0), size), 0.5);
    }

    #[test]
    fn randomize_picks_swatches() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut gradient = Gradient::default();
        gradient.randomize(&mut rng);

        assert_eq!(gradient.stops.len(), 3);
        assert!(gradient.stops.iter().all(|stop| SWATCHES.contains(&stop.color)));
        assert_eq!(
            gradient.stops.iter().map(|s| s.position).collect::<Vec<_>>(),
            vec![0, 50, 100]
        );
    }
}
