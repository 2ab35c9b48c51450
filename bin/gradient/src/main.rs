//! Render a CSS gradient to an image and print its declaration.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::{Rgb as Pixel, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use rand::{rngs::StdRng, SeedableRng};
use toolbench::{
    math::{Point, Size},
    parse_color, ColorStop, Component, Direction, Gradient, Palette, Rgb, Shape,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PALETTE_HEIGHT: u32 = 40;

/// Render a CSS gradient to a PNG.
#[derive(Parser, Debug)]
#[command(name = "toolbench-gradient")]
#[command(version)]
struct Args {
    /// Direction of a linear gradient, e.g. `to right`, `to bottom left` or
    /// `45deg`
    #[arg(short, long, default_value = "to right")]
    direction: Direction,

    /// Render a radial gradient instead of a linear one
    #[arg(long, conflicts_with = "direction")]
    radial: bool,

    /// Color stops as `color@position`, e.g. `#8B5CF6@0`
    #[arg(short, long = "stop", value_name = "COLOR@POS")]
    stops: Vec<String>,

    /// Replace the stop colors with random swatches
    #[arg(long)]
    randomize: bool,

    /// Seed for --randomize
    #[arg(long)]
    seed: Option<u64>,

    /// Draw a strip of shades and tints of this color under the gradient
    #[arg(long, value_name = "COLOR")]
    palette: Option<String>,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Output file
    #[arg(short, long, default_value = "gradient.png")]
    output: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_stop(text: &str) -> Result<ColorStop> {
    let (color, position) = text
        .rsplit_once('@')
        .with_context(|| format!("stop {text:?} is not in the form COLOR@POS"))?;
    let color = parse_color(color)?.to_rgb();
    let position = position
        .trim()
        .trim_end_matches('%')
        .parse::<i32>()
        .with_context(|| format!("invalid stop position in {text:?}"))?;
    Ok(ColorStop::new(color, position))
}

fn pixel(color: Rgb) -> Pixel<u8> {
    Pixel(color.to_array())
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level);

    if args.width == 0 || args.height == 0 {
        bail!("image size must not be empty");
    }

    let mut gradient = Gradient::default();
    if args.radial {
        gradient.shape = Shape::Radial;
    } else {
        gradient.shape = Shape::Linear(args.direction);
    }
    if !args.stops.is_empty() {
        gradient.stops = args
            .stops
            .iter()
            .map(|s| parse_stop(s))
            .collect::<Result<_>>()?;
    }
    if args.randomize {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        gradient.randomize(&mut rng);
    }

    println!("{}", gradient.declaration());

    let palette = args
        .palette
        .as_deref()
        .map(|color| parse_color(color).map(|c| Palette::shades_and_tints(c.to_rgb())))
        .transpose()?;

    let strip = if palette.is_some() { PALETTE_HEIGHT } else { 0 };
    let mut img = RgbImage::new(args.width, args.height + strip);

    let size = Size::new(args.width as Component, args.height as Component);
    for (x, y, px) in img.enumerate_pixels_mut() {
        if y >= args.height {
            continue;
        }
        let point = Point::new(x as Component + 0.5, y as Component + 0.5);
        *px = pixel(gradient.sample(gradient.progress_at(point, size)));
    }

    if let Some(palette) = palette {
        let count = palette.colors.len() as u32;
        let cell = (args.width / count).max(1);
        for (i, color) in palette.colors.iter().enumerate() {
            let x = i as u32 * cell;
            // The last cell takes up any remainder.
            let width = if i as u32 + 1 == count {
                args.width.saturating_sub(x).max(1)
            } else {
                cell
            };
            draw_filled_rect_mut(
                &mut img,
                Rect::at(x as i32, args.height as i32).of_size(width, PALETTE_HEIGHT),
                pixel(*color),
            );
        }
        debug!(count, "drew palette strip");
    }

    img.save(&args.output)
        .with_context(|| format!("could not write image to {}", args.output.display()))?;
    info!(path = %args.output.display(), "wrote gradient");

    Ok(())
}
