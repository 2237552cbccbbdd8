//! Projectile demo: fires a projectile through gravity and wind, plots its
//! path on a canvas and writes the PPM image to stdout.
//!
//! ```text
//! cargo run --example projectile > projectile.ppm
//! RUST_LOG=raycore=trace cargo run --example projectile > projectile.ppm
//! ```

use std::io::{self, BufWriter, Write};

use raycore::{Canvas, Color, Drawable, Point, Tuple, Vector};

const WIDTH: usize = 900;
const HEIGHT: usize = 550;

struct Projectile {
    position: Point,
    velocity: Vector,
}

struct Environment {
    gravity: Vector,
    wind: Vector,
}

impl Projectile {
    fn tick(&mut self, env: &Environment) {
        self.position += self.velocity;
        self.velocity += env.gravity + env.wind;
    }
}

/// Maps a world position to canvas coordinates, with y growing downwards.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixel(point: Point, height: usize) -> Option<(usize, usize)> {
    let (x, y) = (point.x().round(), point.y().round());
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let y = y as usize;
    if y >= height {
        return None;
    }
    Some((x as usize, height - 1 - y))
}

fn main() -> raycore::Result<()> {
    // Logs go to stderr so they never mix with the image on stdout.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let env = Environment {
        gravity: Vector::new(0.0, -0.1, 0.0),
        wind: Vector::new(-0.01, 0.0, 0.0),
    };
    let mut projectile = Projectile {
        position: Point::new(0.0, 1.0, 0.0),
        velocity: Vector::new(1.0, 1.8, 0.0).normalized() * 11.25,
    };

    let mut canvas: Canvas = Canvas::new(WIDTH, HEIGHT);
    let trail = Color::new(1.0, 0.8, 0.6);
    let mut ticks = 0_u32;
    while projectile.position.y() > 0.0 {
        if let Some((x, y)) = to_pixel(projectile.position, HEIGHT) {
            if canvas.contains(x, y) {
                canvas.set(x, y, trail);
            }
        }
        projectile.tick(&env);
        ticks += 1;
    }
    tracing::info!(ticks, "projectile landed");

    let mut out = BufWriter::new(io::stdout().lock());
    canvas.write_ppm(&mut out)?;
    out.flush()?;
    Ok(())
}
