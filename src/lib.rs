//! Numeric foundation for a ray tracer: points, vectors and colors over a
//! shared three-component representation, plus a canvas that serializes to
//! plain-text PPM.

pub mod error;
pub mod math;
pub mod world;

pub use error::{CanvasError, RaycoreError, Result};
pub use math::{Interval, Point, Tuple, Vector, EPSILON};
pub use world::{Canvas, CanvasOptions, Color, Drawable};
