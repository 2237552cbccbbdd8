pub mod canvas;
mod color;
mod drawable;

pub use canvas::{Canvas, CanvasOptions};
pub use color::{Color, MAX_COLOR, MIN_COLOR};
pub use drawable::Drawable;
