use std::fmt;

use crate::world::MAX_COLOR;

use super::Canvas;

/// Produces the initial value of the cell at `(x, y)`.
pub type FillFn<D> = Box<dyn FnMut(usize, usize) -> D>;

/// Produces the text written before the first cell.
pub type HeaderFn<D> = Box<dyn Fn(&Canvas<D>) -> String>;

/// Construction-time configuration of a [`Canvas`].
///
/// Every field can be replaced by the caller. The defaults produce a black
/// canvas that serializes as a `P3` pixmap with one cell per line.
pub struct CanvasOptions<D> {
    /// Called once per cell, in row-major order, with the cell's `(x, y)`.
    pub fill: FillFn<D>,
    /// Builds the header from the finished canvas.
    pub header: HeaderFn<D>,
    /// Written after every serialized cell.
    pub separator: String,
}

impl<D: 'static> CanvasOptions<D> {
    /// Creates options with the given fill and the default `P3` header and
    /// newline separator.
    #[must_use]
    pub fn new(fill: impl FnMut(usize, usize) -> D + 'static) -> Self {
        Self {
            fill: Box::new(fill),
            header: Box::new(ppm_header::<D>),
            separator: "\n".to_owned(),
        }
    }

    /// Replaces the fill function.
    #[must_use]
    pub fn with_fill(mut self, fill: impl FnMut(usize, usize) -> D + 'static) -> Self {
        self.fill = Box::new(fill);
        self
    }

    /// Replaces the header function.
    #[must_use]
    pub fn with_header(mut self, header: impl Fn(&Canvas<D>) -> String + 'static) -> Self {
        self.header = Box::new(header);
        self
    }

    /// Replaces the separator written after each cell.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<D: Default + 'static> Default for CanvasOptions<D> {
    fn default() -> Self {
        Self::new(|_, _| D::default())
    }
}

impl<D> fmt::Debug for CanvasOptions<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasOptions")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

/// The plain `P3` preamble: magic, dimensions and maximum channel value.
#[must_use]
pub fn ppm_header<D>(canvas: &Canvas<D>) -> String {
    format!("P3\n{} {}\n{MAX_COLOR}\n", canvas.width(), canvas.height())
}
