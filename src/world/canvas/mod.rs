mod options;

pub use options::{ppm_header, CanvasOptions, FillFn, HeaderFn};

use std::fmt;
use std::io::Write;
use std::ops::{Index, IndexMut};

use crate::error::{CanvasError, Result};

use super::{Color, Drawable};

/// A fixed-size grid of drawable cells.
///
/// Cells are stored row-major: `(x, y)` lives at `x + y * width`. The grid
/// is never resized. Coordinates outside the grid are a caller bug and make
/// [`Canvas::get`], [`Canvas::set`] and indexing panic; [`Canvas::try_get`]
/// reports them as an error instead.
pub struct Canvas<D = Color> {
    width: usize,
    height: usize,
    contents: Vec<D>,
    header: HeaderFn<D>,
    separator: String,
}

impl<D: Default + 'static> Canvas<D> {
    /// Creates a canvas filled with `D::default()` and the default PPM
    /// header and separator.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_options(width, height, CanvasOptions::default())
    }
}

impl<D> Canvas<D> {
    /// Creates a canvas, running `options.fill` once per cell in row-major
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    #[must_use]
    pub fn with_options(width: usize, height: usize, options: CanvasOptions<D>) -> Self {
        let CanvasOptions {
            mut fill,
            header,
            separator,
        } = options;

        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("canvas size {width}x{height} overflows usize"));
        let contents = (0..len).map(|i| fill(i % width, i / width)).collect();

        tracing::debug!(width, height, "created canvas");

        Self {
            width,
            height,
            contents,
            header,
            separator,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns every cell in row-major order.
    #[must_use]
    pub fn contents(&self) -> &[D] {
        &self.contents
    }

    /// Returns the separator written after each cell.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> &D {
        &self.contents[self.offset(x, y)]
    }

    /// Returns a mutable reference to the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut D {
        let i = self.offset(x, y);
        &mut self.contents[i]
    }

    /// Replaces the cell at `(x, y)`, returning the canvas for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, value: D) -> &mut Self {
        *self.get_mut(x, y) = value;
        self
    }

    /// Returns the cell at `(x, y)`, or an error if it lies outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn try_get(&self, x: usize, y: usize) -> Result<&D> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y).into());
        }
        Ok(&self.contents[self.offset(x, y)])
    }

    /// Returns whether `(x, y)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(self.contains(x, y), "{}", self.out_of_bounds(x, y));
        x + y * self.width
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl<D: Drawable> Canvas<D> {
    /// Serializes the whole canvas into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell fails to serialize or emits invalid UTF-8.
    pub fn to_ppm(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_ppm(&mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

/// Writes the header, then each cell followed by the separator.
impl<D: Drawable> Drawable for Canvas<D> {
    fn write_ppm(&self, out: &mut dyn Write) -> std::io::Result<()> {
        tracing::trace!(cells = self.contents.len(), "writing PPM");

        out.write_all((self.header)(self).as_bytes())?;
        for cell in &self.contents {
            cell.write_ppm(out)?;
            out.write_all(self.separator.as_bytes())?;
        }
        Ok(())
    }
}

impl<D> Index<(usize, usize)> for Canvas<D> {
    type Output = D;

    fn index(&self, (x, y): (usize, usize)) -> &D {
        self.get(x, y)
    }
}

impl<D> IndexMut<(usize, usize)> for Canvas<D> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut D {
        self.get_mut(x, y)
    }
}

impl<D: fmt::Debug> fmt::Debug for Canvas<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("separator", &self.separator)
            .field("contents", &self.contents)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RaycoreError;
    use approx::assert_abs_diff_eq;

    fn scenario_canvas() -> Canvas {
        let mut c = Canvas::new(5, 3);
        c.set(0, 0, Color::new(1.0, 0.0, 0.0))
            .set(2, 1, Color::new(0.0, 0.5, 0.0))
            .set(4, 2, Color::new(-0.5, 0.0, 1.0));
        c
    }

    #[test]
    fn new_canvas_is_black() {
        let c: Canvas = Canvas::new(5, 3);
        assert_eq!(c.width(), 5);
        assert_eq!(c.height(), 3);
        assert_eq!(c.contents().len(), 15);
        for y in 0..3 {
            for x in 0..5 {
                assert_abs_diff_eq!(*c.get(x, y), Color::black());
            }
        }
    }

    #[test]
    fn write_and_read_pixel() {
        let mut c: Canvas = Canvas::new(10, 20);
        let red = Color::new(1.0, 0.0, 0.0);
        c.set(2, 3, red);
        assert_abs_diff_eq!(c[(2, 3)], red);
        assert_abs_diff_eq!(c.contents()[2 + 3 * 10], red);

        c[(9, 19)] = Color::white();
        assert_abs_diff_eq!(*c.get(9, 19), Color::white());
    }

    #[test]
    fn ppm_header_lines() {
        let ppm = Canvas::<Color>::new(5, 3).to_ppm().unwrap();
        assert!(ppm.starts_with("P3\n5 3\n255\n"));
    }

    #[test]
    fn ppm_pixel_data() {
        let ppm = scenario_canvas().to_ppm().unwrap();
        let lines: Vec<&str> = ppm.split('\n').collect();
        assert_eq!(
            lines[3..18],
            [
                "255 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 128 0",
                "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 0", "0 0 255",
            ]
        );
    }

    #[test]
    fn ppm_ends_with_newline() {
        let ppm = scenario_canvas().to_ppm().unwrap();
        assert!(ppm.ends_with("0 0 255\n"));
    }

    #[test]
    fn serialization_is_idempotent() {
        let c = scenario_canvas();
        let mut first = Vec::new();
        let mut second = Vec::new();
        c.write_ppm(&mut first).unwrap();
        c.write_ppm(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn fill_runs_row_major() {
        let mut calls = Vec::new();
        let options = CanvasOptions::new(|x, y| Color::new(x as f64, y as f64, 0.0));
        let c = Canvas::with_options(3, 2, options);
        for cell in c.contents() {
            calls.push((cell.red(), cell.green()));
        }
        assert_eq!(
            calls,
            [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]
        );
    }

    #[test]
    fn dense_fill_serializes_every_cell() {
        let options = CanvasOptions::new(|_, _| Color::new(1.0, 0.8, 0.6));
        let ppm = Canvas::with_options(10, 2, options).to_ppm().unwrap();
        let lines: Vec<&str> = ppm.lines().skip(3).collect();
        assert_eq!(lines, vec!["255 204 153"; 20]);
    }

    #[test]
    fn custom_header_and_separator() {
        let options = CanvasOptions::<Color>::default()
            .with_header(|c| format!("{}x{}:", c.width(), c.height()))
            .with_separator(";");
        let mut c = Canvas::with_options(2, 1, options);
        c.set(1, 0, Color::white());
        assert_eq!(c.to_ppm().unwrap(), "2x1:0 0 0;255 255 255;");
    }

    #[test]
    fn boxed_cells_are_drawable() {
        struct Marker;

        impl Drawable for Marker {
            fn write_ppm(&self, out: &mut dyn Write) -> std::io::Result<()> {
                out.write_all(b"*")
            }
        }

        let options = CanvasOptions::new(|x, _| -> Box<dyn Drawable> {
            if x == 0 {
                Box::new(Marker)
            } else {
                Box::new(Color::black())
            }
        })
        .with_header(|_| String::new())
        .with_separator(" ");
        let c = Canvas::with_options(2, 1, options);
        assert_eq!(c.to_ppm().unwrap(), "* 0 0 0 ");
    }

    #[test]
    fn try_get_reports_out_of_bounds() {
        let c: Canvas = Canvas::new(5, 3);
        assert!(c.try_get(4, 2).is_ok());
        let err = c.try_get(5, 0).unwrap_err();
        assert!(matches!(
            err,
            RaycoreError::Canvas(CanvasError::OutOfBounds {
                x: 5,
                y: 0,
                width: 5,
                height: 3
            })
        ));
    }

    #[test]
    #[should_panic(expected = "outside the 5x3 canvas")]
    fn get_past_row_end_does_not_wrap() {
        let c: Canvas = Canvas::new(5, 3);
        // (5, 0) would alias (0, 1) under plain index arithmetic.
        let _ = c.get(5, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 5x3 canvas")]
    fn set_below_last_row_panics() {
        let mut c: Canvas = Canvas::new(5, 3);
        c.set(0, 3, Color::white());
    }

    #[test]
    fn empty_canvas_serializes_header_only() {
        let c: Canvas = Canvas::new(0, 4);
        assert!(c.contents().is_empty());
        assert_eq!(c.to_ppm().unwrap(), "P3\n0 4\n255\n");
    }
}
