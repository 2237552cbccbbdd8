use std::io::Write;

/// Something that can serialize itself into the plain-text PPM format.
///
/// A canvas cell only needs this capability; the canvas never looks inside
/// its cells.
pub trait Drawable {
    /// Writes this value's PPM text to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn write_ppm(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

impl<D: Drawable + ?Sized> Drawable for Box<D> {
    fn write_ppm(&self, out: &mut dyn Write) -> std::io::Result<()> {
        (**self).write_ppm(out)
    }
}
