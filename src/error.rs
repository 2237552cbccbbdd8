use thiserror::Error;

/// Top-level error type for the raycore crate.
#[derive(Debug, Error)]
pub enum RaycoreError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialized image is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors related to canvas access.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Convenience type alias for results using [`RaycoreError`].
pub type Result<T> = std::result::Result<T, RaycoreError>;
