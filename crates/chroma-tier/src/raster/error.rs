//! Error type for raster construction.

use std::fmt;

/// Returned when a pixel buffer does not fit the stated dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Buffer length differs from `width * height`
    LengthMismatch {
        /// Stated width
        width: usize,
        /// Stated height
        height: usize,
        /// Actual number of pixels supplied
        len: usize,
    },
    /// `width * height` does not fit in `usize`
    DimensionsOverflow {
        /// Stated width
        width: usize,
        /// Stated height
        height: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::LengthMismatch { width, height, len } => {
                write!(
                    f,
                    "pixel buffer holds {} pixels, expected {}x{}={}",
                    len,
                    width,
                    height,
                    width * height
                )
            }
            RasterError::DimensionsOverflow { width, height } => {
                write!(f, "raster dimensions {}x{} overflow", width, height)
            }
        }
    }
}

impl std::error::Error for RasterError {}
