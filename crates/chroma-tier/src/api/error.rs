//! Unified error type for the chroma-tier public API.

use std::fmt;

use crate::palette::PaletteError;
use crate::raster::RasterError;
use crate::tier::QualityError;

/// Wraps every error the crate can produce for `?` propagation in
/// application code.
///
/// # Example
///
/// ```
/// use chroma_tier::{CoreError, TierCompressor};
///
/// fn compressor(text: &str) -> Result<TierCompressor, CoreError> {
///     Ok(TierCompressor::new(text.parse()?))
/// }
///
/// assert!(compressor("0.8").is_ok());
/// assert!(matches!(compressor("2"), Err(CoreError::Quality(_))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Quality is not a finite number in `[0, 1]`
    Quality(QualityError),
    /// Pixel buffer does not match the stated dimensions
    Raster(RasterError),
    /// Palette could not be built
    Palette(PaletteError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Quality(err) => write!(f, "invalid quality: {}", err),
            CoreError::Raster(err) => write!(f, "invalid raster: {}", err),
            CoreError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::Quality(err) => Some(err),
            CoreError::Raster(err) => Some(err),
            CoreError::Palette(err) => Some(err),
        }
    }
}

impl From<QualityError> for CoreError {
    fn from(err: QualityError) -> Self {
        CoreError::Quality(err)
    }
}

impl From<RasterError> for CoreError {
    fn from(err: RasterError) -> Self {
        CoreError::Raster(err)
    }
}

impl From<PaletteError> for CoreError {
    fn from(err: PaletteError) -> Self {
        CoreError::Palette(err)
    }
}
