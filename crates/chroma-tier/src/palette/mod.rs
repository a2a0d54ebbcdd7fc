//! Palette reduction for indexed output.
//!
//! After reconstruction the RGB buffer is scanned once. If it holds at most
//! [`MAX_PALETTE_COLORS`] distinct colors it is re-expressed as a palette
//! plus one index per pixel; otherwise the caller should emit truecolor.
//!
//! Palette order is the sorted order of packed `0xRRGGBB` values, so the
//! same input always yields the same palette and the same indices.
//!
//! # Example
//!
//! ```
//! use chroma_tier::{reduce, PaletteDecision, Raster, Rgb};
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! let raster = Raster::new(2, 2, vec![white, black, black, white]).unwrap();
//!
//! match reduce(&raster) {
//!     PaletteDecision::Indexed(image) => {
//!         assert_eq!(image.palette().len(), 2);
//!         assert_eq!(image.indices(), &[1, 0, 0, 1]);
//!     }
//!     PaletteDecision::Truecolor => unreachable!(),
//! }
//! ```

mod census;
mod error;
mod palette;

pub use census::{ColorCensus, MAX_PALETTE_COLORS};
pub use error::PaletteError;
pub use palette::IndexedPalette;

use crate::color::Rgb;
use crate::output::IndexedImage;
use crate::raster::Raster;

/// Outcome of palette reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteDecision {
    /// At most 256 colors: palette plus index buffer.
    Indexed(IndexedImage),
    /// Too many colors (or an empty image): encode the RGB raster as is.
    Truecolor,
}

impl PaletteDecision {
    #[inline]
    pub fn is_indexed(&self) -> bool {
        matches!(self, PaletteDecision::Indexed(_))
    }

    /// Number of palette entries, if indexed.
    pub fn palette_len(&self) -> Option<usize> {
        match self {
            PaletteDecision::Indexed(image) => Some(image.palette().len()),
            PaletteDecision::Truecolor => None,
        }
    }
}

/// Decide between indexed and truecolor output for a finished RGB raster.
pub fn reduce(raster: &Raster<Rgb>) -> PaletteDecision {
    let census = ColorCensus::scan(raster.pixels());
    if census.is_exceeded() || census.is_empty() {
        return PaletteDecision::Truecolor;
    }

    let palette = match IndexedPalette::from_census(&census) {
        Ok(palette) => palette,
        Err(_) => return PaletteDecision::Truecolor,
    };
    match IndexedImage::from_raster(raster, palette) {
        Ok(image) => PaletteDecision::Indexed(image),
        Err(_) => PaletteDecision::Truecolor,
    }
}
