//! Palette indices with dimension metadata.

use crate::color::Rgb;
use crate::palette::{IndexedPalette, PaletteError};
use crate::raster::Raster;

/// An image expressed as palette indices.
///
/// Stores one `u8` index per pixel in row-major order, the image dimensions
/// and the owned palette. Every index is in `0..palette.len()`.
///
/// # Example
///
/// ```
/// use chroma_tier::{IndexedImage, IndexedPalette, Raster, Rgb};
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// let palette = IndexedPalette::from_colors(&[black, white]).unwrap();
/// let raster = Raster::new(2, 1, vec![white, black]).unwrap();
///
/// let image = IndexedImage::from_raster(&raster, palette).unwrap();
/// assert_eq!(image.indices(), &[1, 0]);
/// assert_eq!(image.to_rgb(), raster);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    indices: Raster<u8>,
    palette: IndexedPalette,
}

impl IndexedImage {
    /// Map every pixel of `raster` through `palette`.
    ///
    /// Fails with [`PaletteError::ColorNotInPalette`] on the first pixel
    /// whose color has no entry.
    pub fn from_raster(raster: &Raster<Rgb>, palette: IndexedPalette) -> Result<Self, PaletteError> {
        if let Some(&color) = raster
            .pixels()
            .iter()
            .find(|&&c| palette.index_of(c).is_none())
        {
            return Err(PaletteError::ColorNotInPalette { color });
        }
        let indices = raster.map_ref(|&c| palette.index_of(c).unwrap_or(0));
        Ok(Self { indices, palette })
    }

    /// Palette indices, one per pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        self.indices.pixels()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.indices.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.indices.height()
    }

    #[inline]
    pub fn palette(&self) -> &IndexedPalette {
        &self.palette
    }

    /// Rows of indices, `width` entries each. Convenient for encoders that
    /// want scanlines.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics
        let width = self.width().max(1);
        self.indices().chunks(width)
    }

    /// Expand back into an RGB raster by looking up every index.
    pub fn to_rgb(&self) -> Raster<Rgb> {
        self.indices
            .map_ref(|&idx| self.palette.color(idx).unwrap_or_default())
    }
}
