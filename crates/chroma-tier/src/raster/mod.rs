//! Dense row-major pixel buffers.
//!
//! [`Raster`] is the single buffer type threaded through the pipeline. Every
//! stage owns the raster it works on and hands it to the next stage; the
//! dimensions never change along the way.

mod error;

pub use error::RasterError;

/// A `width` x `height` image stored as a row-major `Vec` of pixels.
///
/// The pixel type is generic so the same buffer carries [`Rgb`](crate::Rgb)
/// data on the way in and out and [`YCbCr`](crate::YCbCr) data while the
/// chroma filters and quantizer run.
///
/// # Invariant
///
/// `pixels.len() == width * height` always holds. It is checked once at
/// construction; no method can change the length afterwards.
///
/// # Example
///
/// ```
/// use chroma_tier::{Raster, Rgb};
///
/// let raster = Raster::new(2, 1, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(raster.width(), 2);
/// assert_eq!(raster.get(1, 0), Some(&Rgb::new(255, 255, 255)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

impl<P> Raster<P> {
    /// Wrap a pixel buffer, validating its length against the dimensions.
    pub fn new(width: usize, height: usize, pixels: Vec<P>) -> Result<Self, RasterError> {
        let expected = width
            .checked_mul(height)
            .ok_or(RasterError::DimensionsOverflow { width, height })?;
        if pixels.len() != expected {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for a zero-area raster.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    /// Mutable access to the pixels. The slice cannot be resized, so the
    /// length invariant is preserved.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Convert every pixel, consuming this raster. Dimensions carry over.
    pub fn map<Q, F>(self, f: F) -> Raster<Q>
    where
        F: FnMut(P) -> Q,
    {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.into_iter().map(f).collect(),
        }
    }

    /// Convert every pixel by reference, leaving this raster untouched.
    pub fn map_ref<Q, F>(&self, f: F) -> Raster<Q>
    where
        F: FnMut(&P) -> Q,
    {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(f).collect(),
        }
    }
}
