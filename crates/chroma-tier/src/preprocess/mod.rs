//! Chroma-plane filtering.
//!
//! Both filters touch only `cb` and `cr`; luma passes through untouched.
//!
//! 1. **Blur** ([`chroma_blur`]) - separable Gaussian, edge-clamped
//! 2. **Subsample** ([`chroma_subsample`]) - block averaging broadcast back
//!    over a dense raster, so dimensions never change
//!
//! [`denoise_rgb`] wraps the blur in an RGB -> YCbCr -> RGB round trip for
//! callers that never leave RGB (the JPEG path).
//!
//! # Example
//!
//! ```
//! use chroma_tier::{chroma_blur, chroma_subsample, Raster, Rgb};
//!
//! let rgb = Raster::new(4, 4, vec![Rgb::new(200, 30, 90); 16]).unwrap();
//! let mut ycc = rgb.to_ycbcr();
//! chroma_blur(&mut ycc, 0.7);
//! chroma_subsample(&mut ycc, 2);
//! assert_eq!(ycc.len(), 16);
//! ```

mod blur;
mod subsample;

pub use blur::{chroma_blur, gaussian_kernel, MIN_BLUR_SIGMA};
pub use subsample::chroma_subsample;

use crate::color::{Rgb, RgbRounding};
use crate::raster::Raster;

/// Blur the chroma of an RGB raster in place.
///
/// Converts to YCbCr, runs [`chroma_blur`] and converts back with nearest
/// rounding. A sigma below [`MIN_BLUR_SIGMA`] leaves the raster untouched
/// without converting at all.
pub fn denoise_rgb(raster: &mut Raster<Rgb>, sigma: f32) {
    if !(sigma >= MIN_BLUR_SIGMA) {
        return;
    }
    let mut ycc = raster.to_ycbcr();
    chroma_blur(&mut ycc, sigma);
    let rgb = ycc.to_rgb(RgbRounding::Nearest);
    raster.pixels_mut().copy_from_slice(rgb.pixels());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denoise_keeps_flat_image() {
        let mut raster = Raster::new(5, 3, vec![Rgb::new(90, 160, 30); 15]).unwrap();
        let before = raster.clone();
        denoise_rgb(&mut raster, 0.4);
        assert_eq!(raster, before);
    }

    #[test]
    fn test_denoise_softens_chroma_edge() {
        // 8x2: left half red, right half blue, split at x = 4
        let pixels: Vec<Rgb> = (0..16)
            .map(|i| if i % 8 < 4 { Rgb::new(255, 0, 0) } else { Rgb::new(0, 0, 255) })
            .collect();
        let mut raster = Raster::new(8, 2, pixels).unwrap();
        denoise_rgb(&mut raster, 0.4);
        let edge = raster.get(3, 0).copied().unwrap();
        assert_ne!(edge, Rgb::new(255, 0, 0), "edge pixel should pick up some blue");
        assert_eq!(raster.get(0, 0), Some(&Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_denoise_below_threshold_is_noop() {
        let pixels: Vec<Rgb> = (0..9).map(|i| Rgb::new(i * 20, 255 - i * 20, i)).collect();
        let mut raster = Raster::new(3, 3, pixels).unwrap();
        let before = raster.clone();
        denoise_rgb(&mut raster, 0.05);
        assert_eq!(raster, before);
    }
}
