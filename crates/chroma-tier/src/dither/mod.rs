//! Level quantization with optional ordered dithering.
//!
//! Every YCbCr channel is snapped onto an evenly spaced grid of `levels`
//! values spanning 0..=255. When the tier asks for dithering, luma is first
//! perturbed by a 4x4 Bayer threshold scaled to the grid step, which turns
//! banding into a fine regular texture, and is then rounded to an even value.
//! Chroma is never dithered.
//!
//! # Example
//!
//! ```
//! use chroma_tier::{quantize, quantize_step};
//!
//! // 4 levels: 0, 85, 170, 255
//! assert_eq!(quantize_step(4), 85.0);
//! assert_eq!(quantize(100.0, 4), 85.0);
//! assert_eq!(quantize(130.0, 4), 170.0);
//! ```

mod bayer;
mod quantize;

pub use bayer::{bayer_offset, ordered_dither, round_even, BAYER_4X4};
pub use quantize::{quantize, quantize_step};

use crate::color::YCbCr;
use crate::raster::Raster;
use crate::tier::TierParams;

/// Quantize every channel of the raster in place according to `params`.
///
/// With `params.use_dithering` set, luma goes through
/// [`ordered_dither`] -> [`quantize`] -> [`round_even`]; otherwise all
/// channels are quantized directly.
pub fn quantize_raster(raster: &mut Raster<YCbCr>, params: &TierParams) {
    let w = raster.width();
    let luma = params.luma_levels;
    let chroma = params.chroma_levels;

    if params.use_dithering {
        for (i, px) in raster.pixels_mut().iter_mut().enumerate() {
            let (x, y) = (i % w, i / w);
            let dithered = ordered_dither(px.y, x, y, luma);
            px.y = round_even(quantize(dithered, luma));
            px.cb = quantize(px.cb, chroma);
            px.cr = quantize(px.cr, chroma);
        }
    } else {
        for px in raster.pixels_mut() {
            px.y = quantize(px.y, luma);
            px.cb = quantize(px.cb, chroma);
            px.cr = quantize(px.cr, chroma);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    fn params(luma: u32, chroma: u32, dither: bool) -> TierParams {
        TierParams {
            tier: Tier::Visible,
            luma_levels: luma,
            chroma_levels: chroma,
            subsample_factor: 1,
            blur_sigma: 0.0,
            use_dithering: dither,
            rgb_round_multiple: 2,
        }
    }

    fn gradient(w: usize, h: usize) -> Raster<YCbCr> {
        let pixels = (0..w * h)
            .map(|i| {
                let v = (i * 255 / (w * h - 1)) as f32;
                YCbCr::new(v, 255.0 - v, v * 0.5 + 40.0)
            })
            .collect();
        Raster::new(w, h, pixels).unwrap()
    }

    #[test]
    fn test_undithered_values_on_grid() {
        let mut raster = gradient(8, 8);
        quantize_raster(&mut raster, &params(4, 2, false));
        for px in raster.pixels() {
            assert!([0.0, 85.0, 170.0, 255.0].contains(&px.y), "luma {}", px.y);
            assert!([0.0, 255.0].contains(&px.cb), "cb {}", px.cb);
            assert!([0.0, 255.0].contains(&px.cr), "cr {}", px.cr);
        }
    }

    #[test]
    fn test_dithered_luma_is_even_and_in_range() {
        let mut raster = gradient(16, 16);
        quantize_raster(&mut raster, &params(192, 64, true));
        for px in raster.pixels() {
            // 255 is the one odd value: 256 clamps back into range
            assert!(px.y % 2.0 == 0.0 || px.y == 255.0, "luma {} not even", px.y);
            assert!((0.0..=255.0).contains(&px.y));
        }
    }

    #[test]
    fn test_dither_leaves_chroma_undithered() {
        let mut dithered = gradient(8, 8);
        let mut plain = dithered.clone();
        quantize_raster(&mut dithered, &params(16, 16, true));
        quantize_raster(&mut plain, &params(16, 16, false));
        for (a, b) in dithered.pixels().iter().zip(plain.pixels()) {
            assert_eq!(a.cb, b.cb);
            assert_eq!(a.cr, b.cr);
        }
    }

    #[test]
    fn test_dither_breaks_up_flat_region() {
        // A flat mid-step luma should split across two neighboring levels
        let mut raster = Raster::new(4, 4, vec![YCbCr::new(42.5, 128.0, 128.0); 16]).unwrap();
        quantize_raster(&mut raster, &params(4, 256, true));
        let mut levels: Vec<f32> = raster.pixels().iter().map(|p| p.y).collect();
        levels.sort_by(|a, b| a.partial_cmp(b).unwrap());
        levels.dedup();
        assert_eq!(levels, vec![0.0, 86.0]);
    }
}
