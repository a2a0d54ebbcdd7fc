#![allow(
    clippy::module_inception,
    clippy::manual_range_contains,
    clippy::neg_cmp_op_on_partial_ord
)]

//! chroma-tier: quality-tiered perceptual pixel transforms
//!
//! This library turns an RGB raster into one that compresses better, by
//! spending its error budget where the eye is least sensitive: the chroma
//! planes. A single quality scalar in `[0, 1]` selects every filter and
//! quantizer setting.
//!
//! # Quick Start
//!
//! The [`TierCompressor`] builder is the primary entry point:
//!
//! ```
//! use chroma_tier::{PaletteDecision, Quality, Raster, Rgb, TierCompressor};
//!
//! let pixels = vec![Rgb::new(40, 90, 200); 64];
//! let raster = Raster::new(8, 8, pixels).unwrap();
//!
//! let result = TierCompressor::new(Quality::new(0.8).unwrap()).process(raster);
//! assert_eq!(result.rgb.width(), 8);
//! match result.decision {
//!     PaletteDecision::Indexed(image) => assert!(image.palette().len() <= 256),
//!     PaletteDecision::Truecolor => {}
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Raster<Rgb>
//!     |
//!     v
//! Raster<YCbCr>            (BT.601 full range)
//!     |
//!     +---> pre-filter denoise   (chroma blur sigma 0.4, quality <= 0.6)
//!     +---> tier blur            (chroma only, separable Gaussian)
//!     +---> subsample            (chroma block average, dense raster)
//!     +---> quantize             (luma Bayer-dithered in the dithered path)
//!     |
//!     v
//! Raster<Rgb>              (rounded to multiples of 2 or 4)
//!     |
//!     v
//! PaletteDecision          (indexed if <= 256 colors, else truecolor)
//! ```
//!
//! # Quality Tiers
//!
//! [`plan`] maps a [`Quality`] to a [`TierParams`] record. At 0.7 and above
//! the near-lossless tier keeps nearly every level, always dithers luma and
//! subsamples chroma 2x. Below 0.7 the levels fall off quickly, chroma blocks
//! grow up to 8x and dithering switches off in the lower half of the range.
//!
//! The individual stages are exposed for callers that need a different
//! arrangement, for example [`denoise_rgb`] for encoders that only want the
//! light chroma denoise.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod raster;
pub mod tier;


pub use api::{CompressedRaster, CoreError, Stage, TierCompressor};
pub use color::{Rgb, RgbRounding, YCbCr};
pub use dither::{
    bayer_offset, ordered_dither, quantize, quantize_raster, quantize_step, round_even, BAYER_4X4,
};
pub use output::IndexedImage;
pub use palette::{
    reduce, ColorCensus, IndexedPalette, PaletteDecision, PaletteError, MAX_PALETTE_COLORS,
};
pub use preprocess::{
    chroma_blur, chroma_subsample, denoise_rgb, gaussian_kernel, MIN_BLUR_SIGMA,
};
pub use raster::{Raster, RasterError};
pub use tier::{
    denoise_sigma, jpeg_quality, plan, Quality, QualityError, Tier, TierParams, DENOISE_SIGMA,
    DENOISE_THRESHOLD, NEAR_LOSSLESS_THRESHOLD,
};
