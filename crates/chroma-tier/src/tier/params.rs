//! Tier parameter record.

use std::fmt;

use crate::color::RgbRounding;

/// Which of the two parameter regimes a quality falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Quality >= 0.7: perceptually near-lossless, always dithered.
    NearLossless,
    /// Quality < 0.7: visible compression, heavier chroma reduction.
    Visible,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::NearLossless => write!(f, "tier 1 (near-lossless)"),
            Tier::Visible => write!(f, "tier 2 (visible compression)"),
        }
    }
}

/// Concrete parameters consumed by the chroma filter and quantizer.
///
/// Produced by [`plan`](crate::plan) and never mutated by the pipeline.
/// Fields are public so callers can build a custom record for experiments;
/// the quantizer clamps level counts to at least 2 and the subsampler treats
/// factors `<= 1` as a no-op, so any record is safe to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierParams {
    /// Regime the parameters were derived from
    pub tier: Tier,
    /// Quantization levels for luma (2..=256)
    pub luma_levels: u32,
    /// Quantization levels for both chroma channels (2..=256)
    pub chroma_levels: u32,
    /// Chroma block size in pixels (1 = no subsampling)
    pub subsample_factor: usize,
    /// Gaussian sigma of the chroma blur (0 = no blur)
    pub blur_sigma: f32,
    /// Bayer-dither luma before quantizing it
    pub use_dithering: bool,
    /// RGB channels are rounded to multiples of this on the way back
    pub rgb_round_multiple: u8,
}

impl TierParams {
    /// Rounding mode for the inverse color transform.
    #[inline]
    pub fn rounding(&self) -> RgbRounding {
        RgbRounding::Multiple(self.rgb_round_multiple)
    }
}
