//! TierCompressor builder: the quality-driven transform in one call.

use std::fmt;

use crate::color::Rgb;
use crate::dither::quantize_raster;
use crate::palette::{reduce, PaletteDecision};
use crate::preprocess::{chroma_blur, chroma_subsample};
use crate::raster::Raster;
use crate::tier::{denoise_sigma, plan, Quality, TierParams};

use super::error::CoreError;

/// Pipeline stages reported by [`TierCompressor::process_observed`], in the
/// order they complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// RGB converted into the YCbCr working raster
    ColorConverted,
    /// Pre-filter denoise, tier blur and chroma subsampling done
    Filtered,
    /// Levels quantized (and luma dithered, if the tier asks for it)
    Quantized,
    /// Working raster converted back to RGB with perceptual rounding
    Reconstructed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ColorConverted => "color-converted",
            Stage::Filtered => "filtered",
            Stage::Quantized => "quantized",
            Stage::Reconstructed => "reconstructed",
        };
        f.write_str(name)
    }
}

/// Result of [`TierCompressor::process`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedRaster {
    /// Reconstructed RGB raster, same dimensions as the input
    pub rgb: Raster<Rgb>,
    /// Parameters the raster was processed with
    pub params: TierParams,
    /// Sigma of the pre-filter denoise, if it ran
    pub denoise_sigma: Option<f32>,
    /// Indexed or truecolor, with the palette and indices when indexed
    pub decision: PaletteDecision,
}

/// Quality-tiered lossy transform over an RGB raster.
///
/// The constructor takes a validated [`Quality`] and plans the tier
/// parameters from it. Configuration methods consume and return `self`;
/// [`process`](Self::process) takes `&self`, so one compressor can be reused
/// across images.
///
/// # Example
///
/// ```
/// use chroma_tier::{PaletteDecision, Quality, Raster, Rgb, TierCompressor};
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// let pixels = (0..16).map(|i| if i % 2 == 0 { black } else { white }).collect();
/// let raster = Raster::new(4, 4, pixels).unwrap();
///
/// let result = TierCompressor::new(Quality::MAX).process(raster);
/// assert_eq!(result.decision.palette_len(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct TierCompressor {
    quality: Quality,
    params: TierParams,
    pre_denoise: bool,
}

impl TierCompressor {
    /// Create a compressor with parameters planned from `quality`.
    /// The pre-filter denoise is enabled.
    pub fn new(quality: Quality) -> Self {
        Self {
            quality,
            params: plan(quality),
            pre_denoise: true,
        }
    }

    /// Validate a raw quality value and create a compressor from it.
    pub fn from_quality(value: f32) -> Result<Self, CoreError> {
        Ok(Self::new(Quality::new(value)?))
    }

    /// Replace the planned parameters.
    #[inline]
    pub fn params(mut self, params: TierParams) -> Self {
        self.params = params;
        self
    }

    /// Enable or disable the pre-filter chroma denoise.
    #[inline]
    pub fn pre_denoise(mut self, enabled: bool) -> Self {
        self.pre_denoise = enabled;
        self
    }

    #[inline]
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Parameters [`process`](Self::process) will use.
    #[inline]
    pub fn tier_params(&self) -> &TierParams {
        &self.params
    }

    /// Sigma of the pre-filter denoise, or `None` when it is disabled or the
    /// quality is too high for it.
    #[inline]
    pub fn denoise_sigma(&self) -> Option<f32> {
        if self.pre_denoise {
            denoise_sigma(self.quality)
        } else {
            None
        }
    }

    /// Run the full transform and palette reduction.
    pub fn process(&self, raster: Raster<Rgb>) -> CompressedRaster {
        self.process_observed(raster, |_| {})
    }

    /// Wrap an interleaved `[R, G, B, ...]` buffer and run [`process`](Self::process).
    pub fn process_bytes(
        &self,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<CompressedRaster, CoreError> {
        let raster = Raster::new(width, height, Rgb::from_interleaved(data))?;
        Ok(self.process(raster))
    }

    /// Like [`process`](Self::process), calling `observe` as each [`Stage`]
    /// completes.
    pub fn process_observed<F>(&self, raster: Raster<Rgb>, mut observe: F) -> CompressedRaster
    where
        F: FnMut(Stage),
    {
        let params = self.params;

        let mut ycc = raster.to_ycbcr();
        drop(raster);
        observe(Stage::ColorConverted);

        let denoise = self.denoise_sigma();
        if let Some(sigma) = denoise {
            chroma_blur(&mut ycc, sigma);
        }
        if params.blur_sigma > 0.0 {
            chroma_blur(&mut ycc, params.blur_sigma);
        }
        chroma_subsample(&mut ycc, params.subsample_factor);
        observe(Stage::Filtered);

        quantize_raster(&mut ycc, &params);
        observe(Stage::Quantized);

        let rgb = ycc.to_rgb(params.rounding());
        drop(ycc);
        observe(Stage::Reconstructed);

        let decision = reduce(&rgb);
        CompressedRaster {
            rgb,
            params,
            denoise_sigma: denoise,
            decision,
        }
    }
}
