//! Quality tier planning.
//!
//! A single [`Quality`] scalar in `[0, 1]` (1 = best) drives every numeric
//! knob of the pipeline. [`plan`] maps it to an immutable [`TierParams`]
//! record in one of two regimes:
//!
//! | Quality      | Tier                       | Character                        |
//! |--------------|----------------------------|----------------------------------|
//! | `>= 0.7`     | [`Tier::NearLossless`]     | fine levels, 2x chroma, dithered |
//! | `< 0.7`      | [`Tier::Visible`]          | coarse levels, up to 8x chroma   |
//!
//! Two adjustments sit outside the tier record because they key off the raw
//! quality rather than the tier: the pre-filter chroma denoise
//! ([`denoise_sigma`]) and the JPEG quality mapping ([`jpeg_quality`]).

mod params;
mod quality;

pub use params::{Tier, TierParams};
pub use quality::{Quality, QualityError};

/// Quality at or above which the near-lossless tier applies.
pub const NEAR_LOSSLESS_THRESHOLD: f32 = 0.7;

/// Tolerance on [`NEAR_LOSSLESS_THRESHOLD`] so that `0.7` parsed from text
/// lands in the near-lossless tier.
const TIER_EPSILON: f32 = 1e-6;

/// Quality at or below which the pre-filter denoise runs.
pub const DENOISE_THRESHOLD: f32 = 0.6;

/// Chroma blur sigma of the pre-filter denoise.
pub const DENOISE_SIGMA: f32 = 0.4;

/// Quality above which RGB is rounded to multiples of 2 instead of 4.
const FINE_ROUNDING_THRESHOLD: f32 = 0.4;

/// Map a quality to the concrete parameters for the chroma filter and
/// quantizer. Pure; every valid quality yields a valid parameter set.
///
/// # Example
///
/// ```
/// use chroma_tier::{plan, Quality, Tier};
///
/// let params = plan(Quality::new(0.0).unwrap());
/// assert_eq!(params.tier, Tier::Visible);
/// assert_eq!(params.luma_levels, 4);
/// assert_eq!(params.chroma_levels, 2);
/// assert_eq!(params.subsample_factor, 8);
/// assert!(!params.use_dithering);
/// ```
pub fn plan(quality: Quality) -> TierParams {
    let q = quality.get();
    let inv = 1.0 - q;
    let rgb_round_multiple = if q > FINE_ROUNDING_THRESHOLD { 2 } else { 4 };

    if q >= NEAR_LOSSLESS_THRESHOLD - TIER_EPSILON {
        // 0 at quality 1.0, 1 at quality 0.7
        let t = (inv / 0.3).clamp(0.0, 1.0);
        TierParams {
            tier: Tier::NearLossless,
            luma_levels: 256 - (t * 64.0).round() as u32,
            chroma_levels: 256 - (t * 192.0).round() as u32,
            subsample_factor: 2,
            blur_sigma: t * 0.7,
            use_dithering: true,
            rgb_round_multiple,
        }
    } else {
        // 0 at quality 0.7, 1 at quality 0.0
        let t = ((inv - 0.3) / 0.7).clamp(0.0, 1.0);
        TierParams {
            tier: Tier::Visible,
            luma_levels: 192u32.saturating_sub((t * 188.0).round() as u32).max(4),
            chroma_levels: 64u32.saturating_sub((t * 62.0).round() as u32).max(2),
            subsample_factor: 2 + (t * 6.0).round() as usize,
            blur_sigma: 0.7 + t * 0.6,
            use_dithering: t < 0.5,
            rgb_round_multiple,
        }
    }
}

/// Sigma of the light chroma denoise applied before any tier processing,
/// or `None` when the quality is high enough to skip it.
pub fn denoise_sigma(quality: Quality) -> Option<f32> {
    (quality.get() <= DENOISE_THRESHOLD).then_some(DENOISE_SIGMA)
}

/// Map a quality to a JPEG encoder quality in `50..=95`
/// (clamped to `1..=100` for safety).
///
/// ```
/// use chroma_tier::{jpeg_quality, Quality};
///
/// assert_eq!(jpeg_quality(Quality::new(0.0).unwrap()), 50);
/// assert_eq!(jpeg_quality(Quality::new(1.0).unwrap()), 95);
/// ```
pub fn jpeg_quality(quality: Quality) -> u8 {
    let q = 50 + (quality.get() * 45.0).round() as i32;
    q.clamp(1, 100) as u8
}
