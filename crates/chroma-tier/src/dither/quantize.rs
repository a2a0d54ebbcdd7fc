//! Uniform level quantizer.

/// Grid spacing for `levels` evenly spaced values over 0..=255.
/// Level counts below 2 are treated as 2.
#[inline]
pub fn quantize_step(levels: u32) -> f32 {
    255.0 / (levels.max(2) - 1) as f32
}

/// Snap `value` to the nearest point of the `levels`-value grid.
///
/// The result is always `k * step` for an integer `k`, and the mapping is
/// monotonic non-decreasing in `value`.
#[inline]
pub fn quantize(value: f32, levels: u32) -> f32 {
    let step = quantize_step(levels);
    (value / step).round() * step
}
