//! 4x4 Bayer ordered dithering.

use super::quantize::quantize_step;

/// Normalized 4x4 Bayer threshold matrix, indexed `[y % 4][x % 4]`.
/// Entries are `0/16 .. 15/16`.
pub const BAYER_4X4: [[f32; 4]; 4] = [
    [0.0 / 16.0, 8.0 / 16.0, 2.0 / 16.0, 10.0 / 16.0],
    [12.0 / 16.0, 4.0 / 16.0, 14.0 / 16.0, 6.0 / 16.0],
    [3.0 / 16.0, 11.0 / 16.0, 1.0 / 16.0, 9.0 / 16.0],
    [15.0 / 16.0, 7.0 / 16.0, 13.0 / 16.0, 5.0 / 16.0],
];

/// Threshold offset at `(x, y)`: the Bayer entry centered on zero and scaled
/// to one grid step of a `levels`-value quantizer.
#[inline]
pub fn bayer_offset(x: usize, y: usize, levels: u32) -> f32 {
    (BAYER_4X4[y % 4][x % 4] - 0.5) * quantize_step(levels)
}

/// Perturb `value` by the Bayer offset at `(x, y)` and clamp to 0..=255.
/// Quantize the result afterwards.
#[inline]
pub fn ordered_dither(value: f32, x: usize, y: usize, levels: u32) -> f32 {
    (value + bayer_offset(x, y, levels)).clamp(0.0, 255.0)
}

/// Round to the nearest even integer and clamp to 0..=255.
#[inline]
pub fn round_even(value: f32) -> f32 {
    ((value / 2.0).round() * 2.0).clamp(0.0, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_a_permutation() {
        let mut entries: Vec<u32> = BAYER_4X4
            .iter()
            .flatten()
            .map(|v| (v * 16.0) as u32)
            .collect();
        entries.sort_unstable();
        assert_eq!(entries, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_offsets_are_zero_mean_within_half_step() {
        let levels = 4;
        let step = quantize_step(levels);
        let mut sum = 0.0;
        for y in 0..4 {
            for x in 0..4 {
                let off = bayer_offset(x, y, levels);
                assert!(off >= -0.5 * step && off < 0.5 * step);
                sum += off;
            }
        }
        // Entries average 7.5/16, so the mean offset is -step/32
        assert!((sum / 16.0 + step / 32.0).abs() < 1e-4);
    }

    #[test]
    fn test_pattern_tiles_every_four_pixels() {
        assert_eq!(bayer_offset(1, 2, 16), bayer_offset(5, 6, 16));
        assert_eq!(bayer_offset(3, 3, 16), bayer_offset(7, 11, 16));
    }

    #[test]
    fn test_ordered_dither_clamps() {
        assert_eq!(ordered_dither(0.0, 0, 0, 4), 0.0); // offset -0.5 step
        assert_eq!(ordered_dither(255.0, 0, 3, 4), 255.0); // offset +7/16 step
    }

    #[test]
    fn test_round_even() {
        assert_eq!(round_even(3.0), 4.0);
        assert_eq!(round_even(4.9), 4.0);
        assert_eq!(round_even(255.0), 255.0); // 256 clamps back
        assert_eq!(round_even(-1.0), 0.0);
    }
}
