//! Full-range BT.601 YCbCr.
//!
//! ```text
//! Y  =       0.299    R + 0.587    G + 0.114    B
//! Cb = 128 - 0.168736 R - 0.331264 G + 0.5      B
//! Cr = 128 + 0.5      R - 0.418688 G - 0.081312 B
//! ```
//!
//! All three channels are nominally in 0..=255. Chroma may leave that range
//! after filtering; it is only clamped when converting back to [`Rgb`].

use super::rgb::Rgb;
use crate::raster::Raster;

/// How the inverse transform snaps each RGB channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RgbRounding {
    /// Round to the nearest integer.
    #[default]
    Nearest,
    /// Round to the nearest multiple of `n`. Coarser multiples band slightly
    /// but leave fewer distinct values for the entropy coder downstream.
    /// `Multiple(0)` and `Multiple(1)` behave like [`Nearest`](Self::Nearest).
    Multiple(u8),
}

impl RgbRounding {
    #[inline]
    fn apply(self, value: f32) -> u8 {
        let snapped = match self {
            RgbRounding::Nearest | RgbRounding::Multiple(0) | RgbRounding::Multiple(1) => {
                value.round()
            }
            RgbRounding::Multiple(n) => {
                let n = f32::from(n);
                (value / n).round() * n
            }
        };
        snapped.clamp(0.0, 255.0) as u8
    }
}

/// A pixel in full-range YCbCr, one `f32` per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YCbCr {
    /// Luma
    pub y: f32,
    /// Blue-difference chroma, centered on 128
    pub cb: f32,
    /// Red-difference chroma, centered on 128
    pub cr: f32,
}

impl YCbCr {
    #[inline]
    pub fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }

    /// Unclamped, unrounded inverse transform.
    #[inline]
    pub fn to_rgb_f32(self) -> [f32; 3] {
        let cb = self.cb - 128.0;
        let cr = self.cr - 128.0;
        [
            self.y + 1.402 * cr,
            self.y - 0.344136 * cb - 0.714136 * cr,
            self.y + 1.772 * cb,
        ]
    }

    /// Inverse transform, snapping each channel with `rounding` and
    /// clamping to 0..=255.
    #[inline]
    pub fn to_rgb(self, rounding: RgbRounding) -> Rgb {
        let [r, g, b] = self.to_rgb_f32();
        Rgb::new(rounding.apply(r), rounding.apply(g), rounding.apply(b))
    }
}

impl From<Rgb> for YCbCr {
    #[inline]
    fn from(px: Rgb) -> Self {
        let r = f32::from(px.r);
        let g = f32::from(px.g);
        let b = f32::from(px.b);
        Self {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            cb: 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b,
            cr: 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b,
        }
    }
}

impl Raster<Rgb> {
    /// Forward-convert every pixel into a fresh YCbCr working raster.
    pub fn to_ycbcr(&self) -> Raster<YCbCr> {
        self.map_ref(|&px| YCbCr::from(px))
    }
}

impl Raster<YCbCr> {
    /// Inverse-convert every pixel with the given rounding mode.
    pub fn to_rgb(&self, rounding: RgbRounding) -> Raster<Rgb> {
        self.map_ref(|px| px.to_rgb(rounding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries_forward() {
        let white = YCbCr::from(Rgb::new(255, 255, 255));
        assert!((white.y - 255.0).abs() < 1e-3);
        assert!((white.cb - 128.0).abs() < 1e-3);
        assert!((white.cr - 128.0).abs() < 1e-3);

        let black = YCbCr::from(Rgb::new(0, 0, 0));
        assert_eq!(black, YCbCr::new(0.0, 128.0, 128.0));

        let blue = YCbCr::from(Rgb::new(0, 0, 255));
        assert!((blue.cb - 255.5).abs() < 1e-3, "cb may exceed 255: {}", blue.cb);
    }

    #[test]
    fn test_nearest_round_trip_sampled_cube() {
        let mut max_error = 0i32;
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(5) {
                    let px = Rgb::new(r as u8, g as u8, b as u8);
                    let back = YCbCr::from(px).to_rgb(RgbRounding::Nearest);
                    for (a, z) in px.to_bytes().iter().zip(back.to_bytes().iter()) {
                        max_error = max_error.max((*a as i32 - *z as i32).abs());
                    }
                }
            }
        }
        assert!(max_error <= 1, "round-trip error {max_error} exceeds 1");
    }

    #[test]
    fn test_multiple_rounding_lands_on_grid() {
        let px = YCbCr::from(Rgb::new(101, 77, 203));
        for n in [2u8, 4] {
            let out = px.to_rgb(RgbRounding::Multiple(n));
            for c in out.to_bytes() {
                assert!(c % n == 0 || c == 255, "{c} not a multiple of {n}");
            }
        }
    }

    #[test]
    fn test_multiple_rounding_clamps() {
        // 254 / 4 = 63.5 -> 64 * 4 = 256, which must clamp to 255
        let px = YCbCr::new(254.0, 128.0, 128.0);
        assert_eq!(px.to_rgb(RgbRounding::Multiple(4)), Rgb::new(255, 255, 255));

        let dark = YCbCr::new(-10.0, 128.0, 128.0);
        assert_eq!(dark.to_rgb(RgbRounding::Multiple(2)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_multiple_one_matches_nearest() {
        let px = YCbCr::new(100.4, 140.2, 99.7);
        assert_eq!(
            px.to_rgb(RgbRounding::Multiple(1)),
            px.to_rgb(RgbRounding::Nearest)
        );
        assert_eq!(
            px.to_rgb(RgbRounding::Multiple(0)),
            px.to_rgb(RgbRounding::Nearest)
        );
    }

    #[test]
    fn test_raster_conversion_preserves_dimensions() {
        let raster = Raster::new(2, 1, vec![Rgb::new(1, 2, 3), Rgb::new(250, 128, 0)]).unwrap();
        let ycc = raster.to_ycbcr();
        assert_eq!((ycc.width(), ycc.height()), (2, 1));
        let back = ycc.to_rgb(RgbRounding::Nearest);
        assert_eq!(back.width(), 2);
        assert_eq!(back.len(), 2);
    }
}
