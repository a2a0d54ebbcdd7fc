//! Separable Gaussian blur over the chroma planes.

use crate::color::YCbCr;
use crate::raster::Raster;

/// Sigmas below this are treated as "no blur".
pub const MIN_BLUR_SIGMA: f32 = 0.1;

/// Build a normalized 1-D Gaussian kernel.
///
/// The radius is `ceil(2 * sigma)`, so the kernel has `2 * radius + 1` taps
/// with weights `exp(-i^2 / (2 sigma^2))` for `i` in `-radius..=radius`,
/// scaled to sum to 1.
///
/// ```
/// use chroma_tier::gaussian_kernel;
///
/// let kernel = gaussian_kernel(0.7);
/// assert_eq!(kernel.len(), 5); // radius = ceil(1.4) = 2
/// let sum: f32 = kernel.iter().sum();
/// assert!((sum - 1.0).abs() < 1e-5);
/// ```
pub fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (2.0 * sigma).ceil().max(0.0) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}

/// Blur `cb` and `cr` with a separable Gaussian of the given sigma.
///
/// The horizontal pass reads from a snapshot of the input and the vertical
/// pass reads from a snapshot of the horizontal result, so each pass sees a
/// complete, unmodified source plane. Samples past the border replicate the
/// nearest edge pixel. No-op when `sigma < MIN_BLUR_SIGMA`.
pub fn chroma_blur(raster: &mut Raster<YCbCr>, sigma: f32) {
    if !(sigma >= MIN_BLUR_SIGMA) || raster.is_empty() {
        return;
    }

    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;
    let w = raster.width();
    let h = raster.height();

    // Horizontal
    let src: Vec<YCbCr> = raster.pixels().to_vec();
    let dst = raster.pixels_mut();
    for y in 0..h {
        let row = y * w;
        for x in 0..w {
            let (mut cb, mut cr) = (0.0f32, 0.0f32);
            for (k, &weight) in kernel.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                let s = &src[row + sx];
                cb += s.cb * weight;
                cr += s.cr * weight;
            }
            let d = &mut dst[row + x];
            d.cb = cb;
            d.cr = cr;
        }
    }

    // Vertical
    let src: Vec<YCbCr> = raster.pixels().to_vec();
    let dst = raster.pixels_mut();
    for y in 0..h {
        for x in 0..w {
            let (mut cb, mut cr) = (0.0f32, 0.0f32);
            for (k, &weight) in kernel.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, h);
                let s = &src[sy * w + x];
                cb += s.cb * weight;
                cr += s.cr * weight;
            }
            let d = &mut dst[y * w + x];
            d.cb = cb;
            d.cr = cr;
        }
    }
}

/// Clamp a signed coordinate into `0..len` (edge replication).
#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}
