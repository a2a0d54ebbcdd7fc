//! Block-average chroma subsampling on a dense raster.

use crate::color::YCbCr;
use crate::raster::Raster;

/// Average `cb`/`cr` over each `factor` x `factor` block and write the
/// average back to every pixel of the block.
///
/// Blocks are aligned to the top-left corner; the last row and column of
/// blocks are truncated at the image edge and averaged over the pixels they
/// actually cover. Luma and dimensions are unchanged. No-op when
/// `factor <= 1`.
pub fn chroma_subsample(raster: &mut Raster<YCbCr>, factor: usize) {
    if factor <= 1 {
        return;
    }

    let w = raster.width();
    let h = raster.height();
    let pixels = raster.pixels_mut();

    for by in (0..h).step_by(factor) {
        let y_end = (by + factor).min(h);
        for bx in (0..w).step_by(factor) {
            let x_end = (bx + factor).min(w);

            let (mut cb, mut cr) = (0.0f32, 0.0f32);
            for y in by..y_end {
                for p in &pixels[y * w + bx..y * w + x_end] {
                    cb += p.cb;
                    cr += p.cr;
                }
            }
            let count = ((y_end - by) * (x_end - bx)) as f32;
            cb /= count;
            cr /= count;

            for y in by..y_end {
                for p in &mut pixels[y * w + bx..y * w + x_end] {
                    p.cb = cb;
                    p.cr = cr;
                }
            }
        }
    }
}
