//! Test images.

use std::path::Path;

use chroma_tier::{Raster, Rgb};
use imgsqueeze::codec::{Codec, ImageCodec};
use imgsqueeze::models::PngCompression;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// 4x4 black/white pattern; `true` is white.
pub const TWO_COLOR_LAYOUT: [bool; 16] = [
    true, false, false, true, //
    false, true, true, false, //
    true, true, false, false, //
    false, false, true, true,
];

/// 4x4 image with exactly two distinct colors.
pub fn two_color_raster() -> Raster<Rgb> {
    let pixels = TWO_COLOR_LAYOUT
        .iter()
        .map(|&white| if white { WHITE } else { BLACK })
        .collect();
    Raster::new(4, 4, pixels).unwrap()
}

/// Seeded uniform noise; thousands of distinct colors.
pub fn random_raster(width: usize, height: usize, seed: u64) -> Raster<Rgb> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels = (0..width * height)
        .map(|_| Rgb::new(rng.gen(), rng.gen(), rng.gen()))
        .collect();
    Raster::new(width, height, pixels).unwrap()
}

/// Smooth diagonal color ramp.
pub fn gradient_raster(width: usize, height: usize) -> Raster<Rgb> {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Rgb::new(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) * 255 / (width + height).max(1)) as u8,
            )
        })
        .collect();
    Raster::new(width, height, pixels).unwrap()
}

/// Write `raster` as a lossless RGB PNG to use as pipeline input.
pub fn write_png(path: &Path, raster: &Raster<Rgb>) {
    ImageCodec::new()
        .encode_truecolor_png(raster, PngCompression::Fast, path)
        .unwrap();
}
