//! Decoder and encoder collaborators.
//!
//! The pipeline only talks to the [`Codec`] trait, so tests can substitute a
//! fake that records calls and injects failures. [`ImageCodec`] is the real
//! implementation.

mod image_codec;

pub use image_codec::ImageCodec;

use std::path::Path;

use chroma_tier::{IndexedImage, Raster, Rgb};

use crate::error::CompressError;
use crate::models::PngCompression;

/// The four capabilities the pipeline needs from codec libraries.
///
/// Encoders write `path` only after the whole image has been encoded, so a
/// failed call leaves no output file behind.
pub trait Codec {
    /// Decode any supported input into an 8-bit RGB raster.
    fn decode(&self, path: &Path) -> Result<Raster<Rgb>, CompressError>;

    /// Encode as baseline JPEG with encoder quality `quality` (1..=100).
    fn encode_jpeg(&self, raster: &Raster<Rgb>, quality: u8, path: &Path)
        -> Result<(), CompressError>;

    /// Encode as 8-bit RGB PNG.
    fn encode_truecolor_png(
        &self,
        raster: &Raster<Rgb>,
        compression: PngCompression,
        path: &Path,
    ) -> Result<(), CompressError>;

    /// Encode as 8-bit palette PNG.
    fn encode_indexed_png(
        &self,
        image: &IndexedImage,
        compression: PngCompression,
        path: &Path,
    ) -> Result<(), CompressError>;
}
