use std::io::Cursor;
use std::path::Path;

use chroma_tier::{IndexedImage, Raster, Rgb};
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;

use super::Codec;
use crate::error::CompressError;
use crate::models::PngCompression;

/// [`Codec`] backed by `image` (decode, JPEG), `png` and optionally `oxipng`.
#[derive(Debug, Clone, Default)]
pub struct ImageCodec {
    optimize: bool,
}

impl ImageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run oxipng over every PNG before it is written.
    pub fn optimize(mut self, enabled: bool) -> Self {
        self.optimize = enabled;
        self
    }

    /// Lossless recompression. Color type, bit depth and palette are kept
    /// as encoded. Falls back to the input if oxipng fails.
    fn optimize_png(&self, png_bytes: Vec<u8>) -> Vec<u8> {
        if !self.optimize {
            return png_bytes;
        }
        let options = oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            bit_depth_reduction: false,
            color_type_reduction: false,
            palette_reduction: false,
            grayscale_reduction: false,
            ..Default::default()
        };
        match oxipng::optimize_from_memory(&png_bytes, &options) {
            Ok(optimized) if optimized.len() < png_bytes.len() => {
                tracing::debug!(
                    before = png_bytes.len(),
                    after = optimized.len(),
                    "oxipng recompressed output"
                );
                optimized
            }
            Ok(_) => png_bytes,
            Err(e) => {
                tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
                png_bytes
            }
        }
    }
}

impl Codec for ImageCodec {
    fn decode(&self, path: &Path) -> Result<Raster<Rgb>, CompressError> {
        let decode_failure = |reason: String| CompressError::DecodeFailure {
            path: path.to_path_buf(),
            reason,
        };

        let img = image::open(path).map_err(|e| decode_failure(e.to_string()))?;
        if img.color().has_alpha() {
            tracing::warn!(path = %path.display(), "alpha channel discarded");
        }
        let rgb = img.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        Raster::new(width, height, Rgb::from_interleaved(rgb.as_raw()))
            .map_err(|e| decode_failure(e.to_string()))
    }

    fn encode_jpeg(
        &self,
        raster: &Raster<Rgb>,
        quality: u8,
        path: &Path,
    ) -> Result<(), CompressError> {
        let (width, height) = dimensions(raster).map_err(CompressError::JpegEncodeFailure)?;
        let data = Rgb::to_interleaved(raster.pixels());

        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, quality)
            .encode(&data, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| CompressError::JpegEncodeFailure(e.to_string()))?;

        std::fs::write(path, &buf)?;
        Ok(())
    }

    fn encode_truecolor_png(
        &self,
        raster: &Raster<Rgb>,
        compression: PngCompression,
        path: &Path,
    ) -> Result<(), CompressError> {
        let (width, height) =
            dimensions(raster).map_err(CompressError::TruecolorEncodeFailure)?;
        let data = Rgb::to_interleaved(raster.pixels());

        let png_bytes = encode_png(width, height, png::ColorType::Rgb, None, &data, compression)
            .map_err(|e| CompressError::TruecolorEncodeFailure(e.to_string()))?;

        std::fs::write(path, self.optimize_png(png_bytes))?;
        Ok(())
    }

    fn encode_indexed_png(
        &self,
        image: &IndexedImage,
        compression: PngCompression,
        path: &Path,
    ) -> Result<(), CompressError> {
        let width = u32::try_from(image.width())
            .map_err(|_| CompressError::IndexedEncodeFailure("width exceeds u32".into()))?;
        let height = u32::try_from(image.height())
            .map_err(|_| CompressError::IndexedEncodeFailure("height exceeds u32".into()))?;
        let plte = image.palette().rgb_bytes();

        let png_bytes = encode_png(
            width,
            height,
            png::ColorType::Indexed,
            Some(&plte),
            image.indices(),
            compression,
        )
        .map_err(|e| CompressError::IndexedEncodeFailure(e.to_string()))?;

        std::fs::write(path, self.optimize_png(png_bytes))?;
        Ok(())
    }
}

fn dimensions(raster: &Raster<Rgb>) -> Result<(u32, u32), String> {
    let width = u32::try_from(raster.width()).map_err(|_| "width exceeds u32".to_string())?;
    let height = u32::try_from(raster.height()).map_err(|_| "height exceeds u32".to_string())?;
    Ok((width, height))
}

/// Encode 8-bit image data into an in-memory PNG.
fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    plte: Option<&[u8]>,
    data: &[u8],
    compression: PngCompression,
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression.into());
        encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(data)?;
    }
    Ok(buf.into_inner())
}
