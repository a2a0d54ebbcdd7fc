//! Recording codec for driving the pipeline without touching files.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chroma_tier::{IndexedImage, Raster, Rgb};
use imgsqueeze::codec::Codec;
use imgsqueeze::error::CompressError;
use imgsqueeze::models::PngCompression;

/// One codec call, with enough of its arguments to assert on.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Decode(PathBuf),
    Jpeg {
        quality: u8,
        raster: Raster<Rgb>,
    },
    Truecolor {
        compression: PngCompression,
        raster: Raster<Rgb>,
    },
    Indexed {
        compression: PngCompression,
        image: IndexedImage,
    },
}

/// Serves a fixed raster from `decode` and records every call. Each
/// capability can be switched to fail.
#[derive(Debug, Default)]
pub struct FakeCodec {
    raster: Option<Raster<Rgb>>,
    fail_indexed: bool,
    fail_truecolor: bool,
    fail_jpeg: bool,
    calls: RefCell<Vec<Call>>,
}

impl FakeCodec {
    /// Decoding any path yields `raster`.
    pub fn with_raster(raster: Raster<Rgb>) -> Self {
        Self {
            raster: Some(raster),
            ..Default::default()
        }
    }

    /// Decoding any path fails.
    pub fn undecodable() -> Self {
        Self::default()
    }

    pub fn fail_indexed(mut self) -> Self {
        self.fail_indexed = true;
        self
    }

    pub fn fail_truecolor(mut self) -> Self {
        self.fail_truecolor = true;
        self
    }

    pub fn fail_jpeg(mut self) -> Self {
        self.fail_jpeg = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Only the encode calls, in order.
    pub fn encode_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Decode(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Codec for FakeCodec {
    fn decode(&self, path: &Path) -> Result<Raster<Rgb>, CompressError> {
        self.record(Call::Decode(path.to_path_buf()));
        self.raster.clone().ok_or_else(|| CompressError::DecodeFailure {
            path: path.to_path_buf(),
            reason: "fake decode failure".to_string(),
        })
    }

    fn encode_jpeg(
        &self,
        raster: &Raster<Rgb>,
        quality: u8,
        _path: &Path,
    ) -> Result<(), CompressError> {
        self.record(Call::Jpeg {
            quality,
            raster: raster.clone(),
        });
        if self.fail_jpeg {
            return Err(CompressError::JpegEncodeFailure("fake".to_string()));
        }
        Ok(())
    }

    fn encode_truecolor_png(
        &self,
        raster: &Raster<Rgb>,
        compression: PngCompression,
        _path: &Path,
    ) -> Result<(), CompressError> {
        self.record(Call::Truecolor {
            compression,
            raster: raster.clone(),
        });
        if self.fail_truecolor {
            return Err(CompressError::TruecolorEncodeFailure("fake".to_string()));
        }
        Ok(())
    }

    fn encode_indexed_png(
        &self,
        image: &IndexedImage,
        compression: PngCompression,
        _path: &Path,
    ) -> Result<(), CompressError> {
        self.record(Call::Indexed {
            compression,
            image: image.clone(),
        });
        if self.fail_indexed {
            return Err(CompressError::IndexedEncodeFailure("fake".to_string()));
        }
        Ok(())
    }
}
