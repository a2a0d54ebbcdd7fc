use std::fmt;
use std::path::{Path, PathBuf};

use chroma_tier::{
    denoise_rgb, denoise_sigma, jpeg_quality, PaletteDecision, Quality, Raster, Rgb,
    TierCompressor, TierParams,
};

use super::state::{PipelineState, Progress};
use crate::codec::Codec;
use crate::error::CompressError;
use crate::models::{OutputFormat, PngCompression};

/// Which PNG encoder produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngBranch {
    /// Palette PNG with this many entries
    Indexed { colors: usize },
    /// More than 256 colors: RGB PNG
    Truecolor,
    /// The palette encoder failed and the RGB encoder took over
    TruecolorFallback { colors: usize },
}

impl fmt::Display for PngBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PngBranch::Indexed { colors } => write!(f, "indexed, {} colors", colors),
            PngBranch::Truecolor => write!(f, "truecolor"),
            PngBranch::TruecolorFallback { colors } => {
                write!(f, "truecolor (indexed encode of {} colors failed)", colors)
            }
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub width: usize,
    pub height: usize,
    pub quality: Quality,
    /// Tier parameters (PNG path only)
    pub params: Option<TierParams>,
    /// Sigma of the pre-filter chroma denoise, if it ran
    pub denoise_sigma: Option<f32>,
    /// Encoder branch (PNG path only)
    pub png_branch: Option<PngBranch>,
    /// Encoder quality (JPEG path only)
    pub jpeg_quality: Option<u8>,
    /// Every state visited, ending in `Encoded`
    pub history: Vec<PipelineState>,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saved {} ({}x{} {}",
            self.output.display(),
            self.width,
            self.height,
            self.format
        )?;
        if let Some(params) = &self.params {
            write!(f, ", {}", params.tier)?;
        }
        if let Some(branch) = &self.png_branch {
            write!(f, ", {}", branch)?;
        }
        if let Some(q) = self.jpeg_quality {
            write!(f, ", quality {}", q)?;
        }
        write!(f, ")")
    }
}

/// Runs one image from input file to output file.
///
/// Order of checks: quality, then output format, then decode. Nothing is
/// read before the first two pass and nothing is written unless an encoder
/// succeeds.
pub struct PipelineDriver<C: Codec> {
    codec: C,
    png_compression: PngCompression,
}

impl<C: Codec> PipelineDriver<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            png_compression: PngCompression::default(),
        }
    }

    /// zlib effort for both PNG encoders.
    pub fn png_compression(mut self, compression: PngCompression) -> Self {
        self.png_compression = compression;
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Parse `quality` from text, then [`run`](Self::run).
    pub fn run_with_text(
        &self,
        input: &Path,
        output: &Path,
        quality: &str,
    ) -> Result<PipelineReport, CompressError> {
        let quality: Quality = quality.parse()?;
        self.run(input, output, quality)
    }

    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        quality: Quality,
    ) -> Result<PipelineReport, CompressError> {
        let format = OutputFormat::from_path(output)?;

        let raster = self.codec.decode(input)?;
        tracing::info!(
            input = %input.display(),
            width = raster.width(),
            height = raster.height(),
            "Loaded image"
        );
        tracing::info!(output = %output.display(), %format, %quality, "Selected output path");

        let mut report = PipelineReport {
            output: output.to_path_buf(),
            format,
            width: raster.width(),
            height: raster.height(),
            quality,
            params: None,
            denoise_sigma: None,
            png_branch: None,
            jpeg_quality: None,
            history: Vec::new(),
        };

        let mut progress = Progress::new();
        let result = match format {
            OutputFormat::Png => self.run_png(raster, output, quality, &mut progress, &mut report),
            OutputFormat::Jpeg => {
                self.run_jpeg(raster, output, quality, &mut progress, &mut report)
            }
        };

        match result {
            Ok(()) => {
                progress.advance(PipelineState::Encoded);
                report.history = progress.into_history();
                Ok(report)
            }
            Err(e) => {
                let failed_in = progress.state();
                progress.advance(PipelineState::Failed);
                tracing::debug!(
                    state = %failed_in,
                    history = ?progress.into_history(),
                    "pipeline failed"
                );
                Err(e)
            }
        }
    }

    fn run_png(
        &self,
        raster: Raster<Rgb>,
        output: &Path,
        quality: Quality,
        progress: &mut Progress,
        report: &mut PipelineReport,
    ) -> Result<(), CompressError> {
        let compressor = TierCompressor::new(quality);
        let params = *compressor.tier_params();
        tracing::info!(
            tier = %params.tier,
            luma_levels = params.luma_levels,
            chroma_levels = params.chroma_levels,
            subsample_factor = params.subsample_factor,
            blur_sigma = params.blur_sigma,
            use_dithering = params.use_dithering,
            rgb_round_multiple = params.rgb_round_multiple,
            "Tier parameters"
        );
        if let Some(sigma) = compressor.denoise_sigma() {
            tracing::info!(sigma, "Applying pre-filter chroma denoise");
        }

        let result = compressor.process_observed(raster, |stage| progress.advance(stage.into()));
        report.params = Some(result.params);
        report.denoise_sigma = result.denoise_sigma;

        let branch = match &result.decision {
            PaletteDecision::Indexed(image) => {
                let colors = image.palette().len();
                tracing::info!(colors, "At most 256 colors, encoding indexed PNG");
                match self
                    .codec
                    .encode_indexed_png(image, self.png_compression, output)
                {
                    Ok(()) => PngBranch::Indexed { colors },
                    Err(e) => {
                        tracing::warn!(%e, "Indexed encode failed, falling back to truecolor");
                        self.codec
                            .encode_truecolor_png(&result.rgb, self.png_compression, output)?;
                        PngBranch::TruecolorFallback { colors }
                    }
                }
            }
            PaletteDecision::Truecolor => {
                tracing::info!("More than 256 colors, encoding truecolor PNG");
                self.codec
                    .encode_truecolor_png(&result.rgb, self.png_compression, output)?;
                PngBranch::Truecolor
            }
        };
        report.png_branch = Some(branch);
        Ok(())
    }

    fn run_jpeg(
        &self,
        mut raster: Raster<Rgb>,
        output: &Path,
        quality: Quality,
        progress: &mut Progress,
        report: &mut PipelineReport,
    ) -> Result<(), CompressError> {
        if let Some(sigma) = denoise_sigma(quality) {
            tracing::info!(sigma, "Applying chroma denoise");
            denoise_rgb(&mut raster, sigma);
            report.denoise_sigma = Some(sigma);
            progress.advance(PipelineState::Filtered);
        }

        let q = jpeg_quality(quality);
        tracing::info!(jpeg_quality = q, "Encoding JPEG");
        self.codec.encode_jpeg(&raster, q, output)?;
        report.jpeg_quality = Some(q);
        Ok(())
    }
}
