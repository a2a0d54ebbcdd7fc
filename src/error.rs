use std::path::PathBuf;

use chroma_tier::{CoreError, QualityError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Invalid quality: {0}")]
    InvalidQuality(#[from] QualityError),

    #[error("Failed to decode {path}: {reason}")]
    DecodeFailure { path: PathBuf, reason: String },

    #[error("Unsupported output format: {0} (expected .png, .jpg or .jpeg)")]
    UnsupportedOutputFormat(PathBuf),

    #[error("Indexed PNG encode error: {0}")]
    IndexedEncodeFailure(String),

    #[error("Truecolor PNG encode error: {0}")]
    TruecolorEncodeFailure(String),

    #[error("JPEG encode error: {0}")]
    JpegEncodeFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pixel pipeline error: {0}")]
    Core(#[from] CoreError),
}

impl CompressError {
    /// Process exit status for this error. Every failure maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_quality_message() {
        let error = CompressError::from(QualityError::OutOfRange(1.5));
        assert_eq!(
            error.to_string(),
            "Invalid quality: quality 1.5 is outside the range [0.0, 1.0]"
        );
    }

    #[test]
    fn test_unsupported_format_message() {
        let error = CompressError::UnsupportedOutputFormat(PathBuf::from("out.gif"));
        assert_eq!(
            error.to_string(),
            "Unsupported output format: out.gif (expected .png, .jpg or .jpeg)"
        );
    }

    #[test]
    fn test_decode_failure_message() {
        let error = CompressError::DecodeFailure {
            path: PathBuf::from("in.png"),
            reason: "truncated".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to decode in.png: truncated");
    }

    #[test]
    fn test_from_core_error() {
        let core = CoreError::from(QualityError::NotFinite);
        match CompressError::from(core) {
            CompressError::Core(_) => {}
            other => panic!("Expected Core variant, got {other:?}"),
        }
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = [
            CompressError::InvalidQuality(QualityError::NotFinite),
            CompressError::IndexedEncodeFailure("x".into()),
            CompressError::TruecolorEncodeFailure("x".into()),
            CompressError::JpegEncodeFailure("x".into()),
            CompressError::Io(std::io::Error::other("x")),
        ];
        for error in &errors {
            assert_eq!(error.exit_code(), 1);
        }
    }
}
