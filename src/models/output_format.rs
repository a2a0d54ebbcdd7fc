use std::fmt;
use std::path::Path;

use crate::error::CompressError;

/// Encoder selected by the output file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `.png`: the tiered transform, then indexed or truecolor PNG
    Png,
    /// `.jpg` / `.jpeg`: light chroma denoise, then the JPEG encoder
    Jpeg,
}

impl OutputFormat {
    /// Resolve the format from `path`'s extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, CompressError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(OutputFormat::Jpeg),
            _ => Err(CompressError::UnsupportedOutputFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_case_insensitive() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.PNG")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.jpg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("dir/a.JpEg")).unwrap(), OutputFormat::Jpeg);
    }

    #[test]
    fn test_rejects_other_and_missing() {
        for path in ["a.gif", "a", "a.png.bak", ".png", "a."] {
            assert!(
                matches!(
                    OutputFormat::from_path(Path::new(path)),
                    Err(CompressError::UnsupportedOutputFormat(_))
                ),
                "{path} should be rejected"
            );
        }
    }
}
