use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "imgsqueeze=info";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompressConfig {
    /// Tracing filter directive (overridden by `RUST_LOG`)
    pub log_filter: String,

    /// PNG encoder settings
    pub png: PngConfig,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            png: PngConfig::default(),
        }
    }
}

/// Settings shared by the indexed and truecolor PNG encoders
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PngConfig {
    /// zlib effort
    pub compression: PngCompression,

    /// Recompress the finished PNG losslessly with oxipng
    pub optimize: bool,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Best,
            optimize: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    Fast,
    Default,
    #[default]
    Best,
}

impl From<PngCompression> for png::Compression {
    fn from(c: PngCompression) -> Self {
        match c {
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Default => png::Compression::Default,
            PngCompression::Best => png::Compression::Best,
        }
    }
}

impl CompressConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Read and parse a configuration file.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load configuration from `path`, falling back to defaults (with a
    /// warning) when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    compression = ?config.png.compression,
                    optimize = config.png.optimize,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
