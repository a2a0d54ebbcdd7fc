//! Error type for palette construction.

use std::fmt;

use crate::color::Rgb;

/// Returned when a palette or index buffer cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No colors provided
    EmptyPalette,
    /// More distinct colors than an 8-bit index can address
    TooManyColors {
        /// Number of distinct colors seen (the scan stops just past the limit)
        count: usize,
    },
    /// A pixel's color has no palette entry
    ColorNotInPalette {
        /// The missing color
        color: Rgb,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette cannot be empty"),
            PaletteError::TooManyColors { count } => {
                write!(f, "too many colors for a palette: {} (max 256)", count)
            }
            PaletteError::ColorNotInPalette { color } => {
                write!(
                    f,
                    "color #{:02x}{:02x}{:02x} has no palette entry",
                    color.r, color.g, color.b
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}
