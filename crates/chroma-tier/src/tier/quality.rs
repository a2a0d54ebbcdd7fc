//! Validated quality scalar.

use std::fmt;
use std::str::FromStr;

/// Compression quality in `[0, 1]`, where 1 is best.
///
/// Construction is the only place a quality is validated; everything
/// downstream can rely on the value being finite and in range.
///
/// ```
/// use chroma_tier::Quality;
///
/// assert!(Quality::new(0.75).is_ok());
/// assert!(Quality::new(1.5).is_err());
/// assert!(Quality::new(f32::NAN).is_err());
/// assert!("0.3".parse::<Quality>().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quality(f32);

impl Quality {
    /// Lowest quality (strongest compression).
    pub const MIN: Self = Self(0.0);
    /// Highest quality.
    pub const MAX: Self = Self(1.0);

    pub fn new(value: f32) -> Result<Self, QualityError> {
        if !value.is_finite() {
            return Err(QualityError::NotFinite);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(QualityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quality {
    type Err = QualityError;

    /// Parse a decimal quality. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| QualityError::Unparseable(s.to_string()))?;
        Self::new(value)
    }
}

/// Error type for quality validation.
#[derive(Debug, Clone, PartialEq)]
pub enum QualityError {
    /// Value is NaN or infinite
    NotFinite,
    /// Value lies outside `[0, 1]`
    OutOfRange(f32),
    /// Text is not a decimal number
    Unparseable(String),
}

impl fmt::Display for QualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityError::NotFinite => write!(f, "quality must be a finite number"),
            QualityError::OutOfRange(v) => {
                write!(f, "quality {} is outside the range [0.0, 1.0]", v)
            }
            QualityError::Unparseable(s) => write!(f, "quality {:?} is not a number", s),
        }
    }
}

impl std::error::Error for QualityError {}
