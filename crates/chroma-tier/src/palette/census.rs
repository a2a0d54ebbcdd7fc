//! Distinct-color counting with an early exit.

use std::collections::BTreeSet;

use crate::color::Rgb;

/// Largest palette an 8-bit index buffer can address.
pub const MAX_PALETTE_COLORS: usize = 256;

/// Sorted set of the distinct colors seen so far.
///
/// Counting stops the moment the set grows past [`MAX_PALETTE_COLORS`]:
/// the distinct count can only grow as more pixels are seen, so once the
/// limit is exceeded the answer is final.
///
/// Censuses of disjoint chunks can be [`merge`](Self::merge)d; the merged
/// census reaches the same exceeded/not-exceeded verdict and the same sorted
/// color set as a single sequential scan, which is what lets a scan be split
/// across workers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorCensus {
    colors: BTreeSet<u32>,
}

impl ColorCensus {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `pixels` front to back, stopping early once the limit is passed.
    pub fn scan(pixels: &[Rgb]) -> Self {
        let mut census = Self::new();
        for &px in pixels {
            if !census.observe(px) {
                break;
            }
        }
        census
    }

    /// Record one pixel. Returns `false` once the limit has been exceeded,
    /// after which further observations are ignored.
    #[inline]
    pub fn observe(&mut self, px: Rgb) -> bool {
        if self.is_exceeded() {
            return false;
        }
        self.colors.insert(px.pack());
        !self.is_exceeded()
    }

    /// Fold another census (typically of a disjoint chunk) into this one.
    pub fn merge(&mut self, other: ColorCensus) {
        if self.is_exceeded() {
            return;
        }
        for packed in other.colors {
            self.colors.insert(packed);
            if self.is_exceeded() {
                return;
            }
        }
    }

    /// True once more than [`MAX_PALETTE_COLORS`] distinct colors were seen.
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.colors.len() > MAX_PALETTE_COLORS
    }

    /// Distinct colors counted so far (at most `MAX_PALETTE_COLORS + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The distinct colors in ascending packed order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().map(|&packed| Rgb::unpack(packed))
    }
}
