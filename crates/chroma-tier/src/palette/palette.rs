//! Indexed palette with a packed-color lookup.

use std::collections::HashMap;

use super::census::{ColorCensus, MAX_PALETTE_COLORS};
use super::error::PaletteError;
use crate::color::Rgb;

/// Ordered palette of up to 256 opaque RGBA entries.
///
/// Holds both directions of the mapping: `entries[i]` is the color of index
/// `i`, and the lookup table maps each packed `0xRRGGBB` color back to its
/// index. The two are a bijection over the palette's colors.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPalette {
    entries: Vec<[u8; 4]>,
    lookup: HashMap<u32, u8>,
}

impl IndexedPalette {
    /// Build a palette from arbitrary colors. Duplicates are removed and the
    /// entries are sorted by packed value.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, PaletteError> {
        let mut census = ColorCensus::new();
        for &c in colors {
            census.observe(c);
        }
        Self::from_census(&census)
    }

    /// Build a palette from a finished census, in its sorted order.
    pub fn from_census(census: &ColorCensus) -> Result<Self, PaletteError> {
        if census.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if census.len() > MAX_PALETTE_COLORS {
            return Err(PaletteError::TooManyColors {
                count: census.len(),
            });
        }

        let mut entries = Vec::with_capacity(census.len());
        let mut lookup = HashMap::with_capacity(census.len());
        for (idx, color) in census.colors().enumerate() {
            entries.push([color.r, color.g, color.b, 255]);
            lookup.insert(color.pack(), idx as u8);
        }
        Ok(Self { entries, lookup })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// RGBA entries in index order. Alpha is always 255.
    #[inline]
    pub fn entries(&self) -> &[[u8; 4]] {
        &self.entries
    }

    /// Color stored at `index`.
    #[inline]
    pub fn color(&self, index: u8) -> Option<Rgb> {
        self.entries
            .get(index as usize)
            .map(|&[r, g, b, _]| Rgb::new(r, g, b))
    }

    /// Palette index of `color`, if present.
    #[inline]
    pub fn index_of(&self, color: Rgb) -> Option<u8> {
        self.lookup.get(&color.pack()).copied()
    }

    /// Flat `[R, G, B, ...]` table, the layout of a PNG `PLTE` chunk.
    pub fn rgb_bytes(&self) -> Vec<u8> {
        self.entries.iter().flat_map(|e| [e[0], e[1], e[2]]).collect()
    }

    /// Alpha of every entry in index order, the layout of a PNG `tRNS` chunk.
    pub fn alpha_bytes(&self) -> Vec<u8> {
        self.entries.iter().map(|e| e[3]).collect()
    }

    /// True when every entry is fully opaque (no `tRNS` chunk needed).
    pub fn is_opaque(&self) -> bool {
        self.entries.iter().all(|e| e[3] == 255)
    }
}
