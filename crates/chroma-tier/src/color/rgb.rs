//! 8-bit RGB pixel type.

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into a 24-bit `0xRRGGBB` value.
    ///
    /// Packed values order the same way as `(r, g, b)` tuples, which is what
    /// gives palettes their stable sorted order.
    ///
    /// ```
    /// use chroma_tier::Rgb;
    /// assert_eq!(Rgb::new(0x12, 0x34, 0x56).pack(), 0x123456);
    /// ```
    #[inline]
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Inverse of [`pack`](Self::pack). Bits above 24 are ignored.
    #[inline]
    pub const fn unpack(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Split an interleaved `[R, G, B, R, G, B, ...]` buffer into pixels.
    /// Trailing bytes that do not form a whole pixel are dropped.
    pub fn from_interleaved(data: &[u8]) -> Vec<Self> {
        data.chunks_exact(3)
            .map(|px| Self::new(px[0], px[1], px[2]))
            .collect()
    }

    /// Flatten pixels into an interleaved `[R, G, B, ...]` buffer.
    pub fn to_interleaved(pixels: &[Self]) -> Vec<u8> {
        let mut out = Vec::with_capacity(pixels.len() * 3);
        for px in pixels {
            out.extend_from_slice(&px.to_bytes());
        }
        out
    }
}
