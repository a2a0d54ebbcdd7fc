//! Pixel types and the RGB <-> YCbCr transform.
//!
//! - [`Rgb`]: 8-bit device pixels, used for decoded input and final output.
//! - [`YCbCr`]: full-range BT.601 luma/chroma in floating point, used while
//!   the chroma planes are filtered and every channel is quantized.
//!
//! # Example
//!
//! ```
//! use chroma_tier::{Rgb, RgbRounding, YCbCr};
//!
//! let pixel = Rgb::new(200, 120, 40);
//! let ycc = YCbCr::from(pixel);
//! assert_eq!(ycc.to_rgb(RgbRounding::Nearest), pixel);
//! ```

mod rgb;
mod ycbcr;

pub use rgb::Rgb;
pub use ycbcr::{RgbRounding, YCbCr};
