//! Output types of the pipeline.
//!
//! [`IndexedImage`] is the palette form of a finished raster: one `u8`
//! index per pixel plus the [`IndexedPalette`](crate::palette::IndexedPalette)
//! the indices refer to. The truecolor form is simply a
//! [`Raster<Rgb>`](crate::Raster).

mod indexed_image;

pub use indexed_image::IndexedImage;
