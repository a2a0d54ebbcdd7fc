//! Public API for the chroma-tier crate.
//!
//! This module provides the high-level entry point: the [`TierCompressor`]
//! builder, its [`CompressedRaster`] result, the [`Stage`] progress markers
//! and the [`CoreError`] unified error type.

mod builder;
mod error;

pub use builder::{CompressedRaster, Stage, TierCompressor};
pub use error::CoreError;
