//! imgsqueeze - perceptual lossy pre-compression
//!
//! Decodes an image, runs the quality-tiered chroma transform from
//! `chroma-tier` and hands the result to a PNG or JPEG encoder.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod pipeline;
