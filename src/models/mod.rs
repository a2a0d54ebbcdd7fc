pub mod config;
pub mod output_format;

pub use config::{CompressConfig, PngCompression, PngConfig};
pub use output_format::OutputFormat;
