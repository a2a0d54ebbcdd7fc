use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgsqueeze::codec::ImageCodec;
use imgsqueeze::models::CompressConfig;
use imgsqueeze::pipeline::PipelineDriver;

#[derive(Parser)]
#[command(name = "imgsqueeze", version)]
#[command(about = "Perceptual lossy pre-compression for PNG and JPEG output")]
struct Cli {
    /// Input image (PNG, JPEG, GIF, BMP, TGA or WebP)
    input: PathBuf,

    /// Output file: .png runs the tiered transform, .jpg/.jpeg the JPEG encoder
    output: PathBuf,

    /// Quality from 0.0 (smallest) to 1.0 (best)
    #[arg(allow_negative_numbers = true)]
    quality: String,

    /// YAML configuration file
    #[arg(long, env = "IMGSQUEEZE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let (config, config_error) = match cli.config.as_deref() {
        Some(path) => match CompressConfig::read(path) {
            Ok(config) => (config, None),
            Err(e) => (CompressConfig::default(), Some(e)),
        },
        None => (CompressConfig::default(), None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(e) = config_error {
        tracing::warn!(error = %format!("{e:#}"), "Failed to load config, using defaults");
    }

    let codec = ImageCodec::new().optimize(config.png.optimize);
    let driver = PipelineDriver::new(codec).png_compression(config.png.compression);

    match driver.run_with_text(&cli.input, &cli.output, &cli.quality) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
