//! # Halftoner CLI
//!
//! Command-line interface for halftone rendering.
//!
//! ## Usage
//!
//! ```bash
//! # Render a photo with 10px dots
//! halftoner render photo.jpg -o photo-dots.png
//!
//! # Rotated crosses on a coarser grid
//! halftoner render photo.jpg -o crosses.png --cell-size 16 --pattern cross --rotate
//!
//! # List patterns and their response curves
//! halftoner patterns
//!
//! # Start the web interface
//! halftoner serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use halftoner::{
    HalftoneError, PatternKind, RenderConfig, codec,
    render::{self, DEFAULT_CELL_SIZE, MarkStyle},
    response::ResponseCurve,
    sampler::SamplingMode,
    server::{self, ServerConfig},
};

/// Halftoner - Turn images into halftone art
#[derive(Parser, Debug)]
#[command(name = "halftoner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an image file as a halftone
    Render {
        /// Input image (PNG, JPEG, ...)
        input: PathBuf,

        /// Output file; the format follows the extension
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Cell edge length in pixels
        #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
        cell_size: u32,

        /// Mark shape (dot, square, triangle, line, cross)
        #[arg(long, default_value = "dot")]
        pattern: PatternKind,

        /// Response curve (tuned, linear, power:<exponent>:<scale>)
        #[arg(long, default_value = "tuned")]
        curve: ResponseCurve,

        /// Rotate marks (squares, triangles, lines and crosses)
        #[arg(long)]
        rotate: bool,

        /// Average each cell instead of sampling its top-left pixel
        #[arg(long)]
        area_sample: bool,

        /// Render bands in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// List available patterns
    Patterns,

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Largest accepted upload in megabytes
        #[arg(long, default_value_t = 50)]
        max_upload_mb: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HalftoneError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            cell_size,
            pattern,
            curve,
            rotate,
            area_sample,
            parallel,
        } => {
            let mut config = RenderConfig::new(cell_size, pattern).with_curve(curve);
            if rotate {
                config = config.with_style(MarkStyle::Rotated);
            }
            if area_sample {
                config = config.with_sampling(SamplingMode::Area);
            }
            config.validate()?;

            let image = codec::open(&input)?;

            let start = Instant::now();
            let halftone = if parallel {
                render::render_parallel(&image, &config)?
            } else {
                render::render(&image, &config)?
            };
            tracing::info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                parallel,
                "rendered {}",
                input.display()
            );

            codec::save(&halftone, &output)?;
            println!("{}", output.display());
        }

        Commands::Patterns => {
            println!("Available patterns:");
            for kind in PatternKind::ALL {
                let (exponent, scale) = kind.tuning();
                println!("  {:<10} exponent {:.1}  scale {:.2}", kind.name(), exponent, scale);
            }
        }

        Commands::Serve {
            listen,
            max_upload_mb,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                max_upload_bytes: max_upload_mb * 1024 * 1024,
                ..ServerConfig::default()
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
