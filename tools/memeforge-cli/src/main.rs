//! MemeForge CLI — compose captioned images from the command line.
//!
//! Usage:
//!   memeforge compose <INPUT> [OPTIONS]   Caption an image and share it
//!   memeforge check                       Check host capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "memeforge",
    about = "Two-line caption composition for images",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Caption an image and share the composite to disk
    Compose {
        /// Source image file
        input: PathBuf,

        /// Top caption text
        #[arg(long, default_value = "TOP")]
        top: String,

        /// Bottom caption text
        #[arg(long, default_value = "BOTTOM")]
        bottom: String,

        /// Output file (defaults to the configured exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Composite width (defaults to the configured screen bounds)
        #[arg(long)]
        width: Option<u32>,

        /// Composite height (defaults to the configured screen bounds)
        #[arg(long)]
        height: Option<u32>,

        /// Caption font file (otherwise discovered from system fonts)
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// Check host capabilities (camera, fonts, config)
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    memeforge_common::logging::init_logging(&memeforge_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
    });

    match cli.command {
        Commands::Compose {
            input,
            top,
            bottom,
            output,
            width,
            height,
            font,
        } => commands::compose::run(input, top, bottom, output, width, height, font),
        Commands::Check => commands::check::run(),
    }
}
