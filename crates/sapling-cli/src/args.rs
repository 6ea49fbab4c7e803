//! Command-line argument definitions for the Sapling CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the root offset and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Sapling tree layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input outline file
    #[arg(help = "Path to the indented outline file")]
    pub input: String,

    /// Path to the output file; positions are printed to stdout when absent
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Horizontal position of the root
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_x: f32,

    /// Vertical position of the root
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_y: f32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
