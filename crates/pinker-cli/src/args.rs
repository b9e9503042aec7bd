//! Command-line argument definitions for the Pinker CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, input decoding, strictness and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Pinker diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Pinker file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Fail without writing output when the diagram has error diagnostics.
    /// The process then exits with status 2.
    #[arg(long)]
    pub strict: bool,

    /// Decode HTML entities such as `&amp;` in the input before parsing
    #[arg(long)]
    pub decode_html: bool,
}
