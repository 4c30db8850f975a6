use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command line arguments for the classify binary
#[derive(Parser, Debug)]
#[command(
    name = "classify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audio content classification CLI",
    long_about = "Classifies an audio file and prints exactly one JSON result object to stdout. Exit code 0 on success, 1 on any validation or runtime error."
)]
pub struct Args {
    /// Path to the input audio file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Classification threshold in [0.0, 1.0] (default 0.45, or the
    /// configured default_threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress log output (stdout still carries the result object)
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact single-line JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}
