use std::path::PathBuf;
use thiserror::Error;

/// Audioscreen unified error type
///
/// Display text of `FileNotFound` and `EmptyFile` is part of the CLI
/// contract: it becomes the `message` field of the error envelope.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("File not found")]
    FileNotFound,

    #[error("File is empty")]
    EmptyFile,

    #[error("Threshold must be within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
