use crate::cli::args::OutputFormat;
use crate::domain::model::{ClassificationResult, ErrorEnvelope};
use serde::Serialize;
use std::io::{self, Write};

/// Output writer for the single result object per invocation
pub trait ResultWriter {
    fn write_result(&self, result: &ClassificationResult) -> Result<(), OutputError>;
    fn write_envelope(&self, envelope: &ErrorEnvelope) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::ClassifyError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer. Everything goes to stdout; logs use stderr, so the
/// stream a caller parses holds exactly one JSON object.
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<(), OutputError> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", rendered)?;
        Ok(())
    }
}

impl ResultWriter for ConsoleWriter {
    fn write_result(&self, result: &ClassificationResult) -> Result<(), OutputError> {
        self.write_json(result)
    }

    fn write_envelope(&self, envelope: &ErrorEnvelope) -> Result<(), OutputError> {
        self.write_json(envelope)
    }
}
