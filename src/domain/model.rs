use crate::domain::error::{ClassifyError, ClassifyResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single classification request, built from CLI arguments and
/// configuration. Immutable; consumed once per process invocation.
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    pub input: PathBuf,
    pub threshold: f64,
}

impl ClassificationRequest {
    /// Build a request, rejecting thresholds outside [0.0, 1.0].
    /// NaN fails the range check as well.
    pub fn new(input: PathBuf, threshold: f64) -> ClassifyResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ClassifyError::InvalidThreshold(threshold));
        }
        Ok(Self { input, threshold })
    }
}

/// Status field shared by results and error envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// The verdict for one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub is_safe: bool,
    /// Confidence in the verdict, always within [0, 1]
    pub confidence: f64,
    pub details: String,
}

/// A time-bounded sub-region of the input assigned a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub label: String,
}

/// Successful classification output, serialized to stdout as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: ResultStatus,
    pub file: String,
    pub classification: Classification,
    pub segments: Vec<Segment>,
}

/// Failure output, serialized to stdout in place of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: ResultStatus,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: message.into(),
        }
    }
}

impl From<&ClassifyError> for ErrorEnvelope {
    fn from(err: &ClassifyError) -> Self {
        Self::new(err.to_string())
    }
}
