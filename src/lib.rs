//! Audioscreen Library
//!
//! Audio content classification library providing input validation, a
//! pluggable classification strategy, and a stable JSON result envelope
//! for CLI callers.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::classifier::{Classifier, HeuristicClassifier};
pub use domain::config::AudioscreenConfig;
pub use domain::error::{ClassifyError, ClassifyResult};
pub use domain::model::{
    Classification, ClassificationRequest, ClassificationResult, ErrorEnvelope, ResultStatus,
    Segment,
};
