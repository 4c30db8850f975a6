// Classifier module - pluggable classification strategies
pub mod engine;
pub mod probe;

pub use engine::HeuristicClassifier;
pub use probe::{probe_file, FileProbe};

use crate::domain::error::ClassifyResult;
use crate::domain::model::{ClassificationRequest, ClassificationResult};

/// Classification strategy.
///
/// This is the model integration point: a real inference backend replaces
/// [`HeuristicClassifier`] behind this trait without touching the CLI layer.
/// Implementations must produce exactly one result per request and uphold the
/// result invariants (confidence within [0, 1], non-empty segments, each with
/// start < end).
pub trait Classifier {
    fn classify(&self, request: &ClassificationRequest) -> ClassifyResult<ClassificationResult>;
}
