use crate::core::classifier::{probe_file, Classifier, FileProbe};
use crate::domain::error::ClassifyResult;
use crate::domain::model::{
    Classification, ClassificationRequest, ClassificationResult, ResultStatus, Segment,
};

/// Assumed encoding for duration estimation: 16 kHz mono 16-bit PCM.
const ASSUMED_BYTES_PER_SEC: f64 = 32_000.0;

/// Floor on the estimated duration so every segment has end > start.
const MIN_DURATION_SECS: f64 = 0.1;

/// Deterministic stand-in classification strategy.
///
/// Scores the probed head bytes by their average byte-to-byte variation and
/// compares the score against the request threshold: low variation reads as
/// speech-like (safe), high variation as music-like. The same file and
/// threshold always produce the same verdict. Not a model; a real inference
/// backend replaces this behind [`Classifier`].
pub struct HeuristicClassifier {
    probe_limit: usize,
}

impl HeuristicClassifier {
    pub const DEFAULT_PROBE_LIMIT: usize = 64 * 1024;

    pub fn new(probe_limit: usize) -> Self {
        Self { probe_limit }
    }

    fn verdict(&self, request: &ClassificationRequest, probe: &FileProbe) -> ClassificationResult {
        let score = activity_score(&probe.head);
        let is_safe = score <= request.threshold;
        let (details, label) = if is_safe {
            ("Speech detected", "speech")
        } else {
            ("Music detected", "music")
        };

        // Confidence grows with the distance from the decision boundary.
        let confidence = (0.5 + (score - request.threshold).abs()).clamp(0.0, 1.0);

        ClassificationResult {
            status: ResultStatus::Success,
            file: request.input.display().to_string(),
            classification: Classification {
                is_safe,
                confidence,
                details: details.to_string(),
            },
            segments: vec![Segment {
                start: 0.0,
                end: estimated_duration_secs(probe.len),
                label: label.to_string(),
            }],
        }
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROBE_LIMIT)
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, request: &ClassificationRequest) -> ClassifyResult<ClassificationResult> {
        let probe = probe_file(&request.input, self.probe_limit)?;
        tracing::debug!(
            len = probe.len,
            head_bytes = probe.head.len(),
            "probed input file"
        );
        Ok(self.verdict(request, &probe))
    }
}

/// Mean absolute byte-to-byte variation, normalized to [0, 1].
/// Returns 0.0 for inputs shorter than two bytes.
fn activity_score(bytes: &[u8]) -> f64 {
    if bytes.len() < 2 {
        return 0.0;
    }
    let total: u64 = bytes
        .windows(2)
        .map(|pair| (pair[0] as i16 - pair[1] as i16).unsigned_abs() as u64)
        .sum();
    total as f64 / (255.0 * (bytes.len() - 1) as f64)
}

fn estimated_duration_secs(len: u64) -> f64 {
    (len as f64 / ASSUMED_BYTES_PER_SEC).max(MIN_DURATION_SECS)
}
