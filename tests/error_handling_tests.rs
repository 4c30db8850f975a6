use audioscreen::{
    Classifier, ClassificationRequest, ClassifyError, ErrorEnvelope, HeuristicClassifier,
    ResultStatus,
};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Error path tests: every failure maps to a stable error envelope.
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_nonexistent_file_error() {
        let request =
            ClassificationRequest::new(PathBuf::from("/no/such/clip.wav"), 0.45).unwrap();
        let classifier = HeuristicClassifier::default();

        let err = classifier.classify(&request).unwrap_err();
        assert!(matches!(err, ClassifyError::FileNotFound));

        let envelope = ErrorEnvelope::from(&err);
        assert_eq!(envelope.status, ResultStatus::Error);
        assert_eq!(envelope.message, "File not found");
    }

    #[test]
    fn test_empty_file_error() {
        let file = NamedTempFile::new().unwrap();
        let request =
            ClassificationRequest::new(file.path().to_path_buf(), 0.45).unwrap();
        let classifier = HeuristicClassifier::default();

        let err = classifier.classify(&request).unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyFile));

        let envelope = ErrorEnvelope::from(&err);
        assert_eq!(envelope.message, "File is empty");
    }

    #[test]
    fn test_invalid_threshold_rejected_before_io() {
        // Validation fires even though the path does not exist.
        let err = ClassificationRequest::new(PathBuf::from("/no/such/clip.wav"), 2.0)
            .unwrap_err();
        assert!(matches!(err, ClassifyError::InvalidThreshold(_)));
    }

    #[test]
    fn test_envelope_serializes_to_contract_shape() {
        let envelope = ErrorEnvelope::from(&ClassifyError::FileNotFound);
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"status":"error","message":"File not found"}"#);
    }
}
