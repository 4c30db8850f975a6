use crate::cli::args::Args;
use crate::cli::output::{ConsoleWriter, ResultWriter};
use crate::core::classifier::{Classifier, HeuristicClassifier};
use crate::domain::error::ClassifyResult;
use crate::domain::model::ClassificationRequest;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;

/// Execute the classification command: load configuration, set up logging,
/// run the classifier, and write the result object to stdout.
pub fn execute_command(args: &Args) -> ClassifyResult<()> {
    let config_manager = ConfigManager::new()?;
    let config = match &args.config {
        Some(path) => config_manager.load_config_from_path(path)?,
        None => config_manager.load_config()?,
    };

    if !args.quiet {
        let directive = if args.verbose {
            "audioscreen=debug".to_string()
        } else {
            format!("audioscreen={}", config.global.log_level)
        };
        init_logging(&directive);
    }

    let threshold = args.threshold.unwrap_or(config.global.default_threshold);
    let request = ClassificationRequest::new(args.input.clone(), threshold)?;
    tracing::debug!(input = %request.input.display(), threshold, "starting classification");

    let classifier = HeuristicClassifier::new(config.global.probe_limit_bytes);
    let result = classifier.classify(&request)?;
    tracing::info!(
        is_safe = result.classification.is_safe,
        confidence = result.classification.confidence,
        segments = result.segments.len(),
        "classification finished"
    );

    let writer = ConsoleWriter::new(args.output);
    writer.write_result(&result)?;
    Ok(())
}
