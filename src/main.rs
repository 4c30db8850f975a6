// Audioscreen - Audio content classification CLI
use audioscreen::cli::args::Args;
use audioscreen::cli::commands::execute_command;
use audioscreen::cli::output::{ConsoleWriter, ResultWriter};
use audioscreen::domain::model::ErrorEnvelope;
use clap::Parser;

fn main() {
    let args = Args::parse();
    let writer = ConsoleWriter::new(args.output);

    if let Err(err) = execute_command(&args) {
        let envelope = ErrorEnvelope::from(&err);
        if writer.write_envelope(&envelope).is_err() {
            // stdout is gone; the exit code still signals failure.
            eprintln!("Error: {}", envelope.message);
        }
        std::process::exit(1);
    }
}
