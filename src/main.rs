use std::error::Error;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use auditfuse::{run_full_pipeline, AuditfuseConfig};

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AuditfuseConfig::from_file(path)?,
        None => AuditfuseConfig::default(),
    };

    let outcome = run_full_pipeline(&config)?;
    println!(
        "report {} written to {}: {} pairs, {} unpaired rules, {} unpaired details, {} unpaired suggestions",
        outcome.report_id,
        outcome.output_path.display(),
        outcome.pairs,
        outcome.unpaired_rules,
        outcome.unpaired_details,
        outcome.unpaired_suggestions,
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
