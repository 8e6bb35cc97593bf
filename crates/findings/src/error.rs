use thiserror::Error;

/// Errors surfaced while loading and validating scanner reports.
///
/// Ingestion is where malformed input is caught; downstream stages assume
/// well-formed findings and do not re-validate.
#[derive(Debug, Error)]
pub enum FindingsError {
    /// The report file could not be read.
    #[error("failed to read report: {0}")]
    Io(#[from] std::io::Error),
    /// The report JSON is malformed or missing required fields.
    #[error("failed to parse report: {0}")]
    Parse(#[from] serde_json::Error),
}
