//! Workspace umbrella crate for auditfuse.
//!
//! Stitches the pipeline stages together — scanner ingestion, embedding,
//! reconciliation, persistence, and report rendering — so callers can run
//! the whole audit-merge flow with a single entry point, and re-exports the
//! member crates' public surface for library consumers.

pub use embedding::{
    build_embedder, cosine_similarity, ApiEmbedder, EmbedError, Embedder, Embedding,
    EmbeddingConfig, HashEmbedder,
};
pub use findings::{
    load_lynis_report, load_openscap_report, parse_lynis_report, parse_openscap_report,
    CandidateKind, DetailDescription, DetailFinding, FindingsError, RuleFinding,
    SuggestionFinding,
};
pub use matcher::{
    CandidateRef, GreedyReconciler, MatchError, MatcherConfig, Partition, Reconciler,
    VerifiedPair,
};
pub use report::{render_html, sanitize_text};
pub use store::{
    AuditStore, BackendConfig, ItemKind, ItemRef, ReconRow, StoreError, StoredReport,
};

pub mod config;

pub use crate::config::{AuditfuseConfig, ConfigLoadError};

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

/// Errors that can occur while running the full pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Scanner report ingestion failed.
    #[error("ingest failure: {0}")]
    Findings(#[from] FindingsError),
    /// The embedding provider could not be built.
    #[error("embedding provider failure: {0}")]
    Embed(#[from] EmbedError),
    /// Reconciliation failed; nothing was persisted.
    #[error("reconciliation failure: {0}")]
    Match(#[from] MatchError),
    /// Persistence failed.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
    /// The rendered report could not be written.
    #[error("failed to write report: {0}")]
    WriteReport(#[from] std::io::Error),
}

/// Summary of one completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Id of the stored report.
    pub report_id: u64,
    /// Verified pair count.
    pub pairs: usize,
    /// Unpaired rule count.
    pub unpaired_rules: usize,
    /// Unpaired detail count.
    pub unpaired_details: usize,
    /// Unpaired suggestion count.
    pub unpaired_suggestions: usize,
    /// Where the rendered HTML landed.
    pub output_path: PathBuf,
}

/// Execute the full pipeline:
///
/// 1. Load both scanner reports.
/// 2. Reconcile rules against detail and suggestion findings.
/// 3. Persist the findings snapshot and the reconciliation rows.
/// 4. Render the combined HTML report to the configured output path.
///
/// Reconciliation runs before anything is persisted, so a provider failure
/// aborts the run with nothing written — a failed run is distinguishable
/// from a run that legitimately produced zero pairs.
pub fn run_full_pipeline(config: &AuditfuseConfig) -> Result<PipelineOutcome, PipelineError> {
    info!("starting pipeline");

    let rules = load_openscap_report(&config.inputs.openscap_report)?;
    let (details, suggestions) = load_lynis_report(&config.inputs.lynis_report)?;
    info!(
        rules = rules.len(),
        details = details.len(),
        suggestions = suggestions.len(),
        "fetched scanner findings"
    );

    let embedder: Arc<dyn Embedder> = Arc::from(build_embedder(&config.embedding)?);
    let reconciler = GreedyReconciler::new(embedder, config.matcher.clone())?;
    let partition = reconciler.reconcile(&rules, &details, &suggestions)?;

    let audit_store = AuditStore::open(&config.store.backend_config())?;
    let stored_report = audit_store.create_report(rules, details, suggestions)?;
    let rows = audit_store.store_partition(stored_report.id, &partition)?;
    info!(report = stored_report.id, rows = rows.len(), "stored reconciliation results");

    let html = render_html(&stored_report, &rows);
    let output_path = PathBuf::from(&config.report.output_path);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, html)?;
    info!(path = %output_path.display(), "audit report generated");

    Ok(PipelineOutcome {
        report_id: stored_report.id,
        pairs: partition.pairs.len(),
        unpaired_rules: partition.unpaired_rules.len(),
        unpaired_details: partition.unpaired_details.len(),
        unpaired_suggestions: partition.unpaired_suggestions.len(),
        output_path,
    })
}
