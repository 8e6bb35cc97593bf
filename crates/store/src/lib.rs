//! # Audit Store (`audit-store`)
//!
//! Persists each pipeline run: the raw findings snapshot taken at ingest
//! time ([`StoredReport`]) and the reconciliation outcome as one row per
//! verified pair or unpaired item ([`ReconRow`]).
//!
//! Storage goes through the [`StoreBackend`] trait with two
//! implementations: an ordered in-memory map for tests and one-shot runs,
//! and redb (feature `backend-redb`, on by default) for durable runs.
//!
//! Row references are `(kind, input index)` pairs into the stored findings
//! snapshot, so a report and its rows are self-contained: renderers resolve
//! references without re-reading scanner output.

pub mod backend;
pub mod error;
pub mod rows;

use tracing::{debug, info};

pub use crate::backend::{BackendConfig, InMemoryBackend, StoreBackend};
#[cfg(feature = "backend-redb")]
pub use crate::backend::RedbBackend;
pub use crate::error::StoreError;
pub use crate::rows::{partition_rows, ItemKind, ItemRef, ReconRow, StoredReport};

use chrono::Utc;
use findings::{DetailFinding, RuleFinding, SuggestionFinding};
use matcher::Partition;

const NEXT_ID_KEY: &str = "meta/next_report_id";

fn report_key(id: u64) -> String {
    format!("report/{id:020}")
}

fn row_key(report_id: u64, seq: usize) -> String {
    format!("rows/{report_id:020}/{seq:06}")
}

/// The audit store: reports plus their reconciliation rows.
pub struct AuditStore {
    backend: Box<dyn StoreBackend>,
}

impl AuditStore {
    /// Open a store over the configured backend.
    pub fn open(config: &BackendConfig) -> Result<Self, StoreError> {
        Ok(Self {
            backend: config.build()?,
        })
    }

    /// Construct over an already-built backend.
    pub fn with_backend(backend: Box<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    /// Create a new report from the raw findings and persist the snapshot.
    /// Returns the stored report with its freshly allocated id.
    pub fn create_report(
        &self,
        rules: Vec<RuleFinding>,
        details: Vec<DetailFinding>,
        suggestions: Vec<SuggestionFinding>,
    ) -> Result<StoredReport, StoreError> {
        let id = self.allocate_report_id()?;
        let report = StoredReport {
            id,
            created_at: Utc::now(),
            rules,
            details,
            suggestions,
        };
        self.backend
            .put(&report_key(id), &serde_json::to_vec(&report)?)?;
        info!(
            report = id,
            rules = report.rules.len(),
            details = report.details.len(),
            suggestions = report.suggestions.len(),
            "created report"
        );
        Ok(report)
    }

    /// Persist a reconciliation partition as rows under `report_id`.
    ///
    /// Rows land in partition order: verified pairs first, then unpaired
    /// rules, details, and suggestions. The write is a single batch; a
    /// failed run never leaves a half-written row set behind a successful
    /// return.
    pub fn store_partition(
        &self,
        report_id: u64,
        partition: &Partition,
    ) -> Result<Vec<ReconRow>, StoreError> {
        if self.backend.get(&report_key(report_id))?.is_none() {
            return Err(StoreError::MissingReport(report_id));
        }
        let rows = partition_rows(partition);
        let mut entries = Vec::with_capacity(rows.len());
        for (seq, row) in rows.iter().enumerate() {
            entries.push((row_key(report_id, seq), serde_json::to_vec(row)?));
        }
        self.backend.batch_put(entries)?;
        debug!(report = report_id, rows = rows.len(), "stored partition rows");
        Ok(rows)
    }

    /// Load a report's findings snapshot.
    pub fn load_report(&self, report_id: u64) -> Result<Option<StoredReport>, StoreError> {
        match self.backend.get(&report_key(report_id))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load a report's reconciliation rows in stored order.
    pub fn load_rows(&self, report_id: u64) -> Result<Vec<ReconRow>, StoreError> {
        let mut rows = Vec::new();
        self.backend
            .scan_prefix(&format!("rows/{report_id:020}/"), &mut |_key, value| {
                rows.push(serde_json::from_slice(value)?);
                Ok(())
            })?;
        Ok(rows)
    }

    fn allocate_report_id(&self) -> Result<u64, StoreError> {
        let next = match self.backend.get(NEXT_ID_KEY)? {
            Some(bytes) => serde_json::from_slice::<u64>(&bytes)?,
            None => 1,
        };
        self.backend
            .put(NEXT_ID_KEY, &serde_json::to_vec(&(next + 1))?)?;
        Ok(next)
    }
}
