//! Persisted record shapes.
//!
//! A stored report is the raw findings snapshot taken at ingest time; the
//! reconciliation outcome is stored separately as one row per pair or
//! unpaired item, referencing findings by kind + input index.

use chrono::{DateTime, Utc};
use findings::{CandidateKind, DetailFinding, RuleFinding, SuggestionFinding};
use matcher::{CandidateRef, Partition};
use serde::{Deserialize, Serialize};

/// Which finding list an [`ItemRef`] points into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Rule,
    Detail,
    Suggestion,
}

impl From<CandidateKind> for ItemKind {
    fn from(kind: CandidateKind) -> Self {
        match kind {
            CandidateKind::Detail => ItemKind::Detail,
            CandidateKind::Suggestion => ItemKind::Suggestion,
        }
    }
}

/// Reference to one stored finding within a report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub index: usize,
}

impl ItemRef {
    pub fn rule(index: usize) -> Self {
        Self {
            kind: ItemKind::Rule,
            index,
        }
    }
}

impl From<CandidateRef> for ItemRef {
    fn from(candidate: CandidateRef) -> Self {
        Self {
            kind: candidate.kind.into(),
            index: candidate.index,
        }
    }
}

/// One persisted reconciliation outcome.
///
/// Verified pairs carry both references plus the score; unpaired items carry
/// only the subject with no score and `verified = false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReconRow {
    pub subject: ItemRef,
    pub object: Option<ItemRef>,
    pub score: Option<f32>,
    pub verified: bool,
}

/// A report's raw findings snapshot plus creation metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredReport {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub rules: Vec<RuleFinding>,
    pub details: Vec<DetailFinding>,
    pub suggestions: Vec<SuggestionFinding>,
}

/// Flatten a partition into its persisted rows: pairs first, then unpaired
/// rules, details, and suggestions, preserving partition order throughout.
pub fn partition_rows(partition: &Partition) -> Vec<ReconRow> {
    let mut rows = Vec::with_capacity(
        partition.pairs.len()
            + partition.unpaired_rules.len()
            + partition.unpaired_details.len()
            + partition.unpaired_suggestions.len(),
    );
    for pair in &partition.pairs {
        rows.push(ReconRow {
            subject: ItemRef::rule(pair.rule),
            object: Some(pair.candidate.into()),
            score: Some(pair.score),
            verified: pair.verified,
        });
    }
    for &rule in &partition.unpaired_rules {
        rows.push(ReconRow {
            subject: ItemRef::rule(rule),
            object: None,
            score: None,
            verified: false,
        });
    }
    for &detail in &partition.unpaired_details {
        rows.push(ReconRow {
            subject: ItemRef {
                kind: ItemKind::Detail,
                index: detail,
            },
            object: None,
            score: None,
            verified: false,
        });
    }
    for &suggestion in &partition.unpaired_suggestions {
        rows.push(ReconRow {
            subject: ItemRef {
                kind: ItemKind::Suggestion,
                index: suggestion,
            },
            object: None,
            score: None,
            verified: false,
        });
    }
    rows
}
