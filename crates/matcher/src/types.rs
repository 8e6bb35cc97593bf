use embedding::EmbedError;
use findings::CandidateKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for a reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatcherConfig {
    /// Similarity a pair must strictly exceed to count as verified.
    ///
    /// The comparison is strict `>` at any threshold: a best score exactly
    /// equal to the threshold leaves the rule unpaired and the candidate
    /// available to later rules.
    #[serde(default = "MatcherConfig::default_threshold")]
    pub threshold: f32,
}

impl MatcherConfig {
    pub(crate) fn default_threshold() -> f32 {
        0.5
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(-1.0..=1.0).contains(&self.threshold) || self.threshold.is_nan() {
            return Err(MatchError::InvalidConfig(
                "threshold must lie in [-1.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

/// Reference to one candidate in the caller's input lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CandidateRef {
    /// Which input list the index points into.
    pub kind: CandidateKind,
    /// Position within that list.
    pub index: usize,
}

/// A rule–candidate match whose similarity exceeded the threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VerifiedPair {
    /// Position of the rule in the caller's rule list.
    pub rule: usize,
    /// The matched candidate.
    pub candidate: CandidateRef,
    /// Cosine similarity at pairing time.
    pub score: f32,
    /// Always true for emitted pairs; persisted alongside the score so
    /// stored rows are self-describing.
    pub verified: bool,
}

/// Output of a reconciliation run: a disjoint cover of every input.
///
/// Each rule index appears exactly once across `pairs` and
/// `unpaired_rules`; each candidate index appears exactly once across
/// `pairs` and its kind's unpaired list. Unpaired lists preserve relative
/// input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Partition {
    /// Verified pairs, in rule-processing order.
    pub pairs: Vec<VerifiedPair>,
    /// Rules with no candidate strictly above the threshold.
    pub unpaired_rules: Vec<usize>,
    /// Details never claimed by any rule.
    pub unpaired_details: Vec<usize>,
    /// Suggestions never claimed by any rule.
    pub unpaired_suggestions: Vec<usize>,
}

impl Partition {
    /// Total rules covered by this partition.
    pub fn rule_count(&self) -> usize {
        self.pairs.len() + self.unpaired_rules.len()
    }

    /// Total candidates covered by this partition.
    pub fn candidate_count(&self) -> usize {
        self.pairs.len() + self.unpaired_details.len() + self.unpaired_suggestions.len()
    }
}

/// Errors produced by the reconciliation engine.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid engine configuration.
    #[error("invalid matcher config: {0}")]
    InvalidConfig(String),
    /// The embedding provider failed; the run was aborted before any
    /// pairing decision and no partition exists.
    #[error("embedding provider failure: {0}")]
    Embed(#[from] EmbedError),
}
