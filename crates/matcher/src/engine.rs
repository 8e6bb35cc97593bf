use std::sync::Arc;

use embedding::{embedding_similarity, Embedder, Embedding};
use findings::{CandidateKind, DetailFinding, RuleFinding, SuggestionFinding};
use tracing::{debug, info};

use crate::pool::CandidatePool;
use crate::types::{CandidateRef, MatchError, MatcherConfig, Partition, VerifiedPair};

/// Trait for a reconciliation engine.
pub trait Reconciler: Send + Sync {
    /// Pair rules with auditor findings and partition the remainder.
    fn reconcile(
        &self,
        rules: &[RuleFinding],
        details: &[DetailFinding],
        suggestions: &[SuggestionFinding],
    ) -> Result<Partition, MatchError>;
}

/// Production reconciler implementing the documented greedy pairing policy.
///
/// The policy is order-sensitive by contract, not by accident: rules are
/// processed in caller order, each scanning the remaining detail pool first
/// and the remaining suggestion pool second, keeping the first-seen maximum
/// on ties. A matched candidate is evicted for all later rules, so the
/// result is greedy rather than a maximum-weight assignment; callers that
/// can trade compatibility for matching quality should consider a proper
/// assignment algorithm instead.
pub struct GreedyReconciler {
    embedder: Arc<dyn Embedder>,
    config: MatcherConfig,
}

impl GreedyReconciler {
    /// Construct from an injected embedding provider and explicit config.
    pub fn new(embedder: Arc<dyn Embedder>, config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { embedder, config })
    }

    /// Construct with the default configuration.
    pub fn with_defaults(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            config: MatcherConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    fn embed_projections(&self, texts: Vec<String>) -> Result<Vec<Embedding>, MatchError> {
        Ok(self.embedder.embed_batch(&texts)?)
    }

    /// Scan one pool for a strictly better candidate than `best` so far.
    fn scan_pool(
        pool: &CandidatePool,
        kind: CandidateKind,
        rule_embedding: &Embedding,
        best_score: &mut f32,
        best: &mut Option<CandidateRef>,
    ) {
        for (index, candidate_embedding) in pool.iter_live() {
            let score = embedding_similarity(rule_embedding, candidate_embedding);
            if score > *best_score {
                *best_score = score;
                *best = Some(CandidateRef { kind, index });
            }
        }
    }
}

impl Reconciler for GreedyReconciler {
    fn reconcile(
        &self,
        rules: &[RuleFinding],
        details: &[DetailFinding],
        suggestions: &[SuggestionFinding],
    ) -> Result<Partition, MatchError> {
        info!(
            rules = rules.len(),
            details = details.len(),
            suggestions = suggestions.len(),
            "starting pairwise comparisons"
        );

        // Embed everything up front; a provider failure here aborts the run
        // before any pairing decision, so callers never observe a partial
        // partition.
        let rule_embeddings =
            self.embed_projections(rules.iter().map(RuleFinding::matchable_text).collect())?;
        let detail_embeddings =
            self.embed_projections(details.iter().map(DetailFinding::matchable_text).collect())?;
        let suggestion_embeddings = self.embed_projections(
            suggestions
                .iter()
                .map(SuggestionFinding::matchable_text)
                .collect(),
        )?;

        let mut detail_pool = CandidatePool::new(detail_embeddings);
        let mut suggestion_pool = CandidatePool::new(suggestion_embeddings);

        let mut pairs = Vec::new();
        let mut unpaired_rules = Vec::new();

        for (rule_index, rule_embedding) in rule_embeddings.iter().enumerate() {
            let mut best_score = 0.0f32;
            let mut best: Option<CandidateRef> = None;

            // Details scan before suggestions; combined with the strict
            // `>` update this keeps the first-seen maximum on ties.
            Self::scan_pool(
                &detail_pool,
                CandidateKind::Detail,
                rule_embedding,
                &mut best_score,
                &mut best,
            );
            Self::scan_pool(
                &suggestion_pool,
                CandidateKind::Suggestion,
                rule_embedding,
                &mut best_score,
                &mut best,
            );

            match best {
                Some(candidate) if best_score > self.config.threshold => {
                    debug!(
                        rule = rule_index,
                        kind = %candidate.kind,
                        candidate = candidate.index,
                        score = best_score,
                        "verified pair"
                    );
                    match candidate.kind {
                        CandidateKind::Detail => detail_pool.evict(candidate.index),
                        CandidateKind::Suggestion => suggestion_pool.evict(candidate.index),
                    }
                    pairs.push(VerifiedPair {
                        rule: rule_index,
                        candidate,
                        score: best_score,
                        verified: true,
                    });
                }
                _ => {
                    debug!(
                        rule = rule_index,
                        best_score, "no suitable pair; rule left unpaired"
                    );
                    unpaired_rules.push(rule_index);
                }
            }
        }

        let partition = Partition {
            pairs,
            unpaired_rules,
            unpaired_details: detail_pool.survivors(),
            unpaired_suggestions: suggestion_pool.survivors(),
        };
        info!(
            pairs = partition.pairs.len(),
            unpaired_rules = partition.unpaired_rules.len(),
            unpaired_details = partition.unpaired_details.len(),
            unpaired_suggestions = partition.unpaired_suggestions.len(),
            "comparisons completed"
        );
        Ok(partition)
    }
}
