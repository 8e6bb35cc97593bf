//! Candidate pool with arena-style eviction.
//!
//! Entries are never removed or reordered; eviction flips a flag. That keeps
//! eviction O(1), keeps candidate indices stable for the lifetime of a run,
//! and makes the invariant auditable: a candidate is live until evicted, and
//! eviction is permanent.

use embedding::Embedding;

struct PoolEntry {
    embedding: Embedding,
    evicted: bool,
}

pub(crate) struct CandidatePool {
    entries: Vec<PoolEntry>,
}

impl CandidatePool {
    /// Build a pool from per-candidate embeddings, in input order.
    pub(crate) fn new(embeddings: Vec<Embedding>) -> Self {
        Self {
            entries: embeddings
                .into_iter()
                .map(|embedding| PoolEntry {
                    embedding,
                    evicted: false,
                })
                .collect(),
        }
    }

    /// Iterate live entries as `(input_index, embedding)`, in input order.
    pub(crate) fn iter_live(&self) -> impl Iterator<Item = (usize, &Embedding)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.evicted)
            .map(|(index, entry)| (index, &entry.embedding))
    }

    /// Permanently remove the candidate at `index` from the pool.
    pub(crate) fn evict(&mut self, index: usize) {
        let entry = &mut self.entries[index];
        debug_assert!(!entry.evicted, "candidate {index} evicted twice");
        entry.evicted = true;
    }

    /// Number of live candidates.
    pub(crate) fn live_len(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.evicted).count()
    }

    /// Input indices of all still-live candidates, in input order.
    pub(crate) fn survivors(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.evicted)
            .map(|(index, _)| index)
            .collect()
    }
}
