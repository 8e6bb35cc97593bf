use serde::{Deserialize, Serialize};

/// A fixed-length vector representation of a finding's matchable text.
///
/// Embeddings carry no unit; they only participate in cosine comparison.
/// A provider must return byte-identical vectors for identical text within
/// one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding values.
    pub vector: Vec<f32>,
    /// Name of the model that produced the vector.
    pub model_name: String,
    /// Dimension of `vector`.
    pub dim: usize,
    /// Whether `vector` was L2-normalized by the provider.
    pub normalized: bool,
}
