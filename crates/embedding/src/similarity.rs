//! Cosine similarity over embedding vectors.

use crate::types::Embedding;

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Defined as 0.0 when either vector has zero magnitude; degenerate vectors
/// are a valid condition, not an error. Accumulation runs in f64 to keep the
/// score stable for long vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())) as f32
}

/// [`cosine_similarity`] over two [`Embedding`] values.
pub fn embedding_similarity(a: &Embedding, b: &Embedding) -> f32 {
    cosine_similarity(&a.vector, &b.vector)
}

/// In-place L2 normalization helper shared by the providers.
pub(crate) fn l2_normalize_in_place(v: &mut [f32]) {
    let norm = v.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm > 0.0 {
        let inv = 1.0 / norm as f32;
        for x in v.iter_mut() {
            *x *= inv;
        }
    }
}
