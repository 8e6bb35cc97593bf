use fxhash::hash64;

use crate::config::EmbeddingConfig;
use crate::error::EmbedError;
use crate::similarity::l2_normalize_in_place;
use crate::types::Embedding;
use crate::Embedder;

/// Deterministic offline provider.
///
/// Generates sinusoid values derived from a hash of the input text, so equal
/// text always maps to equal vectors with minimal CPU cost. Useful for tests
/// and for runs where no embedding backend is reachable; the vectors carry no
/// real semantics.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
    normalize: bool,
    model_name: String,
}

impl HashEmbedder {
    /// Build from config; `dim` must be non-zero.
    pub fn new(cfg: &EmbeddingConfig) -> Result<Self, EmbedError> {
        if cfg.dim == 0 {
            return Err(EmbedError::InvalidConfig(
                "dim must be greater than zero".into(),
            ));
        }
        Ok(Self {
            dim: cfg.dim,
            normalize: cfg.normalize,
            model_name: cfg.model_name.clone(),
        })
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dim: EmbeddingConfig::default_dim(),
            normalize: EmbeddingConfig::default_normalize(),
            model_name: EmbeddingConfig::default_model_name(),
        }
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        let h = hash64(text.as_bytes());
        let mut v = vec![0f32; self.dim];
        for (idx, value) in v.iter_mut().enumerate() {
            *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
        if self.normalize {
            l2_normalize_in_place(&mut v);
        }
        Ok(Embedding {
            vector: v,
            model_name: self.model_name.clone(),
            dim: self.dim,
            normalized: self.normalize,
        })
    }
}
