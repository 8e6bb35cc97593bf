//! # Audit Embedding (`audit-embedding`)
//!
//! Turns matchable finding text into fixed-length vectors for semantic
//! comparison, behind a small provider abstraction so the reconciliation
//! engine never knows (or cares) where vectors come from.
//!
//! Providers:
//!
//! - [`HashEmbedder`] — deterministic offline stub. Equal text, equal
//!   vector, no network, no model assets. The default for tests and
//!   air-gapped runs.
//! - [`ApiEmbedder`] — blocking HTTP client for feature-extraction
//!   endpoints (Hugging Face router shape), with auth header and timeout.
//!
//! Both accept empty input text; an empty projection is a valid finding
//! state, not an error. [`cosine_similarity`] defines the zero-magnitude
//! convention (score 0.0) so degenerate vectors compare cleanly.
//!
//! ## Example
//!
//! ```
//! use embedding::{build_embedder, cosine_similarity, EmbeddingConfig};
//!
//! let provider = build_embedder(&EmbeddingConfig::default()).unwrap();
//! let a = provider.embed("disable unused services").unwrap();
//! let b = provider.embed("disable unused services").unwrap();
//! assert_eq!(cosine_similarity(&a.vector, &b.vector), 1.0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod similarity;
pub mod stub;
pub mod types;

pub use crate::api::ApiEmbedder;
pub use crate::config::EmbeddingConfig;
pub use crate::error::EmbedError;
pub use crate::similarity::{cosine_similarity, embedding_similarity};
pub use crate::stub::HashEmbedder;
pub use crate::types::Embedding;

/// An embedding provider.
///
/// Implementations must be deterministic within a run (same text, same
/// vector) and must accept empty strings. From the caller's point of view a
/// provider is a stateless pure function; loading/caching lifecycles are the
/// provider's own concern.
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Embedding, EmbedError>;

    /// Embed a batch of texts, in order.
    ///
    /// The default forwards to [`embed`](Self::embed) per text; providers
    /// with native batch semantics override this.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbedError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Build the provider selected by `cfg.mode`.
pub fn build_embedder(cfg: &EmbeddingConfig) -> Result<Box<dyn Embedder>, EmbedError> {
    cfg.validate()?;
    match cfg.mode.as_str() {
        "hash" => Ok(Box::new(HashEmbedder::new(cfg)?)),
        "api" => Ok(Box::new(ApiEmbedder::new(cfg)?)),
        other => Err(EmbedError::InvalidConfig(format!(
            "unknown embedding mode: {other}"
        ))),
    }
}
