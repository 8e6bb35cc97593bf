use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// Configuration for constructing an embedding provider.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// pipeline configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    /// Provider selection: `"hash"` (deterministic offline stub) or `"api"`
    /// (HTTP feature-extraction endpoint).
    #[serde(default = "EmbeddingConfig::default_mode")]
    pub mode: String,
    /// Model name recorded on produced embeddings; for `"api"` mode this is
    /// informational, the endpoint decides the actual model.
    #[serde(default = "EmbeddingConfig::default_model_name")]
    pub model_name: String,
    /// Vector dimension for the hash provider.
    #[serde(default = "EmbeddingConfig::default_dim")]
    pub dim: usize,
    /// Whether providers L2-normalize vectors before returning them.
    #[serde(default = "EmbeddingConfig::default_normalize")]
    pub normalize: bool,
    /// Endpoint URL, required in `"api"` mode.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Full `Authorization` header value, e.g. `"Bearer hf_..."`.
    #[serde(default)]
    pub api_auth_header: Option<String>,
    /// Per-request timeout for the API provider.
    #[serde(default = "EmbeddingConfig::default_timeout")]
    pub api_timeout_secs: u64,
}

impl EmbeddingConfig {
    pub(crate) fn default_mode() -> String {
        "hash".to_string()
    }

    pub(crate) fn default_model_name() -> String {
        "secbert".to_string()
    }

    pub(crate) fn default_dim() -> usize {
        384
    }

    pub(crate) fn default_normalize() -> bool {
        true
    }

    pub(crate) fn default_timeout() -> u64 {
        30
    }

    /// Validate the configuration before building a provider.
    pub fn validate(&self) -> Result<(), EmbedError> {
        match self.mode.as_str() {
            "hash" => {
                if self.dim == 0 {
                    return Err(EmbedError::InvalidConfig(
                        "dim must be greater than zero".into(),
                    ));
                }
            }
            "api" => {
                if self.api_url.as_deref().map_or(true, str::is_empty) {
                    return Err(EmbedError::InvalidConfig(
                        "api_url is required for api mode".into(),
                    ));
                }
            }
            other => {
                return Err(EmbedError::InvalidConfig(format!(
                    "unknown embedding mode: {other}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            mode: Self::default_mode(),
            model_name: Self::default_model_name(),
            dim: Self::default_dim(),
            normalize: Self::default_normalize(),
            api_url: None,
            api_auth_header: None,
            api_timeout_secs: Self::default_timeout(),
        }
    }
}
