use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;
use ureq::AgentBuilder;

use crate::config::EmbeddingConfig;
use crate::error::EmbedError;
use crate::similarity::l2_normalize_in_place;
use crate::types::Embedding;
use crate::Embedder;

/// Blocking HTTP provider speaking the feature-extraction payload shape
/// (`{"inputs": ...}`) used by Hugging Face inference endpoints.
///
/// The agent is built once with the configured timeout and reused for every
/// request; the provider itself is stateless across calls.
pub struct ApiEmbedder {
    agent: ureq::Agent,
    url: String,
    auth_header: Option<String>,
    model_name: String,
    normalize: bool,
}

impl ApiEmbedder {
    /// Build from config; `api_url` is required.
    pub fn new(cfg: &EmbeddingConfig) -> Result<Self, EmbedError> {
        let url = cfg
            .api_url
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| EmbedError::InvalidConfig("api_url is required for api mode".into()))?;
        let agent = AgentBuilder::new()
            .timeout(Duration::from_secs(cfg.api_timeout_secs))
            .build();
        Ok(Self {
            agent,
            url,
            auth_header: cfg.api_auth_header.clone(),
            model_name: cfg.model_name.clone(),
            normalize: cfg.normalize,
        })
    }

    fn send(&self, payload: Value) -> Result<Value, EmbedError> {
        let mut request = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json");
        if let Some(header) = self.auth_header.as_deref() {
            request = request.set("Authorization", header);
        }
        let response = request
            .send_string(&payload.to_string())
            .map_err(|e| EmbedError::Backend(e.to_string()))?;
        let body = response
            .into_string()
            .map_err(|e| EmbedError::Backend(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| EmbedError::MalformedResponse(e.to_string()))
    }

    fn finish(&self, mut vector: Vec<f32>) -> Embedding {
        if self.normalize {
            l2_normalize_in_place(&mut vector);
        }
        let dim = vector.len();
        Embedding {
            vector,
            model_name: self.model_name.clone(),
            dim,
            normalized: self.normalize,
        }
    }
}

impl Embedder for ApiEmbedder {
    fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
        debug!(len = text.len(), "requesting embedding");
        let response = self.send(json!({ "inputs": text }))?;
        let mut vectors = parse_embedding_vectors(response)?;
        let vector = vectors
            .pop()
            .ok_or_else(|| EmbedError::MalformedResponse("response contained no embedding".into()))?;
        Ok(self.finish(vector))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbedError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(count = texts.len(), "requesting embedding batch");
        let response = self.send(json!({ "inputs": texts }))?;
        let vectors = parse_embedding_vectors(response)?;
        if vectors.len() != texts.len() {
            return Err(EmbedError::MalformedResponse(format!(
                "endpoint returned {} embeddings for {} inputs",
                vectors.len(),
                texts.len()
            )));
        }
        Ok(vectors.into_iter().map(|v| self.finish(v)).collect())
    }
}

/// Accepts the response shapes embedding endpoints actually emit: a bare
/// vector, an array of vectors, or an object wrapping either under an
/// `"embeddings"` key.
fn parse_embedding_vectors(value: Value) -> Result<Vec<Vec<f32>>, EmbedError> {
    match value {
        Value::Object(mut map) => match map.remove("embeddings") {
            Some(inner) => parse_vector_collection(inner),
            None => Err(EmbedError::MalformedResponse(
                "unsupported response shape".into(),
            )),
        },
        other => parse_vector_collection(other),
    }
}

fn parse_vector_collection(value: Value) -> Result<Vec<Vec<f32>>, EmbedError> {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                Ok(Vec::new())
            } else if items.iter().all(|item| matches!(item, Value::Array(_))) {
                items.into_iter().map(parse_vector).collect()
            } else {
                parse_vector(Value::Array(items)).map(|v| vec![v])
            }
        }
        other => Err(EmbedError::MalformedResponse(format!(
            "embedding payload must be an array, got {other:?}"
        ))),
    }
}

fn parse_vector(value: Value) -> Result<Vec<f32>, EmbedError> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .map(|entry| match entry {
                Value::Number(num) => num.as_f64().map(|f| f as f32).ok_or_else(|| {
                    EmbedError::MalformedResponse("non-finite embedding value".into())
                }),
                other => Err(EmbedError::MalformedResponse(format!(
                    "embedding entries must be numbers, got {other:?}"
                ))),
            })
            .collect(),
        other => Err(EmbedError::MalformedResponse(format!(
            "embedding vector must be an array, got {other:?}"
        ))),
    }
}
