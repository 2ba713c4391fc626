// shape.rs - response-shape normalization
use serde::Deserialize;

/// The response layouts embeddings servers are known to use.
///
/// Some llama.cpp builds return the vector under a flat `embedding` key,
/// while LM Studio and OpenAI-style gateways nest it under `data`. Variants
/// are tried in declaration order; any body matching neither lands in
/// `Unrecognized` and normalizes to an empty vector.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingsResponse {
    Flat { embedding: Vec<f32> },
    Nested { data: Vec<EmbeddingRecord> },
    Unrecognized(serde_json::Value),
}

/// One entry of an OpenAI-style `data` array. Servers attach extra keys
/// (`object`, `index`, usage stats); only the vector matters here.
#[derive(Debug, Deserialize)]
pub struct EmbeddingRecord {
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl EmbeddingsResponse {
    /// Extract the embedding vector, or an empty one when the body carries
    /// none. Never fails: an empty `data` array or a first record without
    /// an `embedding` key both normalize to an empty vector.
    pub fn into_vector(self) -> Vec<f32> {
        match self {
            EmbeddingsResponse::Flat { embedding } => embedding,
            EmbeddingsResponse::Nested { data } => data
                .into_iter()
                .next()
                .and_then(|record| record.embedding)
                .unwrap_or_default(),
            EmbeddingsResponse::Unrecognized(_) => Vec::new(),
        }
    }
}
