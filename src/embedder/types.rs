// the wire contract
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmbeddingsRequest {
    pub input: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
