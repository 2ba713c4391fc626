// client.rs - the HTTP embeddings client
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::embedder::shape::EmbeddingsResponse;
use crate::embedder::types::EmbeddingsRequest;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    ServerError { status: u16, body: String },
}

pub struct EmbeddingClient {
    http: Client,
    endpoint: String,
}

impl EmbeddingClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// POST the input strings and return the embedding vector, normalized
    /// across the known response shapes.
    ///
    /// Non-success statuses surface as `ServerError` with the raw body text;
    /// a body matching no known shape is not an error and yields an empty
    /// vector.
    pub async fn embed(
        &self,
        input: Vec<String>,
        model: Option<String>,
    ) -> Result<Vec<f32>, EmbedError> {
        let req = EmbeddingsRequest { input, model };

        let response = self.http.post(&self.endpoint).json(&req).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EmbedError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let shape: EmbeddingsResponse = response.json().await?;
        Ok(shape.into_vector())
    }
}
