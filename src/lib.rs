// Public API exports
pub mod embedder;

// Re-export main types for convenience
pub use embedder::{
    EmbedError, EmbeddingClient, EmbeddingRecord, EmbeddingsRequest, EmbeddingsResponse,
};
