pub mod client;
pub mod shape;
pub mod types;


pub use client::{EmbedError, EmbeddingClient};
pub use shape::{EmbeddingRecord, EmbeddingsResponse};
pub use types::EmbeddingsRequest;
