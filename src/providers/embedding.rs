//! Embedding provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for mapping text to a fixed-dimensionality vector
///
/// Implementations:
/// - `OllamaEmbedder`: local Ollama daemon (mxbai-embed-large)
///
/// The same input text must always embed to the same vector within a single
/// backend instance.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
