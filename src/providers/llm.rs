//! LLM provider trait for answer generation

use async_trait::async_trait;

use crate::error::Result;

/// Trait for generating a completion from a fully rendered prompt
///
/// Implementations:
/// - `OllamaLlm`: local Ollama daemon (llama3.2)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a single completion, blocking until the model returns
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// The model being used
    fn model(&self) -> &str;

    /// Provider name for logging
    fn name(&self) -> &str;
}
