//! Single-query pipeline
//!
//! Embed the question, search the store, assemble the prompt, invoke the
//! model, and pair the answer with its source identifiers. Strictly
//! sequential; each step blocks until its backend returns, and any failure
//! propagates unmodified.

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::providers::ollama::OllamaProvider;
use crate::providers::{EmbeddingProvider, LlmProvider, VectorStoreProvider};
use crate::store::PersistedVectorStore;
use crate::types::QueryResponse;

/// Orchestrates the retrieval-augmented answer pipeline
pub struct QueryEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStoreProvider>,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
}

impl QueryEngine {
    /// Compose an engine from explicit providers
    ///
    /// Tests substitute doubles for all three backends here.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStoreProvider>,
        llm: Arc<dyn LlmProvider>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            store,
            llm,
            top_k,
        }
    }

    /// Wire the Ollama adapters and the persisted store from configuration
    pub async fn from_config(config: &RagConfig) -> Result<Self> {
        let (embedder, llm) = OllamaProvider::new(&config.llm).split();
        let store = PersistedVectorStore::open(&config.vector_store).await?;

        Ok(Self::new(
            Arc::new(embedder),
            Arc::new(store),
            Arc::new(llm),
            config.retrieval.top_k,
        ))
    }

    /// Answer a single question
    ///
    /// An empty search result is not special-cased: the prompt is still sent
    /// to the model with an empty context block.
    pub async fn answer_query(&self, query_text: &str) -> Result<QueryResponse> {
        let query_embedding = self.embedder.embed(query_text).await?;
        let results = self.store.search(&query_embedding, self.top_k).await?;
        tracing::debug!(
            "Retrieved {} documents from {}",
            results.len(),
            self.store.name()
        );

        let context = PromptBuilder::build_context(&results);
        let prompt = PromptBuilder::build_prompt(&context, query_text);

        tracing::info!("Generating answer with model: {}", self.llm.model());
        let answer = self.llm.generate(&prompt).await?;

        let sources = results.iter().map(|r| r.document.source_id()).collect();
        Ok(QueryResponse::new(answer, sources))
    }
}
