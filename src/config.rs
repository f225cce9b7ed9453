//! Configuration for the RAG query tool
//!
//! The defaults carry the fixed model identifiers and storage location; the
//! structs exist so tests can substitute backends instead of patching
//! process-wide constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration, passed into the query engine at construction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Ollama/LLM configuration
    pub llm: LlmConfig,
    /// Vector store configuration
    pub vector_store: VectorStoreConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
}

/// LLM (Ollama) configuration
///
/// No timeout is configured: every call blocks until the daemon answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "mxbai-embed-large".to_string(),
            generate_model: "llama3.2".to_string(),
        }
    }
}

/// Vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreConfig {
    /// Directory holding the persisted store
    ///
    /// Must already exist and be populated by the indexing pipeline; this
    /// tool never creates or writes it.
    pub storage_path: PathBuf,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("chroma"),
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of nearest documents to retrieve per query
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}
