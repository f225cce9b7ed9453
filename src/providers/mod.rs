//! Provider abstractions for embeddings, generation, and vector search
//!
//! Trait-based seams so test doubles can replace all three backends without
//! touching the orchestration logic.

pub mod embedding;
pub mod llm;
pub mod ollama;
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use vector_store::VectorStoreProvider;
