//! Vector store provider trait for similarity search

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ScoredDocument;

/// Trait for nearest-neighbor search over already-embedded documents
///
/// Implementations:
/// - `PersistedVectorStore`: read-only snapshot on local disk
///
/// This tool never writes to the store; indexing happens out of band.
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Top-k nearest stored documents for the query embedding
    ///
    /// Ordered best match first. Returns fewer than `top_k` entries when the
    /// store holds fewer documents.
    async fn search(&self, query_embedding: &[f32], top_k: usize) -> Result<Vec<ScoredDocument>>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
