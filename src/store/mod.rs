//! Read-only client for the persisted vector store
//!
//! The indexing pipeline writes a JSON snapshot of embedded chunks into the
//! configured directory; this client loads it once and serves cosine
//! nearest-neighbor queries over it. Nothing here ever writes to disk.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::config::VectorStoreConfig;
use crate::error::{Error, Result};
use crate::providers::vector_store::VectorStoreProvider;
use crate::types::{ScoredDocument, StoredDocument};

/// Snapshot filename inside the storage directory
const STORE_FILE: &str = "store.json";

/// Persisted entry: a chunk plus the embedding computed at indexing time
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    content: String,
    #[serde(default)]
    metadata: HashMap<String, Value>,
    embedding: Vec<f32>,
}

/// Vector store loaded from a pre-populated directory
pub struct PersistedVectorStore {
    entries: Vec<StoredEntry>,
}

impl PersistedVectorStore {
    /// Open the store at the configured path
    ///
    /// The directory must already exist and contain a snapshot; a missing or
    /// unreadable store is an error surfaced to the caller.
    pub async fn open(config: &VectorStoreConfig) -> Result<Self> {
        let path = config.storage_path.join(STORE_FILE);
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::VectorStore(format!("Failed to read store at {}: {}", path.display(), e))
        })?;

        let entries: Vec<StoredEntry> = serde_json::from_str(&raw)
            .map_err(|e| Error::VectorStore(format!("Malformed store snapshot: {}", e)))?;

        tracing::debug!(
            "Loaded {} stored documents from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { entries })
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl VectorStoreProvider for PersistedVectorStore {
    async fn search(&self, query_embedding: &[f32], top_k: usize) -> Result<Vec<ScoredDocument>> {
        let mut results: Vec<ScoredDocument> = self
            .entries
            .iter()
            .map(|entry| ScoredDocument {
                document: StoredDocument {
                    content: entry.content.clone(),
                    metadata: entry.metadata.clone(),
                },
                score: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    fn name(&self) -> &str {
        "persisted-json"
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn write_store(dir: &Path, entries: &Value) {
        std::fs::write(dir.join(STORE_FILE), serde_json::to_string(entries).unwrap()).unwrap();
    }

    fn config_for(dir: &Path) -> VectorStoreConfig {
        VectorStoreConfig {
            storage_path: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_cosine_similarity() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_open_missing_store_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = tokio_test::block_on(PersistedVectorStore::open(&config_for(dir.path())));
        assert!(matches!(result, Err(Error::VectorStore(_))));
    }

    #[test]
    fn test_open_malformed_store_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORE_FILE), "not json").unwrap();
        let result = tokio_test::block_on(PersistedVectorStore::open(&config_for(dir.path())));
        assert!(matches!(result, Err(Error::VectorStore(_))));
    }

    #[test]
    fn test_search_orders_by_similarity() {
        let dir = tempfile::tempdir().unwrap();
        write_store(
            dir.path(),
            &json!([
                {"content": "far", "metadata": {"id": 1}, "embedding": [0.0, 1.0]},
                {"content": "exact", "metadata": {"id": 2}, "embedding": [1.0, 0.0]},
                {"content": "near", "metadata": {"id": 3}, "embedding": [0.9, 0.1]},
            ]),
        );

        let store = tokio_test::block_on(PersistedVectorStore::open(&config_for(dir.path()))).unwrap();
        assert_eq!(store.len(), 3);

        let results = tokio_test::block_on(store.search(&[1.0, 0.0], 5)).unwrap();
        let contents: Vec<&str> = results.iter().map(|r| r.document.content.as_str()).collect();
        assert_eq!(contents, vec!["exact", "near", "far"]);
        assert!(results[0].score >= results[1].score);
        assert!(results[1].score >= results[2].score);
    }

    #[test]
    fn test_search_truncates_to_top_k() {
        let dir = tempfile::tempdir().unwrap();
        write_store(
            dir.path(),
            &json!([
                {"content": "a", "embedding": [1.0, 0.0]},
                {"content": "b", "embedding": [0.9, 0.1]},
                {"content": "c", "embedding": [0.0, 1.0]},
            ]),
        );

        let store = tokio_test::block_on(PersistedVectorStore::open(&config_for(dir.path()))).unwrap();
        let results = tokio_test::block_on(store.search(&[1.0, 0.0], 2)).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_returns_fewer_when_store_small() {
        let dir = tempfile::tempdir().unwrap();
        write_store(
            dir.path(),
            &json!([{"content": "only", "embedding": [1.0, 0.0]}]),
        );

        let store = tokio_test::block_on(PersistedVectorStore::open(&config_for(dir.path()))).unwrap();
        let results = tokio_test::block_on(store.search(&[1.0, 0.0], 5)).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_empty_store_returns_no_results() {
        let dir = tempfile::tempdir().unwrap();
        write_store(dir.path(), &json!([]));

        let store = tokio_test::block_on(PersistedVectorStore::open(&config_for(dir.path()))).unwrap();
        assert!(store.is_empty());
        let results = tokio_test::block_on(store.search(&[1.0, 0.0], 5)).unwrap();
        assert!(results.is_empty());
    }
}
