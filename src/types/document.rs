//! Retrieved document types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A document chunk as persisted in the vector store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Chunk text
    pub content: String,
    /// Metadata written at indexing time; the `"id"` key identifies the source
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl StoredDocument {
    /// Source identifier from metadata, `null` when the key is absent
    pub fn source_id(&self) -> Value {
        self.metadata.get("id").cloned().unwrap_or(Value::Null)
    }
}

/// A stored document paired with its relevance score
///
/// Produced by similarity search, best match first. The score is the store's
/// own metric; nothing downstream re-ranks on it.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    /// The retrieved document
    pub document: StoredDocument,
    /// Similarity score, higher is more similar
    pub score: f32,
}
