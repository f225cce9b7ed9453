//! Response types for RAG queries

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Answer to a single query with its ordered source identifiers
///
/// Invariant: `sources` holds one entry per retrieved document, in retrieval
/// order, with `null` standing in for documents that carry no `"id"` metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer text
    pub answer: String,
    /// Source identifiers, one per retrieved document
    pub sources: Vec<Value>,
}

impl QueryResponse {
    /// Create a new query response
    pub fn new(answer: String, sources: Vec<Value>) -> Self {
        Self { answer, sources }
    }
}

impl fmt::Display for QueryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self
            .sources
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Response: {}\nSources: [{}]", self.answer, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_integer_ids() {
        let response = QueryResponse::new("the answer".to_string(), vec![json!(1), json!(2), json!(3)]);
        assert_eq!(
            response.to_string(),
            "Response: the answer\nSources: [1, 2, 3]"
        );
    }

    #[test]
    fn test_display_null_and_string_ids() {
        let response =
            QueryResponse::new("ok".to_string(), vec![json!("rules.pdf:0"), Value::Null]);
        assert_eq!(
            response.to_string(),
            "Response: ok\nSources: [\"rules.pdf:0\", null]"
        );
    }

    #[test]
    fn test_display_no_sources() {
        let response = QueryResponse::new("ok".to_string(), Vec::new());
        assert_eq!(response.to_string(), "Response: ok\nSources: []");
    }
}
