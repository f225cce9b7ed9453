//! Transient data types for a single query
//!
//! Nothing here is persisted; documents are sourced read-only from the
//! vector store and dropped once the response is produced.

pub mod document;
pub mod response;

pub use document::{ScoredDocument, StoredDocument};
pub use response::QueryResponse;
