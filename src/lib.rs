//! catan-rag: RAG query tool for Catan rules questions
//!
//! Embeds a question, retrieves the closest stored chunks from a persisted
//! vector store, and asks a local Ollama model to answer from that context.
//! The store is populated out of band by an indexing pipeline; this crate
//! only reads it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod providers;
pub mod store;
pub mod types;

pub use config::RagConfig;
pub use engine::QueryEngine;
pub use error::{Error, Result};
pub use types::{QueryResponse, ScoredDocument, StoredDocument};
