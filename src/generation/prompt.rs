//! Prompt templates for RAG queries

use crate::types::ScoredDocument;

/// Separator between retrieved chunks in the context block
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Prompt builder for RAG queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the context block from search results
    ///
    /// Contents are joined in the order the store returned them; zero
    /// results yield an empty string.
    pub fn build_context(results: &[ScoredDocument]) -> String {
        results
            .iter()
            .map(|r| r.document.content.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }

    /// Render the fixed prompt template
    ///
    /// The phrasing is relied on by downstream consumers; do not reword it.
    pub fn build_prompt(context: &str, question: &str) -> String {
        format!(
            r#"
Answer like you are a Catan expert with friendly and helpful tone.
Using the following context, answer the question at the end:

{context}

---

Answer the question based on the above context: {question}
"#,
            context = context,
            question = question
        )
    }
}
