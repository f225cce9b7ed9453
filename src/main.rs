//! Interactive RAG query binary
//!
//! Run with: cargo run

use catan_rag::providers::ollama::OllamaClient;
use catan_rag::{cli, config::RagConfig, engine::QueryEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catan_rag=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RagConfig::default();

    tracing::info!("Embedding model: {}", config.llm.embed_model);
    tracing::info!("Generation model: {}", config.llm.generate_model);
    tracing::info!(
        "Vector store: {}",
        config.vector_store.storage_path.display()
    );

    // Reachability warning only; a dead daemon still fails on the first query
    let client = OllamaClient::new(&config.llm);
    if !client.health_check().await.unwrap_or(false) {
        tracing::warn!("Ollama not available at {}", config.llm.base_url);
        tracing::warn!("Start it with: ollama serve");
        tracing::warn!(
            "Then pull models: ollama pull {} && ollama pull {}",
            config.llm.embed_model,
            config.llm.generate_model
        );
    }

    let engine = QueryEngine::from_config(&config).await?;
    cli::run_interactive(&engine).await?;

    Ok(())
}
