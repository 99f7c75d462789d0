// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use fabstir_embed_server::{
    api::{start_server, AppState},
    config::ServerConfig,
    embeddings::{OnnxEmbeddingModel, TextEncoder},
    version,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // RUST_LOG wins; default to info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    config.validate().context("Invalid configuration")?;

    info!("🚀 Starting {}", version::get_version_string());
    info!("📦 BUILD VERSION: {}", version::VERSION);

    // Load the model once; it is shared read-only by every request
    info!("🧠 Loading embedding model...");
    let model = OnnxEmbeddingModel::load(config.model_config())
        .await
        .context("Failed to load embedding model")?;
    info!(
        "✅ Model loaded successfully: {} ({}D)",
        model.model_name(),
        model.dimension()
    );

    let state = AppState::new(Arc::new(model)).with_max_body_bytes(config.max_body_bytes);
    start_server(config.socket_addr(), state).await
}
