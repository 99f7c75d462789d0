// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Locating the ONNX model and tokenizer on disk
//!
//! Local paths win. When a file is missing and downloads are allowed, it is
//! fetched from the HuggingFace Hub into the hub cache.

use anyhow::{bail, Context, Result};
use hf_hub::api::tokio::Api;
use std::path::PathBuf;
use tracing::info;

use super::EmbeddingModelConfig;

/// ONNX export inside a sentence-transformers hub repository
pub const HUB_MODEL_FILE: &str = "onnx/model.onnx";

/// Tokenizer inside a sentence-transformers hub repository
pub const HUB_TOKENIZER_FILE: &str = "tokenizer.json";

/// Resolved paths of the files needed to build the model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFiles {
    pub model: PathBuf,
    pub tokenizer: PathBuf,
}

pub async fn resolve_model_files(config: &EmbeddingModelConfig) -> Result<ModelFiles> {
    let model_local = config.model_path.exists();
    let tokenizer_local = config.tokenizer_path.exists();

    if model_local && tokenizer_local {
        return Ok(ModelFiles {
            model: config.model_path.clone(),
            tokenizer: config.tokenizer_path.clone(),
        });
    }

    if !config.allow_download {
        if !model_local {
            bail!("ONNX model file not found: {}", config.model_path.display());
        }
        bail!("Tokenizer file not found: {}", config.tokenizer_path.display());
    }

    info!("📥 Fetching missing model files from HuggingFace Hub: {}", config.repo);
    let api = Api::new().context("Failed to create HuggingFace Hub client")?;
    let repo = api.model(config.repo.clone());

    let model = if model_local {
        config.model_path.clone()
    } else {
        repo.get(HUB_MODEL_FILE)
            .await
            .with_context(|| format!("Failed to download {} from {}", HUB_MODEL_FILE, config.repo))?
    };

    let tokenizer = if tokenizer_local {
        config.tokenizer_path.clone()
    } else {
        repo.get(HUB_TOKENIZER_FILE).await.with_context(|| {
            format!("Failed to download {} from {}", HUB_TOKENIZER_FILE, config.repo)
        })?
    };

    info!("   model: {}", model.display());
    info!("   tokenizer: {}", tokenizer.display());

    Ok(ModelFiles { model, tokenizer })
}
