// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence embeddings
//!
//! `TextEncoder` is what the HTTP handlers talk to. `OnnxEmbeddingModel`
//! implements it on top of ONNX Runtime and the HuggingFace tokenizer.

pub mod model_files;
pub mod onnx_model;
pub mod pooling;
pub mod similarity;

pub use model_files::{resolve_model_files, ModelFiles};
pub use onnx_model::OnnxEmbeddingModel;
pub use similarity::cosine_similarity;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Configuration for loading the embedding model
#[derive(Debug, Clone)]
pub struct EmbeddingModelConfig {
    /// Model name (e.g., "all-MiniLM-L6-v2")
    pub name: String,
    /// HuggingFace Hub repository holding `onnx/model.onnx` and `tokenizer.json`
    pub repo: String,
    /// Path to ONNX model file
    pub model_path: PathBuf,
    /// Path to tokenizer JSON file
    pub tokenizer_path: PathBuf,
    /// Expected embedding dimensions
    pub dimension: usize,
    /// Inputs are truncated to this many tokens
    pub max_length: usize,
    /// ONNX Runtime intra-op thread count
    pub intra_threads: usize,
    /// L2-normalize pooled vectors
    pub normalize: bool,
    /// Fetch missing files from the hub
    pub allow_download: bool,
}

/// Turns text into fixed-length vectors.
///
/// Implementations are loaded once and shared read-only by every request.
#[async_trait]
pub trait TextEncoder: Send + Sync {
    /// Name reported by the health endpoint
    fn model_name(&self) -> &str;

    /// Length of every vector this encoder returns
    fn dimension(&self) -> usize;

    /// Encodes a batch of texts, one vector per input in input order
    async fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Encodes a single text
    async fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.encode_batch(&[text.to_string()]).await?;
        embeddings
            .pop()
            .ok_or_else(|| anyhow!("Encoder returned no embedding"))
    }
}
