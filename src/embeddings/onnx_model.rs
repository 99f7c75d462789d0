// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX Embedding Model Wrapper
//!
//! This module provides a wrapper around ONNX Runtime for running
//! the all-MiniLM-L6-v2 sentence transformer model.
//!
//! Features:
//! - ONNX model loading from disk (or the HuggingFace Hub cache)
//! - BERT tokenization with truncation and batch padding
//! - Single and batch embedding generation
//! - Mean pooling over token embeddings, then L2 normalization
//! - 384-dimensional output vectors

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use ndarray::{Array2, Ix3};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info};

use super::pooling::pool_batch;
use super::{resolve_model_files, EmbeddingModelConfig, TextEncoder};

/// ONNX-based embedding model (all-MiniLM-L6-v2)
///
/// Produces the same vectors as sentence-transformers' `encode` for this
/// model:
/// - BERT-based tokenizer
/// - Mean pooling over token embeddings
/// - L2 normalization
///
/// # Thread Safety
/// All fields are wrapped in Arc for cheap cloning. The ONNX session needs
/// exclusive access to run, so inference calls are serialized on its mutex.
#[derive(Clone)]
pub struct OnnxEmbeddingModel {
    /// ONNX Runtime session
    session: Arc<Mutex<Session>>,

    /// BERT tokenizer (truncation configured at load)
    tokenizer: Arc<Tokenizer>,

    /// Model name (e.g., "all-MiniLM-L6-v2")
    model_name: String,

    /// Output dimension (384 for all-MiniLM-L6-v2)
    dimension: usize,

    /// Whether pooled vectors are scaled to unit length
    normalize: bool,
}

impl std::fmt::Debug for OnnxEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbeddingModel")
            .field("model_name", &self.model_name)
            .field("dimension", &self.dimension)
            .field("normalize", &self.normalize)
            .finish_non_exhaustive()
    }
}

impl OnnxEmbeddingModel {
    /// Resolves the model files and loads the model
    ///
    /// # Errors
    /// Returns error if:
    /// - Model or tokenizer file cannot be found or downloaded
    /// - ONNX Runtime initialization fails
    /// - The validation inference does not produce `config.dimension` values
    pub async fn load(config: EmbeddingModelConfig) -> Result<Self> {
        let files = resolve_model_files(&config).await?;

        tokio::task::spawn_blocking(move || {
            Self::from_files(&config, &files.model, &files.tokenizer)
        })
        .await
        .map_err(|e| anyhow!("Model loading task failed: {}", e))?
    }

    /// Builds the session and tokenizer from local files, then runs one
    /// validation inference.
    ///
    /// # Example
    /// ```ignore
    /// let model = OnnxEmbeddingModel::from_files(
    ///     &config,
    ///     Path::new("./models/all-MiniLM-L6-v2-onnx/model.onnx"),
    ///     Path::new("./models/all-MiniLM-L6-v2-onnx/tokenizer.json"),
    /// )?;
    /// ```
    pub fn from_files(
        config: &EmbeddingModelConfig,
        model_path: &Path,
        tokenizer_path: &Path,
    ) -> Result<Self> {
        info!("🚀 Initializing ONNX embedding model: {}", config.name);

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(config.intra_threads)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let mut tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow!("Failed to load tokenizer: {}", e))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: config.max_length,
                ..Default::default()
            }))
            .map_err(|e| anyhow!("Failed to configure truncation: {}", e))?;

        let model = Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name: config.name.clone(),
            dimension: config.dimension,
            normalize: config.normalize,
        };

        // Fails if the exported graph does not emit `dimension` hidden values
        model
            .run_batch(&["validation test".to_string()])
            .context("Model validation inference failed")?;

        info!(
            "✅ ONNX embedding model loaded: {} ({} dimensions)",
            model.model_name, model.dimension
        );

        Ok(model)
    }

    /// Tokenizes, runs inference and pools. Blocks the calling thread.
    fn run_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let encodings = self
            .tokenizer
            .encode_batch(inputs, true)
            .map_err(|e| anyhow!("Tokenization failed: {}", e))?;

        let batch_size = encodings.len();
        let max_len = encodings
            .iter()
            .map(|enc| enc.get_ids().len())
            .max()
            .unwrap_or(0);

        // Pad all sequences to the longest one in the batch
        let mut input_ids = Vec::with_capacity(batch_size * max_len);
        let mut attention_mask = Vec::with_capacity(batch_size * max_len);
        let mut token_type_ids = Vec::with_capacity(batch_size * max_len);

        for encoding in &encodings {
            let ids = encoding.get_ids();
            let padding = max_len - ids.len();

            input_ids.extend(ids.iter().map(|&id| id as i64));
            attention_mask.extend(encoding.get_attention_mask().iter().map(|&m| m as i64));
            token_type_ids.extend(encoding.get_type_ids().iter().map(|&t| t as i64));

            input_ids.extend(std::iter::repeat(0i64).take(padding));
            attention_mask.extend(std::iter::repeat(0i64).take(padding));
            token_type_ids.extend(std::iter::repeat(0i64).take(padding));
        }

        let input_ids_array = Array2::from_shape_vec((batch_size, max_len), input_ids)
            .context("Failed to create input_ids array")?;
        let attention_mask_array =
            Array2::from_shape_vec((batch_size, max_len), attention_mask.clone())
                .context("Failed to create attention_mask array")?;
        let token_type_ids_array = Array2::from_shape_vec((batch_size, max_len), token_type_ids)
            .context("Failed to create token_type_ids array")?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow!("ONNX session lock poisoned"))?;
        let outputs = session.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids_array)?,
            "attention_mask" => Value::from_array(attention_mask_array)?,
            "token_type_ids" => Value::from_array(token_type_ids_array)?
        ])?;

        // Index [0] rather than by name: exports differ in output naming.
        // Token-level output: [batch, seq_len, hidden_dim]
        let hidden_states = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?
            .into_dimensionality::<Ix3>()
            .context("Model output is not [batch, seq_len, hidden_dim]")?;

        let hidden_dim = hidden_states.shape()[2];
        if hidden_dim != self.dimension {
            bail!(
                "Model outputs {} dimensions (expected {})",
                hidden_dim,
                self.dimension
            );
        }

        let embeddings = pool_batch(hidden_states, &attention_mask, self.normalize)?;

        debug!(
            "Encoded batch of {} texts (padded to {} tokens)",
            batch_size, max_len
        );

        Ok(embeddings)
    }

    /// Generates embedding for a single text
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        TextEncoder::encode(self, text).await
    }

    /// Generates embeddings for multiple texts in one inference call
    ///
    /// # Example
    /// ```ignore
    /// let texts = vec!["Hello".to_string(), "World".to_string()];
    /// let embeddings = model.embed_batch(&texts).await?;
    /// assert_eq!(embeddings.len(), 2);
    /// ```
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let model = self.clone();
        let texts = texts.to_vec();
        tokio::task::spawn_blocking(move || model.run_batch(&texts))
            .await
            .map_err(|e| anyhow!("Embedding task failed: {}", e))?
    }
}

#[async_trait]
impl TextEncoder for OnnxEmbeddingModel {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.embed_batch(texts).await
    }
}
