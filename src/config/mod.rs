// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration
//!
//! Every setting can be given as a command line flag or through the
//! matching `EMBED_*` environment variable (a `.env` file is loaded first).

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

use crate::embeddings::EmbeddingModelConfig;

/// Default model name reported by /health
pub const DEFAULT_MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// HuggingFace Hub repository the model files are fetched from
pub const DEFAULT_MODEL_REPO: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than 0")]
    MustBePositive { field: &'static str },

    #[error("model name cannot be empty")]
    EmptyModelName,
}

/// Fabstir Embed Server
#[derive(Parser, Debug, Clone)]
#[command(name = "fabstir-embed-server")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "HTTP server for all-MiniLM-L6-v2 sentence embeddings", long_about = None)]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "EMBED_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on (0 picks a free port)
    #[arg(long, env = "EMBED_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Model name reported by /health
    #[arg(long, env = "EMBED_MODEL_NAME", default_value = DEFAULT_MODEL_NAME)]
    pub model_name: String,

    /// HuggingFace Hub repository used when local model files are missing
    #[arg(long, env = "EMBED_MODEL_REPO", default_value = DEFAULT_MODEL_REPO)]
    pub model_repo: String,

    /// Path to the ONNX model file
    #[arg(
        long,
        env = "EMBED_MODEL_PATH",
        default_value = "./models/all-MiniLM-L6-v2-onnx/model.onnx"
    )]
    pub model_path: PathBuf,

    /// Path to the tokenizer JSON file
    #[arg(
        long,
        env = "EMBED_TOKENIZER_PATH",
        default_value = "./models/all-MiniLM-L6-v2-onnx/tokenizer.json"
    )]
    pub tokenizer_path: PathBuf,

    /// Expected embedding dimension
    #[arg(long, env = "EMBED_DIMENSION", default_value_t = 384)]
    pub dimension: usize,

    /// Maximum tokens per text; longer inputs are truncated
    #[arg(long, env = "EMBED_MAX_LENGTH", default_value_t = 256)]
    pub max_length: usize,

    /// ONNX Runtime intra-op threads
    #[arg(long, env = "EMBED_INTRA_THREADS", default_value_t = 4)]
    pub intra_threads: usize,

    /// Return raw mean-pooled vectors instead of unit-length ones
    #[arg(long, env = "EMBED_NO_NORMALIZE")]
    pub no_normalize: bool,

    /// Never download model files from the HuggingFace Hub
    #[arg(long, env = "EMBED_OFFLINE")]
    pub offline: bool,

    /// Reject request bodies larger than this many bytes (unlimited if unset)
    #[arg(long, env = "EMBED_MAX_BODY_BYTES")]
    pub max_body_bytes: Option<usize>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_name.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }
        if self.dimension == 0 {
            return Err(ConfigError::MustBePositive { field: "dimension" });
        }
        if self.max_length == 0 {
            return Err(ConfigError::MustBePositive {
                field: "max_length",
            });
        }
        if self.intra_threads == 0 {
            return Err(ConfigError::MustBePositive {
                field: "intra_threads",
            });
        }
        if self.max_body_bytes == Some(0) {
            return Err(ConfigError::MustBePositive {
                field: "max_body_bytes",
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn model_config(&self) -> EmbeddingModelConfig {
        EmbeddingModelConfig {
            name: self.model_name.clone(),
            repo: self.model_repo.clone(),
            model_path: self.model_path.clone(),
            tokenizer_path: self.tokenizer_path.clone(),
            dimension: self.dimension,
            max_length: self.max_length,
            intra_threads: self.intra_threads,
            normalize: !self.no_normalize,
            allow_download: !self.offline,
        }
    }
}
