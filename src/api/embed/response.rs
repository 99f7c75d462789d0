// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /embed
///
/// # Example
/// ```json
/// { "embedding": [0.1, 0.2, ...] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
}

/// Response body for POST /batch_embed, one vector per input text
///
/// # Example
/// ```json
/// { "embeddings": [[0.1, 0.2, ...], [0.3, 0.4, ...]] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchEmbedResponse {
    pub embeddings: Vec<Vec<f32>>,
}

impl BatchEmbedResponse {
    /// Returns the number of embeddings in the response
    pub fn embedding_count(&self) -> usize {
        self.embeddings.len()
    }
}
