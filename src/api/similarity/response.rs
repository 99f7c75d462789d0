// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /similarity
///
/// `similarity` is the cosine similarity of the two embeddings, in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResponse {
    pub similarity: f32,
}
