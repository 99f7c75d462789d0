// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence pooling over token embeddings

use anyhow::{bail, Result};
use ndarray::{ArrayView2, ArrayView3, Axis};

/// Mean pooling weighted by the attention mask.
///
/// `token_embeddings` is `[seq_len, hidden_dim]` for one sequence; positions
/// whose mask value is 0 (padding) do not contribute.
pub fn mean_pool(token_embeddings: ArrayView2<'_, f32>, attention_mask: &[i64]) -> Vec<f32> {
    let hidden_dim = token_embeddings.ncols();
    let mut pooled = vec![0.0f32; hidden_dim];
    let mut sum_mask = 0.0f32;

    for (token, &mask) in token_embeddings.outer_iter().zip(attention_mask) {
        if mask == 0 {
            continue;
        }
        let weight = mask as f32;
        sum_mask += weight;
        for (acc, value) in pooled.iter_mut().zip(token.iter()) {
            *acc += value * weight;
        }
    }

    // Avoid division by zero for fully masked rows
    for value in &mut pooled {
        *value /= sum_mask.max(1e-9);
    }

    pooled
}

/// Scales `vector` to unit length in place. Zero vectors are left untouched.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// Pools every row of a `[batch, seq_len, hidden_dim]` model output.
///
/// `attention_mask` is the flattened `[batch, seq_len]` mask fed to the
/// model. Rows and mask chunks must pair up one to one.
pub fn pool_batch(
    hidden_states: ArrayView3<'_, f32>,
    attention_mask: &[i64],
    normalize: bool,
) -> Result<Vec<Vec<f32>>> {
    let (rows, seq_len, _) = hidden_states.dim();
    if seq_len == 0 || rows * seq_len != attention_mask.len() {
        bail!(
            "Model output [{}, {}] does not match attention mask of {} values",
            rows,
            seq_len,
            attention_mask.len()
        );
    }

    let embeddings = hidden_states
        .axis_iter(Axis(0))
        .zip(attention_mask.chunks(seq_len))
        .map(|(tokens, mask)| {
            let mut pooled = mean_pool(tokens, mask);
            if normalize {
                l2_normalize(&mut pooled);
            }
            pooled
        })
        .collect();

    Ok(embeddings)
}
