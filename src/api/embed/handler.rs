// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /embed and POST /batch_embed HTTP handlers

use axum::{extract::State, Json};
use tracing::info;

use crate::api::embed::{BatchEmbedRequest, BatchEmbedResponse, EmbedRequest, EmbedResponse};
use crate::api::http_server::AppState;
use crate::api::payload::{body_value, JsonPayload};
use crate::api::ApiError;

/// Characters of input text included in log lines
const LOG_PREVIEW_CHARS: usize = 50;

/// POST /embed handler
///
/// Generates one embedding for `text`.
///
/// # Errors
/// - 400 Bad Request: body is not JSON, `text` missing or not a string
/// - 500 Internal Server Error: model invocation failed
pub async fn embed_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<Json<EmbedResponse>, ApiError> {
    let request = EmbedRequest::try_from(body_value(payload)?)?;

    info!(
        "Generating embedding for text: {}...",
        preview(&request.text)
    );

    let embedding = state
        .encoder
        .encode(&request.text)
        .await
        .map_err(|e| ApiError::InternalError(format!("Failed to generate embedding: {:#}", e)))?;

    info!("Generated embedding with {} dimensions", embedding.len());

    Ok(Json(EmbedResponse { embedding }))
}

/// POST /batch_embed handler
///
/// Generates one embedding per entry of `texts`, in input order.
///
/// # Errors
/// - 400 Bad Request: body is not JSON, `texts` missing, not a list, or
///   holding a non-string item
/// - 500 Internal Server Error: model invocation failed
pub async fn batch_embed_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<Json<BatchEmbedResponse>, ApiError> {
    let request = BatchEmbedRequest::try_from(body_value(payload)?)?;

    info!("Generating embeddings for {} texts...", request.texts.len());

    let embeddings = state
        .encoder
        .encode_batch(&request.texts)
        .await
        .map_err(|e| ApiError::InternalError(format!("Failed to generate embeddings: {:#}", e)))?;

    if embeddings.len() != request.texts.len() {
        return Err(ApiError::InternalError(format!(
            "Failed to generate embeddings: expected {} vectors, got {}",
            request.texts.len(),
            embeddings.len()
        )));
    }

    let response = BatchEmbedResponse { embeddings };
    info!("Generated {} embeddings", response.embedding_count());

    Ok(Json(response))
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}
