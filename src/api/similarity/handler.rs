// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use tracing::info;

use super::{SimilarityRequest, SimilarityResponse};
use crate::api::http_server::AppState;
use crate::api::payload::{body_value, JsonPayload};
use crate::api::ApiError;
use crate::embeddings::cosine_similarity;

/// POST /similarity handler
///
/// Embeds `text1` and `text2` separately and returns their cosine similarity.
///
/// # Errors
/// - 400 Bad Request: body is not JSON, either field missing or not a string
/// - 500 Internal Server Error: model invocation failed
pub async fn similarity_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let request = SimilarityRequest::try_from(body_value(payload)?)?;

    info!("Calculating similarity between texts...");

    let failed =
        |e: anyhow::Error| ApiError::InternalError(format!("Failed to calculate similarity: {:#}", e));

    let embedding1 = state.encoder.encode(&request.text1).await.map_err(failed)?;
    let embedding2 = state.encoder.encode(&request.text2).await.map_err(failed)?;
    let similarity = cosine_similarity(&embedding1, &embedding2).map_err(failed)?;

    info!("Similarity score: {}", similarity);

    Ok(Json(SimilarityResponse { similarity }))
}
